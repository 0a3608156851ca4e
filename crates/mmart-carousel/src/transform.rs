//! Track position output for rendering.

/// How the track moves to its new offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Follow the finger with no animation.
    Instant,
    /// Ease out to the resting position.
    Ease { duration_ms: u64 },
}

/// Horizontal position of the slide track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Offset as a percentage of the container width. Zero or negative.
    pub offset_percent: f64,
    pub transition: Transition,
}

impl Transform {
    /// Value for the CSS `transform` property.
    pub fn css_transform(&self) -> String {
        // Avoid rendering "-0%".
        let offset = if self.offset_percent == 0.0 {
            0.0
        } else {
            self.offset_percent
        };
        format!("translateX({offset}%)")
    }

    /// Value for the CSS `transition` property.
    pub fn css_transition(&self) -> String {
        match self.transition {
            Transition::Instant => "none".to_string(),
            Transition::Ease { duration_ms } => format!("transform {duration_ms}ms ease-out"),
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self.transition, Transition::Ease { .. })
    }
}
