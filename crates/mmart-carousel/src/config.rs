//! Carousel configuration and per-call-site presets.

use crate::CarouselError;
use serde::{Deserialize, Serialize};

/// How many slides are visible at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlidesPerView {
    /// The same count at every viewport width.
    Fixed(usize),
    /// A count that depends on the viewport width.
    Responsive(Vec<Breakpoint>),
}

/// One responsive step: from `min_width_px` upward, show `slides`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width_px: u32,
    pub slides: usize,
}

impl Breakpoint {
    pub const fn new(min_width_px: u32, slides: usize) -> Self {
        Self {
            min_width_px,
            slides,
        }
    }
}

impl SlidesPerView {
    /// Slides visible at `viewport_width_px`. Never less than 1.
    ///
    /// Uses the widest breakpoint the viewport reaches, or the narrowest
    /// breakpoint when the viewport is below all of them.
    pub fn resolve(&self, viewport_width_px: f64) -> usize {
        let slides = match self {
            SlidesPerView::Fixed(n) => *n,
            SlidesPerView::Responsive(breakpoints) => breakpoints
                .iter()
                .filter(|b| f64::from(b.min_width_px) <= viewport_width_px)
                .max_by_key(|b| b.min_width_px)
                .or_else(|| breakpoints.iter().min_by_key(|b| b.min_width_px))
                .map_or(1, |b| b.slides),
        };
        slides.max(1)
    }

    fn validate(&self) -> Result<(), CarouselError> {
        match self {
            SlidesPerView::Fixed(0) => Err(CarouselError::ZeroSlidesPerView),
            SlidesPerView::Fixed(_) => Ok(()),
            SlidesPerView::Responsive(breakpoints) if breakpoints.is_empty() => {
                Err(CarouselError::EmptyBreakpoints)
            }
            SlidesPerView::Responsive(breakpoints) => {
                if breakpoints.iter().any(|b| b.slides == 0) {
                    return Err(CarouselError::ZeroSlidesPerView);
                }
                Ok(())
            }
        }
    }
}

impl Default for SlidesPerView {
    fn default() -> Self {
        SlidesPerView::Fixed(1)
    }
}

/// Behavior of one carousel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Slides visible at once.
    pub slides_per_view: SlidesPerView,
    /// Advance automatically on a timer, wrapping at the end.
    pub auto_rotate: bool,
    /// Time between automatic advances.
    pub rotation_interval_ms: u64,
    /// Horizontal travel a swipe needs before it changes slide.
    pub min_swipe_px: f64,
    /// Render one dot per page.
    pub show_dots: bool,
    /// Render previous/next buttons.
    pub show_arrows: bool,
    /// Duration of the settle animation.
    pub settle_ms: u64,
    /// Previous/next buttons wrap around instead of stopping at the ends.
    pub wrap_controls: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides_per_view: SlidesPerView::default(),
            auto_rotate: false,
            rotation_interval_ms: 5_000,
            min_swipe_px: 30.0,
            show_dots: true,
            show_arrows: false,
            settle_ms: 250,
            wrap_controls: false,
        }
    }
}

impl CarouselConfig {
    /// Full-bleed promotional banner: one slide, dots, rotating every 5s.
    pub fn hero_banner() -> Self {
        Self {
            auto_rotate: true,
            ..Self::default()
        }
    }

    /// Category icons: up to six per view with arrow buttons.
    pub fn category_rail() -> Self {
        Self {
            slides_per_view: SlidesPerView::Responsive(vec![
                Breakpoint::new(0, 2),
                Breakpoint::new(480, 3),
                Breakpoint::new(768, 4),
                Breakpoint::new(1024, 6),
            ]),
            show_dots: false,
            show_arrows: true,
            ..Self::default()
        }
    }

    /// Featured and similar product rails: up to four cards per view.
    pub fn product_rail() -> Self {
        Self {
            slides_per_view: SlidesPerView::Responsive(vec![
                Breakpoint::new(0, 2),
                Breakpoint::new(768, 3),
                Breakpoint::new(1024, 4),
            ]),
            min_swipe_px: 50.0,
            show_dots: false,
            show_arrows: true,
            settle_ms: 500,
            ..Self::default()
        }
    }

    /// Product detail images: one per view, arrows wrap around.
    pub fn image_gallery() -> Self {
        Self {
            min_swipe_px: 50.0,
            show_arrows: true,
            wrap_controls: true,
            ..Self::default()
        }
    }

    /// Check the configuration for values no carousel can honor.
    pub fn validate(&self) -> Result<(), CarouselError> {
        self.slides_per_view.validate()?;
        if self.auto_rotate && self.rotation_interval_ms == 0 {
            return Err(CarouselError::ZeroRotationInterval);
        }
        if !self.min_swipe_px.is_finite() || self.min_swipe_px < 0.0 {
            return Err(CarouselError::InvalidSwipeThreshold(self.min_swipe_px));
        }
        Ok(())
    }
}
