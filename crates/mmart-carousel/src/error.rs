//! Carousel configuration errors.

use thiserror::Error;

/// Errors raised when validating a [`CarouselConfig`](crate::CarouselConfig).
///
/// Gestures and navigation never fail; only configuration can be invalid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    /// A slides-per-view value of zero.
    #[error("slides per view must be at least 1")]
    ZeroSlidesPerView,

    /// A responsive layout with no breakpoints.
    #[error("responsive slides per view needs at least one breakpoint")]
    EmptyBreakpoints,

    /// Auto-rotation with a zero interval.
    #[error("rotation interval must be positive when auto-rotate is on")]
    ZeroRotationInterval,

    /// Negative or non-finite swipe threshold.
    #[error("invalid minimum swipe distance: {0}px")]
    InvalidSwipeThreshold(f64),
}
