//! The carousel state machine.
//!
//! One model serves every carousel on the storefront: the hero banner, the
//! category and product rails, and the product image gallery. Differences
//! between them live entirely in [`CarouselConfig`].
//!
//! All offsets are percentages of the container width. The track rests at
//! `-index * (100 / slides_per_view)` and a drag may never pull it past the
//! first or last resting position.

use crate::{CarouselConfig, CarouselError, RotationTimer, Transform, Transition};
use std::time::Duration;
use tracing::{debug, trace};

/// Viewport width assumed until the host reports one.
pub const DEFAULT_VIEWPORT_WIDTH_PX: f64 = 1280.0;

/// Gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging(Drag),
}

/// An in-progress touch drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    /// X coordinate where the finger went down.
    pub start_x: f64,
    /// Most recent X coordinate, if the finger has moved.
    pub last_x: Option<f64>,
}

/// Interaction state for one carousel.
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    slide_count: usize,
    slides_per_view: usize,
    current_index: usize,
    offset_percent: f64,
    phase: Phase,
    container_width_px: f64,
    rotation: RotationTimer,
}

impl Carousel {
    /// Create a carousel at slide 0 for the default viewport width.
    pub fn new(config: CarouselConfig, slide_count: usize) -> Result<Self, CarouselError> {
        Self::with_viewport(config, slide_count, DEFAULT_VIEWPORT_WIDTH_PX)
    }

    /// Create a carousel at slide 0 for a known viewport width.
    pub fn with_viewport(
        config: CarouselConfig,
        slide_count: usize,
        viewport_width_px: f64,
    ) -> Result<Self, CarouselError> {
        config.validate()?;
        let slides_per_view = config.slides_per_view.resolve(viewport_width_px);
        let rotation = RotationTimer::new(Duration::from_millis(config.rotation_interval_ms));

        Ok(Self {
            config,
            slide_count,
            slides_per_view,
            current_index: 0,
            offset_percent: 0.0,
            phase: Phase::Idle,
            container_width_px: 0.0,
            rotation,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    pub fn slides_per_view(&self) -> usize {
        self.slides_per_view
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn offset_percent(&self) -> f64 {
        self.offset_percent
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Width of one slide as a percentage of the container.
    pub fn step_percent(&self) -> f64 {
        100.0 / self.slides_per_view as f64
    }

    /// Highest index the track can rest at.
    pub fn max_index(&self) -> usize {
        self.slide_count.saturating_sub(self.slides_per_view)
    }

    /// Number of distinct resting positions.
    pub fn page_count(&self) -> usize {
        if self.slide_count == 0 {
            0
        } else {
            self.max_index() + 1
        }
    }

    pub fn dot_count(&self) -> usize {
        self.page_count()
    }

    pub fn dots_visible(&self) -> bool {
        self.config.show_dots && self.page_count() > 1
    }

    pub fn arrows_visible(&self) -> bool {
        self.config.show_arrows && self.page_count() > 1
    }

    /// Current track position and how to animate to it.
    pub fn transform(&self) -> Transform {
        let transition = if self.is_dragging() {
            Transition::Instant
        } else {
            Transition::Ease {
                duration_ms: self.config.settle_ms,
            }
        };
        Transform {
            offset_percent: self.offset_percent,
            transition,
        }
    }

    /// Record the measured container width. Ignores non-positive values.
    pub fn set_container_width(&mut self, width_px: f64) {
        if width_px.is_finite() && width_px > 0.0 {
            self.container_width_px = width_px;
        }
    }

    /// Re-resolve slides per view for a new viewport width.
    ///
    /// Returns the new index if the current one had to be clamped.
    pub fn set_viewport_width(&mut self, width_px: f64) -> Option<usize> {
        let slides_per_view = self.config.slides_per_view.resolve(width_px);
        if slides_per_view == self.slides_per_view {
            return None;
        }
        debug!(slides_per_view, "carousel layout changed");
        self.slides_per_view = slides_per_view;
        self.clamp_index()
    }

    /// Replace the slide count. Returns the new index if it had to be clamped.
    pub fn set_slide_count(&mut self, slide_count: usize) -> Option<usize> {
        self.slide_count = slide_count;
        self.clamp_index()
    }

    /// Begin a drag at `x`. Pauses auto-rotation until the drag ends.
    pub fn touch_start(&mut self, x: f64) {
        if self.is_empty() {
            return;
        }
        trace!(x, "touch start");
        self.phase = Phase::Dragging(Drag {
            start_x: x,
            last_x: None,
        });
        self.rotation.cancel();
    }

    /// Follow the finger to `x`.
    ///
    /// The move is dropped when it would pull the track past the first or
    /// last resting position; the track holds its last accepted offset.
    /// Until a container width is known the track does not follow the
    /// finger, but the swipe still counts on release.
    pub fn touch_move(&mut self, x: f64) {
        let Phase::Dragging(drag) = &mut self.phase else {
            return;
        };
        drag.last_x = Some(x);
        let start_x = drag.start_x;

        if self.container_width_px <= 0.0 {
            trace!(x, "drag ignored before container is measured");
            return;
        }
        let diff_percent = (start_x - x) / self.container_width_px * 100.0;
        let candidate = self.resting_offset(self.current_index) - diff_percent;

        if candidate > 0.0 || candidate < self.resting_offset(self.max_index()) {
            trace!(candidate, "drag clamped at edge");
            return;
        }
        self.offset_percent = candidate;
    }

    /// Finish the drag.
    ///
    /// A leftward swipe longer than the threshold moves forward one slide, a
    /// rightward one moves back one slide, anything else snaps back. Returns
    /// the new index when it changed.
    pub fn touch_end(&mut self) -> Option<usize> {
        let Phase::Dragging(drag) = std::mem::take(&mut self.phase) else {
            return None;
        };
        self.rotation.rearm();

        let changed = drag.last_x.and_then(|end_x| {
            let displacement = drag.start_x - end_x;
            let threshold = self.config.min_swipe_px;
            if displacement > threshold && self.current_index < self.max_index() {
                Some(self.current_index + 1)
            } else if displacement < -threshold && self.current_index > 0 {
                Some(self.current_index - 1)
            } else {
                None
            }
        });

        match changed {
            Some(index) => self.move_to(index),
            None => {
                trace!(index = self.current_index, "swipe reverted");
                self.settle();
                None
            }
        }
    }

    /// Abandon the drag and snap back.
    pub fn touch_cancel(&mut self) {
        if self.is_dragging() {
            self.phase = Phase::Idle;
            self.rotation.rearm();
            self.settle();
        }
    }

    /// Whether the auto-rotation timer should be running.
    pub fn rotation_active(&self) -> bool {
        self.config.auto_rotate && !self.is_dragging() && self.page_count() > 1
    }

    /// Time until the next automatic advance, if rotation is active.
    pub fn next_rotation_in(&self) -> Option<Duration> {
        if self.rotation_active() {
            self.rotation.remaining()
        } else {
            None
        }
    }

    /// Feed elapsed time to the rotation timer.
    ///
    /// Advances once per completed interval, wrapping at the end. Returns the
    /// new index when it changed.
    pub fn tick(&mut self, elapsed: Duration) -> Option<usize> {
        if !self.rotation_active() {
            return None;
        }
        let fires = self.rotation.advance(elapsed) as usize;
        if fires == 0 {
            return None;
        }
        let index = (self.current_index + fires) % self.page_count();
        self.move_to(index)
    }

    /// Advance one position immediately, wrapping to the start.
    pub fn auto_advance(&mut self) -> Option<usize> {
        if !self.rotation_active() {
            return None;
        }
        let index = (self.current_index + 1) % self.page_count();
        self.move_to(index)
    }

    /// Jump to `index`, as from a dot. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if self.is_empty() || index > self.max_index() {
            return None;
        }
        self.move_to(index)
    }

    pub fn can_go_next(&self) -> bool {
        let max = self.max_index();
        self.current_index < max || (self.config.wrap_controls && max > 0)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_index > 0 || (self.config.wrap_controls && self.max_index() > 0)
    }

    /// Move forward one position, as from the next arrow.
    pub fn next(&mut self) -> Option<usize> {
        if !self.can_go_next() {
            return None;
        }
        let index = if self.current_index < self.max_index() {
            self.current_index + 1
        } else {
            0
        };
        self.move_to(index)
    }

    /// Move back one position, as from the previous arrow.
    pub fn prev(&mut self) -> Option<usize> {
        if !self.can_go_prev() {
            return None;
        }
        let index = if self.current_index > 0 {
            self.current_index - 1
        } else {
            self.max_index()
        };
        self.move_to(index)
    }

    fn resting_offset(&self, index: usize) -> f64 {
        -(index as f64) * self.step_percent()
    }

    fn settle(&mut self) {
        self.offset_percent = self.resting_offset(self.current_index);
    }

    fn move_to(&mut self, index: usize) -> Option<usize> {
        if index == self.current_index {
            self.settle();
            return None;
        }
        debug!(from = self.current_index, to = index, "carousel moved");
        self.current_index = index;
        self.settle();
        Some(index)
    }

    fn clamp_index(&mut self) -> Option<usize> {
        let max = self.max_index();
        let changed = if self.current_index > max {
            self.current_index = max;
            Some(max)
        } else {
            None
        };
        if !self.is_dragging() {
            self.settle();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SlidesPerView;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn single(slide_count: usize) -> Carousel {
        let mut carousel = Carousel::new(CarouselConfig::default(), slide_count).unwrap();
        carousel.set_container_width(400.0);
        carousel
    }

    fn rail(per_view: usize, slide_count: usize) -> Carousel {
        let config = CarouselConfig {
            slides_per_view: SlidesPerView::Fixed(per_view),
            min_swipe_px: 50.0,
            show_arrows: true,
            ..CarouselConfig::default()
        };
        let mut carousel = Carousel::new(config, slide_count).unwrap();
        carousel.set_container_width(800.0);
        carousel
    }

    fn swipe(carousel: &mut Carousel, from: f64, to: f64) -> Option<usize> {
        carousel.touch_start(from);
        carousel.touch_move(to);
        carousel.touch_end()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CarouselConfig {
            slides_per_view: SlidesPerView::Fixed(0),
            ..CarouselConfig::default()
        };
        assert_eq!(
            Carousel::new(config, 3).unwrap_err(),
            CarouselError::ZeroSlidesPerView
        );
    }

    #[test]
    fn test_drag_follows_finger() {
        let mut carousel = single(5);
        carousel.touch_start(300.0);
        carousel.touch_move(250.0);
        assert_eq!(carousel.offset_percent(), -12.5);
        assert_eq!(carousel.transform().transition, Transition::Instant);
    }

    #[test]
    fn test_drag_before_measurement_does_not_move_track() {
        let mut carousel = Carousel::new(CarouselConfig::default(), 5).unwrap();
        carousel.touch_start(300.0);
        carousel.touch_move(298.0);
        assert_eq!(carousel.offset_percent(), 0.0);

        carousel.touch_move(200.0);
        assert_eq!(carousel.offset_percent(), 0.0);
        assert_eq!(carousel.touch_end(), Some(1));
        assert_eq!(carousel.offset_percent(), -100.0);
    }

    #[test]
    fn test_drag_clamped_at_first_slide() {
        let mut carousel = single(5);
        carousel.touch_start(100.0);
        carousel.touch_move(150.0);
        assert_eq!(carousel.offset_percent(), 0.0);
        assert_eq!(carousel.touch_end(), None);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_drag_clamped_at_last_slide() {
        let mut carousel = single(5);
        carousel.go_to(4);
        carousel.touch_start(300.0);
        carousel.touch_move(200.0);
        assert_eq!(carousel.offset_percent(), -400.0);
        assert_eq!(carousel.touch_end(), None);
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn test_clamped_move_keeps_last_accepted_offset() {
        let mut carousel = single(5);
        carousel.go_to(1);
        carousel.touch_start(0.0);
        carousel.touch_move(200.0);
        assert_eq!(carousel.offset_percent(), -50.0);
        carousel.touch_move(600.0);
        assert_eq!(carousel.offset_percent(), -50.0);
    }

    #[test]
    fn test_offset_stays_in_range_under_any_gesture() {
        let mut carousel = single(5);
        let moves = [-900.0, 1200.0, 35.0, -10.0, 450.0, -2000.0, 5.0];
        for (i, &x) in moves.iter().enumerate() {
            carousel.touch_start(200.0);
            for &dx in &moves[i..] {
                carousel.touch_move(x + dx);
                let offset = carousel.offset_percent();
                assert!(offset <= 0.0 && offset >= -400.0, "offset {offset}");
            }
            carousel.touch_end();
            assert!(carousel.current_index() <= 4);
        }
    }

    #[test]
    fn test_swipe_past_threshold_advances_one() {
        let mut carousel = single(5);
        assert_eq!(swipe(&mut carousel, 300.0, 260.0), Some(1));
        assert_eq!(carousel.offset_percent(), -100.0);
        assert_eq!(swipe(&mut carousel, 100.0, 140.0), Some(0));
    }

    #[test]
    fn test_short_swipe_reverts() {
        let mut carousel = single(5);
        assert_eq!(swipe(&mut carousel, 300.0, 280.0), None);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.offset_percent(), 0.0);
        assert!(carousel.transform().is_animated());
    }

    #[test]
    fn test_long_flick_moves_only_one() {
        let mut carousel = single(5);
        assert_eq!(swipe(&mut carousel, 390.0, -500.0), Some(1));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_tap_without_move_does_nothing() {
        let mut carousel = single(5);
        carousel.touch_start(200.0);
        assert_eq!(carousel.touch_end(), None);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_touch_end_without_start_is_ignored() {
        let mut carousel = single(5);
        carousel.touch_move(10.0);
        assert_eq!(carousel.touch_end(), None);
        assert_eq!(carousel.phase(), Phase::Idle);
    }

    #[test]
    fn test_touch_cancel_snaps_back() {
        let mut carousel = single(5);
        carousel.touch_start(300.0);
        carousel.touch_move(200.0);
        carousel.touch_cancel();
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.offset_percent(), 0.0);
    }

    #[test]
    fn test_rail_bounds() {
        let mut carousel = rail(4, 10);
        assert_eq!(carousel.max_index(), 6);
        assert_eq!(carousel.step_percent(), 25.0);
        assert_eq!(carousel.dot_count(), 7);

        carousel.go_to(6);
        assert_eq!(carousel.offset_percent(), -150.0);
        assert!(!carousel.can_go_next());
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.go_to(7), None);
    }

    #[test]
    fn test_rail_swipe_uses_container_width() {
        let mut carousel = rail(4, 10);
        carousel.touch_start(400.0);
        carousel.touch_move(200.0);
        assert_eq!(carousel.offset_percent(), -25.0);
        assert_eq!(carousel.touch_end(), Some(1));
        assert_eq!(carousel.offset_percent(), -25.0);
    }

    #[test]
    fn test_fewer_slides_than_view_is_inert() {
        let mut carousel = rail(4, 3);
        assert_eq!(carousel.max_index(), 0);
        assert!(!carousel.arrows_visible());
        assert!(!carousel.dots_visible());
        assert_eq!(swipe(&mut carousel, 400.0, 100.0), None);
        assert_eq!(carousel.offset_percent(), 0.0);
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.prev(), None);
    }

    #[test]
    fn test_empty_carousel_ignores_input() {
        let mut carousel = single(0);
        carousel.touch_start(100.0);
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.go_to(0), None);
        assert_eq!(carousel.page_count(), 0);
        assert_eq!(carousel.tick(ms(10_000)), None);
    }

    #[test]
    fn test_arrows_stop_at_ends() {
        let mut carousel = single(3);
        assert!(!carousel.can_go_prev());
        assert_eq!(carousel.prev(), None);
        assert_eq!(carousel.next(), Some(1));
        assert_eq!(carousel.next(), Some(2));
        assert_eq!(carousel.next(), None);
    }

    #[test]
    fn test_gallery_arrows_wrap() {
        let mut carousel = Carousel::new(CarouselConfig::image_gallery(), 3).unwrap();
        assert!(carousel.can_go_prev());
        assert_eq!(carousel.prev(), Some(2));
        assert_eq!(carousel.next(), Some(0));
    }

    #[test]
    fn test_gallery_swipe_does_not_wrap() {
        let mut carousel = Carousel::new(CarouselConfig::image_gallery(), 3).unwrap();
        carousel.set_container_width(400.0);
        assert_eq!(swipe(&mut carousel, 100.0, 300.0), None);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_auto_rotate_wraps() {
        let mut carousel = Carousel::new(CarouselConfig::hero_banner(), 3).unwrap();
        let mut seen = vec![carousel.current_index()];
        for _ in 0..4 {
            carousel.tick(ms(5000));
            seen.push(carousel.current_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_auto_rotate_waits_for_interval() {
        let mut carousel = Carousel::new(CarouselConfig::hero_banner(), 3).unwrap();
        assert_eq!(carousel.tick(ms(3000)), None);
        assert_eq!(carousel.next_rotation_in(), Some(ms(2000)));
        assert_eq!(carousel.tick(ms(2000)), Some(1));
    }

    #[test]
    fn test_auto_rotate_paused_while_dragging() {
        let mut carousel = Carousel::new(CarouselConfig::hero_banner(), 3).unwrap();
        carousel.set_container_width(400.0);
        carousel.tick(ms(4000));

        carousel.touch_start(200.0);
        carousel.touch_move(190.0);
        assert!(!carousel.rotation_active());
        assert_eq!(carousel.tick(ms(20_000)), None);
        assert_eq!(carousel.auto_advance(), None);
        assert_eq!(carousel.current_index(), 0);

        carousel.touch_end();
        assert_eq!(carousel.next_rotation_in(), Some(ms(5000)));
        assert_eq!(carousel.tick(ms(4999)), None);
        assert_eq!(carousel.tick(ms(1)), Some(1));
    }

    #[test]
    fn test_rotation_off_without_config() {
        let mut carousel = single(3);
        assert!(!carousel.rotation_active());
        assert_eq!(carousel.tick(ms(60_000)), None);
        assert_eq!(carousel.auto_advance(), None);
    }

    #[test]
    fn test_auto_advance_wraps() {
        let mut carousel = Carousel::new(CarouselConfig::hero_banner(), 2).unwrap();
        assert_eq!(carousel.auto_advance(), Some(1));
        assert_eq!(carousel.auto_advance(), Some(0));
    }

    #[test]
    fn test_viewport_change_clamps_index() {
        let mut carousel =
            Carousel::with_viewport(CarouselConfig::product_rail(), 6, 375.0).unwrap();
        assert_eq!(carousel.slides_per_view(), 2);
        carousel.go_to(4);

        assert_eq!(carousel.set_viewport_width(1280.0), Some(2));
        assert_eq!(carousel.slides_per_view(), 4);
        assert_eq!(carousel.offset_percent(), -50.0);
        assert_eq!(carousel.set_viewport_width(1300.0), None);
    }

    #[test]
    fn test_slide_count_shrink_clamps_index() {
        let mut carousel = single(5);
        carousel.go_to(4);
        assert_eq!(carousel.set_slide_count(2), Some(1));
        assert_eq!(carousel.offset_percent(), -100.0);
        assert_eq!(carousel.set_slide_count(8), None);
    }

    #[test]
    fn test_go_to_current_is_noop() {
        let mut carousel = single(5);
        assert_eq!(carousel.go_to(0), None);
        assert_eq!(carousel.go_to(3), Some(3));
        assert_eq!(carousel.transform().css_transform(), "translateX(-300%)");
    }
}
