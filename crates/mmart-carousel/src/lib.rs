//! Touch carousel interaction model for the MMart storefront.
//!
//! A [`Carousel`] tracks which slide is showing, follows touch drags,
//! decides whether a swipe changes slide, and drives optional
//! auto-rotation. It has no DOM or clock of its own: the host feeds it
//! touch coordinates, measured widths and elapsed time, then renders the
//! returned [`Transform`].
//!
//! # Example
//!
//! ```rust
//! use mmart_carousel::{Carousel, CarouselConfig};
//!
//! let mut hero = Carousel::new(CarouselConfig::hero_banner(), 3).unwrap();
//! hero.set_container_width(400.0);
//!
//! hero.touch_start(300.0);
//! hero.touch_move(250.0);
//! assert_eq!(hero.touch_end(), Some(1));
//! assert_eq!(hero.transform().css_transform(), "translateX(-100%)");
//! ```

pub mod carousel;
pub mod config;
pub mod error;
pub mod rotation;
pub mod transform;

pub use carousel::{Carousel, Drag, Phase, DEFAULT_VIEWPORT_WIDTH_PX};
pub use config::{Breakpoint, CarouselConfig, SlidesPerView};
pub use error::CarouselError;
pub use rotation::RotationTimer;
pub use transform::{Transform, Transition};
