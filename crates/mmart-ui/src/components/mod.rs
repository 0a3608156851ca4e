//! Storefront components.

mod carousel;
mod cart;
mod catalog;

pub use carousel::{CarouselSlide, TouchCarousel};
pub use cart::{AddToCartButton, CartBadge, CartPage, CartSummaryPanel};
pub use catalog::{CategoryRail, ProductCard, ProductGallery, ProductRail};
