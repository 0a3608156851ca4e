//! E-commerce domain types and logic for the MMart storefront.
//!
//! - **Cart**: the shopper's cart with write-through local persistence,
//!   derived totals and the cart page summary
//! - **Catalog**: products, categories and category page lookups
//! - **Money**: minor-unit currency amounts and naira formatting
//!
//! # Example
//!
//! ```rust
//! use mmart_cache::MemoryStore;
//! use mmart_commerce::prelude::*;
//!
//! let mut cart = CartStore::load(MemoryStore::new());
//! cart.add_to_cart(CartLine::new(
//!     1,
//!     "Fresh Whole Milk",
//!     Money::from_major(1200, Currency::NGN),
//!     "/milk.png",
//!     2,
//! ))
//! .unwrap();
//!
//! assert_eq!(cart.cart_count(), 2);
//! assert_eq!(cart.cart_total().display(), "\u{20a6}2,400.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        CartLine, CartStore, CartSummary, DeliveryOption, Navigator, Specification,
        SummaryConfig, CART_PATH, CART_STORAGE_KEY, MAX_QUANTITY_PER_LINE,
    };

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};
}
