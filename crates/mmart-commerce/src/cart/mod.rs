//! Shopping cart module.
//!
//! Contains the cart store, its lines, and the cart page summary.

mod line;
mod store;
mod summary;

pub use line::{CartLine, Specification};
pub use store::{CartStore, Navigator, CART_PATH, CART_STORAGE_KEY, MAX_QUANTITY_PER_LINE};
pub use summary::{CartSummary, DeliveryOption, SummaryConfig};
