//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and catalog operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Product has no stock left.
    #[error("Product {0} is out of stock")]
    OutOfStock(u64),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Negative unit price.
    #[error("Invalid price for product {product_id}: {amount_minor}")]
    InvalidPrice { product_id: u64, amount_minor: i64 },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Unparseable money amount.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// The persisted cart could not be decoded.
    #[error("Stored cart is corrupt: {0}")]
    StorageDecode(String),

    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<mmart_cache::CacheError> for CommerceError {
    fn from(e: mmart_cache::CacheError) -> Self {
        if e.is_corrupt() {
            CommerceError::StorageDecode(e.to_string())
        } else {
            CommerceError::Storage(e.to_string())
        }
    }
}
