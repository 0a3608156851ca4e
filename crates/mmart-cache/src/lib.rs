//! Typed local key-value storage for the MMart storefront.
//!
//! Provides a simple, ergonomic API for keeping small pieces of client
//! state (the shopper's cart) in durable local storage with automatic
//! JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use mmart_cache::{Cache, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Line {
//!     product_id: u64,
//!     quantity: i64,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("mmartCart", &vec![Line { product_id: 1, quantity: 2 }]).unwrap();
//!
//! // Retrieve a value
//! let lines: Option<Vec<Line>> = cache.get("mmartCart").unwrap();
//! assert_eq!(lines.unwrap().len(), 1);
//!
//! // Delete a value
//! cache.delete("mmartCart").unwrap();
//! ```

mod backend;
mod error;
mod kv;

#[cfg(target_arch = "wasm32")]
pub use backend::LocalStorage;
pub use backend::{KeyValueStore, MemoryStore};
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KeyValueStore, MemoryStore};
}
