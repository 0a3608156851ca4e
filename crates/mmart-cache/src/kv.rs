//! Key-Value store wrapper with automatic serialization.

use crate::backend::KeyValueStore;
use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over a [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a backend.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mmart_cache::{Cache, MemoryStore};
    /// let cache = Cache::new(MemoryStore::new());
    /// cache.set("greeting", &"hello").unwrap();
    /// ```
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and
    /// [`CacheError::DecodeError`] if it exists but can't be decoded as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let lines: Option<Vec<CartLine>> = cache.get("mmartCart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| CacheError::DecodeError {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        tracing::trace!(key, bytes = raw.len(), "cache write");
        self.store.set(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }

    /// Borrow the underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: u64,
        label: String,
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::new(MemoryStore::new());
        let entries = vec![Entry {
            id: 1,
            label: "milk".to_string(),
        }];
        cache.set("entries", &entries).unwrap();

        let loaded: Option<Vec<Entry>> = cache.get("entries").unwrap();
        assert_eq!(loaded, Some(entries));
    }

    #[test]
    fn test_get_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        let loaded: Option<Vec<Entry>> = cache.get("missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_get_corrupt_value() {
        let cache = Cache::new(MemoryStore::with_entry("entries", "{not json"));
        let err = cache.get::<Vec<Entry>>("entries").unwrap_err();
        assert!(err.is_corrupt());
        assert!(err.to_string().contains("entries"));
    }

    #[test]
    fn test_stored_text_is_json() {
        let store = MemoryStore::new();
        let cache = Cache::new(store.clone());
        cache
            .set(
                "e",
                &Entry {
                    id: 7,
                    label: "rice".to_string(),
                },
            )
            .unwrap();
        assert_eq!(
            store.get("e").unwrap().as_deref(),
            Some(r#"{"id":7,"label":"rice"}"#)
        );
    }

    #[test]
    fn test_delete_and_exists() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("k", &1u8).unwrap();
        assert!(cache.exists("k").unwrap());
        cache.delete("k").unwrap();
        assert!(!cache.exists("k").unwrap());
        assert!(cache.keys().unwrap().is_empty());
    }
}
