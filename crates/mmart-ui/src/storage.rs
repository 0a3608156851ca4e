//! Storage backend for the cart in the running page.

use mmart_cache::{CacheError, KeyValueStore, MemoryStore};

/// Where the cart is persisted.
///
/// In the browser this is `localStorage`. When that is unavailable
/// (private browsing, storage disabled, native builds) the cart lives in
/// memory for the lifetime of the page.
#[derive(Debug, Clone)]
pub enum CartBackend {
    #[cfg(target_arch = "wasm32")]
    Browser(mmart_cache::LocalStorage),
    Memory(MemoryStore),
}

impl CartBackend {
    /// Open the best available backend.
    pub fn open() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            match mmart_cache::LocalStorage::open() {
                Ok(storage) => return CartBackend::Browser(storage),
                Err(e) => {
                    tracing::warn!(error = %e, "localStorage unavailable, cart will not persist")
                }
            }
        }

        CartBackend::Memory(MemoryStore::new())
    }

    /// Whether the cart survives a reload.
    pub fn is_persistent(&self) -> bool {
        !matches!(self, CartBackend::Memory(_))
    }
}

impl KeyValueStore for CartBackend {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match self {
            #[cfg(target_arch = "wasm32")]
            CartBackend::Browser(s) => s.get(key),
            CartBackend::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        match self {
            #[cfg(target_arch = "wasm32")]
            CartBackend::Browser(s) => s.set(key, value),
            CartBackend::Memory(s) => s.set(key, value),
        }
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        match self {
            #[cfg(target_arch = "wasm32")]
            CartBackend::Browser(s) => s.delete(key),
            CartBackend::Memory(s) => s.delete(key),
        }
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        match self {
            #[cfg(target_arch = "wasm32")]
            CartBackend::Browser(s) => s.keys(),
            CartBackend::Memory(s) => s.keys(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_falls_back_to_memory() {
        let backend = CartBackend::open();
        assert!(!backend.is_persistent());
    }

    #[test]
    fn test_memory_delegation() {
        let backend = CartBackend::Memory(MemoryStore::new());
        backend.set("k", "v").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v"));
        assert!(backend.exists("k").unwrap());
        backend.delete("k").unwrap();
        assert!(backend.keys().unwrap().is_empty());
    }
}
