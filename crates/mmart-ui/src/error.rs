//! Error types for the storefront UI.

use mmart_carousel::CarouselError;
use thiserror::Error;

/// Errors raised while loading storefront configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML could not be parsed into a configuration.
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A carousel section failed validation.
    #[error("Invalid carousel '{name}': {source}")]
    Carousel {
        name: &'static str,
        #[source]
        source: CarouselError,
    },

    /// The cart storage key is blank.
    #[error("Cart storage key must not be empty")]
    EmptyStorageKey,

    /// Delivery pricing uses a different currency than the cart.
    #[error("Summary prices must be in {0}")]
    CurrencyMismatch(String),
}
