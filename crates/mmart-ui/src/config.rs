//! Storefront configuration.

use crate::ConfigError;
use mmart_carousel::CarouselConfig;
use mmart_commerce::cart::{SummaryConfig, CART_STORAGE_KEY};
use mmart_commerce::Currency;
use serde::{Deserialize, Serialize};

/// Settings bundled with the build.
const BUNDLED: &str = include_str!("../storefront.toml");

/// Configuration for the storefront UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Cart persistence settings.
    pub cart: CartSettings,

    /// Delivery pricing on the cart page.
    pub summary: SummaryConfig,

    /// Carousel behavior per call site.
    pub carousels: CarouselSettings,
}

impl StorefrontConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the build.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUNDLED)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cart.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }

        let currency = self.cart.currency;
        let fee_currency = self.summary.home_delivery_fee.currency;
        let threshold_currency = self.summary.free_shipping_threshold.map(|m| m.currency);
        if fee_currency != currency || threshold_currency.is_some_and(|c| c != currency) {
            return Err(ConfigError::CurrencyMismatch(currency.code().to_string()));
        }

        for (name, carousel) in self.carousels.iter() {
            carousel
                .validate()
                .map_err(|source| ConfigError::Carousel { name, source })?;
        }
        Ok(())
    }
}

/// Cart persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartSettings {
    /// Local storage key holding the cart.
    pub storage_key: String,

    /// Currency every cart line is priced in.
    pub currency: Currency,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            storage_key: CART_STORAGE_KEY.to_string(),
            currency: Currency::NGN,
        }
    }
}

/// One carousel configuration per call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Home page promotional banner.
    pub hero: CarouselConfig,

    /// Home page category rail.
    pub categories: CarouselConfig,

    /// Featured and similar product rails.
    pub products: CarouselConfig,

    /// Product detail image gallery.
    pub gallery: CarouselConfig,
}

impl CarouselSettings {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &CarouselConfig)> {
        [
            ("hero", &self.hero),
            ("categories", &self.categories),
            ("products", &self.products),
            ("gallery", &self.gallery),
        ]
        .into_iter()
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            hero: CarouselConfig::hero_banner(),
            categories: CarouselConfig::category_rail(),
            products: CarouselConfig::product_rail(),
            gallery: CarouselConfig::image_gallery(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmart_carousel::{CarouselError, SlidesPerView};
    use mmart_commerce::Money;

    #[test]
    fn test_bundled_matches_defaults() {
        let bundled = StorefrontConfig::bundled().unwrap();
        assert_eq!(bundled, StorefrontConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config.cart.storage_key, "mmartCart");
        assert_eq!(config.carousels.hero, CarouselConfig::hero_banner());
    }

    #[test]
    fn test_partial_override() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            [cart]
            storage_key = "testCart"

            [carousels.gallery]
            slides_per_view = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.cart.storage_key, "testCart");
        assert_eq!(config.cart.currency, Currency::NGN);
        assert_eq!(config.carousels.gallery.slides_per_view, SlidesPerView::Fixed(2));
        assert_eq!(config.carousels.products, CarouselConfig::product_rail());
    }

    #[test]
    fn test_invalid_carousel_rejected() {
        let err = StorefrontConfig::from_toml_str(
            r#"
            [carousels.products]
            slides_per_view = 0
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Carousel {
                name: "products",
                source: CarouselError::ZeroSlidesPerView,
            }
        ));
    }

    #[test]
    fn test_blank_storage_key_rejected() {
        let err = StorefrontConfig::from_toml_str("[cart]\nstorage_key = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyStorageKey));
    }

    #[test]
    fn test_summary_currency_must_match_cart() {
        let mut config = StorefrontConfig::default();
        config.summary.home_delivery_fee = Money::from_major(5, Currency::USD);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CurrencyMismatch(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = StorefrontConfig::from_toml_str("[cart\nstorage_key = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
