//! MMart storefront UI
//!
//! Leptos components over the cart and carousel cores:
//! - A page-wide reactive cart persisted to `localStorage`
//! - Cart badge, cart page and delivery summary
//! - One touch carousel component for banners, rails and galleries
//! - Storefront settings loaded from TOML

mod app;
mod cart;
pub mod components;
mod config;
mod error;
mod storage;

pub use app::{App, Banner};
pub use cart::{provide_cart_context, use_cart, CartContext};
pub use config::{CarouselSettings, CartSettings, StorefrontConfig};
pub use error::ConfigError;
pub use storage::CartBackend;

/// Mount the storefront into `<body>` with the bundled settings.
#[cfg(feature = "csr")]
pub fn mount(catalog: mmart_commerce::catalog::Catalog, banners: Vec<Banner>) {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let config = StorefrontConfig::bundled().unwrap_or_else(|e| {
        tracing::error!(error = %e, "bundled storefront config is invalid, using defaults");
        StorefrontConfig::default()
    });
    leptos::mount::mount_to_body(move || {
        view! { <App config=config catalog=catalog banners=banners/> }
    });
}
