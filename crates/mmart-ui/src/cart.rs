//! Reactive cart shared by every component on the page.

use crate::{CartBackend, StorefrontConfig};
use leptos::prelude::*;
use mmart_commerce::prelude::*;
use tracing::warn;

type Store = CartStore<CartBackend>;

/// Handle to the page's cart.
///
/// Reads are reactive: a component that calls [`count`](Self::count) or
/// [`lines`](Self::lines) inside a closure re-renders after every
/// mutation. Copy it freely into event handlers.
#[derive(Clone, Copy)]
pub struct CartContext {
    store: RwSignal<Store, LocalStorage>,
    summary_config: StoredValue<SummaryConfig>,
}

impl CartContext {
    /// Load the cart from `backend` using the configured slot and currency.
    pub fn new(backend: CartBackend, config: &StorefrontConfig) -> Self {
        let store = CartStore::load_with(
            backend,
            config.cart.storage_key.clone(),
            config.cart.currency,
        );
        Self {
            store: RwSignal::new_local(store),
            summary_config: StoredValue::new(config.summary.clone()),
        }
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.store.with(|cart| cart.lines().to_vec())
    }

    pub fn count(&self) -> i64 {
        self.store.with(|cart| cart.cart_count())
    }

    pub fn total(&self) -> Money {
        self.store.with(|cart| cart.cart_total())
    }

    pub fn is_empty(&self) -> bool {
        self.store.with(|cart| cart.is_empty())
    }

    /// Whether the stored cart was unreadable and has been reset.
    pub fn recovered_from_corruption(&self) -> bool {
        self.store.with_untracked(|cart| cart.recovered_from_corruption())
    }

    /// Pricing breakdown for the cart page.
    pub fn summary(&self, delivery: DeliveryOption) -> Result<CartSummary, CommerceError> {
        let config = self.summary_config.get_value();
        self.store.with(|cart| cart.summary(delivery, &config))
    }

    pub fn add_to_cart(&self, line: CartLine) -> Result<(), CommerceError> {
        self.mutate(|cart| cart.add_to_cart(line))
    }

    pub fn add_product(&self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        self.mutate(|cart| cart.add_product(product, quantity))
    }

    /// Add the line and open the cart page.
    pub fn buy_now(
        &self,
        line: CartLine,
        navigator: &impl Navigator,
    ) -> Result<(), CommerceError> {
        self.mutate(|cart| cart.buy_now(line, navigator))
    }

    pub fn remove_from_cart(&self, product_id: ProductId) -> Result<bool, CommerceError> {
        self.mutate(|cart| cart.remove_from_cart(product_id))
    }

    pub fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        self.mutate(|cart| cart.update_quantity(product_id, quantity))
    }

    pub fn clear_cart(&self) -> Result<(), CommerceError> {
        self.mutate(|cart| cart.clear_cart())
    }

    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Store) -> Result<T, CommerceError>,
    ) -> Result<T, CommerceError> {
        let result = self
            .store
            .try_update(f)
            .unwrap_or_else(|| {
                Err(CommerceError::Storage("cart is no longer mounted".to_string()))
            });
        if let Err(e) = &result {
            warn!(error = %e, "cart change failed");
        }
        result
    }
}

/// Open the cart and make it available to descendants via [`use_cart`].
pub fn provide_cart_context(config: &StorefrontConfig) -> CartContext {
    let cart = CartContext::new(CartBackend::open(), config);
    provide_context(cart);
    cart
}

/// The cart provided by an ancestor.
///
/// Panics if no ancestor called [`provide_cart_context`].
pub fn use_cart() -> CartContext {
    expect_context::<CartContext>()
}
