//! The shopper's cart with write-through local persistence.

use crate::cart::{CartLine, CartSummary, DeliveryOption, SummaryConfig};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use mmart_cache::{Cache, KeyValueStore};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Storage slot holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "mmartCart";

/// Route the shopper lands on after "Buy now".
pub const CART_PATH: &str = "/cart";

/// Maximum quantity allowed per line.
pub const MAX_QUANTITY_PER_LINE: i64 = 9999;

/// Route changes requested by the cart. Implemented by the UI router.
pub trait Navigator {
    /// Navigate to `path`.
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Single source of truth for the shopper's selected items.
///
/// Lines keep insertion order. The store is rehydrated from its storage
/// slot once on construction and every successful mutation writes the
/// whole line list back. If that write fails the in-memory change still
/// stands and the error is returned.
#[derive(Debug)]
pub struct CartStore<S> {
    lines: Vec<CartLine>,
    cache: Cache<S>,
    key: String,
    currency: Currency,
    recovered: bool,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Load the cart from the default slot in naira.
    pub fn load(store: S) -> Self {
        Self::load_with(store, CART_STORAGE_KEY, Currency::NGN)
    }

    /// Load the cart from `key`, pricing in `currency`.
    ///
    /// A slot that can't be decoded, or that decodes into lines breaking
    /// the cart invariants, is deleted and the cart starts empty.
    pub fn load_with(store: S, key: impl Into<String>, currency: Currency) -> Self {
        let cache = Cache::new(store);
        let key = key.into();

        let (lines, recovered) = match read_lines(&cache, &key, currency) {
            Ok(lines) => (lines, false),
            Err(CommerceError::StorageDecode(reason)) => {
                warn!(key = %key, %reason, "discarding corrupt cart");
                if let Err(e) = cache.delete(&key) {
                    warn!(key = %key, error = %e, "failed to clear corrupt cart slot");
                }
                (Vec::new(), true)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "cart storage unreadable, starting empty");
                (Vec::new(), false)
            }
        };

        debug!(key = %key, lines = lines.len(), "cart loaded");
        Self {
            lines,
            cache,
            key,
            currency,
            recovered,
        }
    }

    /// Whether loading found corrupt data and started over.
    pub fn recovered_from_corruption(&self) -> bool {
        self.recovered
    }

    /// Add a line, or add to the quantity of the line with the same product.
    ///
    /// On an existing line the quantities are summed and the incoming
    /// name, price, image and variant attributes replace the old ones.
    pub fn add_to_cart(&mut self, line: CartLine) -> Result<(), CommerceError> {
        validate_quantity(line.quantity)?;
        validate_price(&line)?;
        self.ensure_currency(&line.unit_price)?;

        let mut next = self.lines.clone();
        let product_id = line.product_id;
        if let Some(existing) = next.iter_mut().find(|l| l.product_id == product_id) {
            let quantity = existing
                .quantity
                .checked_add(line.quantity)
                .ok_or(CommerceError::Overflow)?;
            validate_quantity(quantity)?;
            *existing = CartLine { quantity, ..line };
        } else {
            next.push(line);
        }

        total_of(&next, self.currency)?;
        self.lines = next;
        debug!(%product_id, count = self.cart_count(), "added to cart");
        self.persist()
    }

    /// Add one or more units of a catalog product.
    pub fn add_product(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        self.add_to_cart(product.to_cart_line(quantity)?)
    }

    /// Add the line, then send the shopper to the cart page.
    ///
    /// Navigation only happens when the line was accepted.
    pub fn buy_now(
        &mut self,
        line: CartLine,
        navigator: &impl Navigator,
    ) -> Result<(), CommerceError> {
        self.add_to_cart(line)?;
        navigator.navigate(CART_PATH);
        Ok(())
    }

    /// Remove the line for `product_id`.
    ///
    /// Returns `false` (and leaves storage untouched) if there was none.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Result<bool, CommerceError> {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() == len_before {
            return Ok(false);
        }
        debug!(%product_id, "removed from cart");
        self.persist()?;
        Ok(true)
    }

    /// Replace the quantity of a line.
    ///
    /// Quantities below 1 are rejected and the line is left as it was;
    /// use [`remove_from_cart`](Self::remove_from_cart) to drop a line.
    /// Returns `false` if no line matches.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        validate_quantity(quantity)?;

        let Some(position) = self.lines.iter().position(|l| l.product_id == product_id) else {
            return Ok(false);
        };

        let mut next = self.lines.clone();
        if let Some(line) = next.get_mut(position) {
            line.quantity = quantity;
        }
        total_of(&next, self.currency)?;
        self.lines = next;
        debug!(%product_id, quantity, "cart quantity updated");
        self.persist()?;
        Ok(true)
    }

    /// Empty the cart and delete its storage slot.
    pub fn clear_cart(&mut self) -> Result<(), CommerceError> {
        self.lines.clear();
        debug!("cart cleared");
        self.cache.delete(&self.key).map_err(|e| {
            warn!(key = %self.key, error = %e, "failed to delete cart slot");
            e.into()
        })
    }

    /// Sum of `unit_price * quantity` over all lines.
    ///
    /// Mutations reject any cart whose total would overflow, so this
    /// never fails on a cart built through this API.
    pub fn cart_total(&self) -> Money {
        let amount = self.lines.iter().fold(0_i64, |acc, l| {
            acc.saturating_add(l.unit_price.amount_minor.saturating_mul(l.quantity))
        });
        Money::new(amount, self.currency)
    }

    /// Checked sum of `unit_price * quantity` over all lines.
    pub fn try_cart_total(&self) -> Result<Money, CommerceError> {
        total_of(&self.lines, self.currency)
    }

    /// Total number of units (not lines) in the cart.
    pub fn cart_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Subtotal, delivery and grand total for the cart page.
    pub fn summary(
        &self,
        delivery: DeliveryOption,
        config: &SummaryConfig,
    ) -> Result<CartSummary, CommerceError> {
        CartSummary::compute(&self.lines, self.currency, delivery, config)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Currency all lines are priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Storage slot this cart is mirrored to.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    fn persist(&self) -> Result<(), CommerceError> {
        self.cache.set(&self.key, &self.lines).map_err(|e| {
            warn!(key = %self.key, error = %e, "failed to persist cart");
            e.into()
        })
    }

    fn ensure_currency(&self, price: &Money) -> Result<(), CommerceError> {
        if price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: price.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

fn validate_quantity(quantity: i64) -> Result<(), CommerceError> {
    if quantity < 1 {
        return Err(CommerceError::InvalidQuantity(quantity));
    }
    if quantity > MAX_QUANTITY_PER_LINE {
        return Err(CommerceError::QuantityExceedsLimit(
            quantity,
            MAX_QUANTITY_PER_LINE,
        ));
    }
    Ok(())
}

fn validate_price(line: &CartLine) -> Result<(), CommerceError> {
    if line.unit_price.is_negative() {
        return Err(CommerceError::InvalidPrice {
            product_id: line.product_id.get(),
            amount_minor: line.unit_price.amount_minor,
        });
    }
    Ok(())
}

fn total_of(lines: &[CartLine], currency: Currency) -> Result<Money, CommerceError> {
    lines.iter().try_fold(Money::zero(currency), |acc, line| {
        acc.checked_add(&line.line_total()?)
    })
}

/// Read and check persisted lines. Any broken invariant counts as corruption.
fn read_lines<S: KeyValueStore>(
    cache: &Cache<S>,
    key: &str,
    currency: Currency,
) -> Result<Vec<CartLine>, CommerceError> {
    let lines: Vec<CartLine> = cache.get(key)?.unwrap_or_default();

    let mut seen = HashSet::with_capacity(lines.len());
    for line in &lines {
        if !seen.insert(line.product_id) {
            return Err(CommerceError::StorageDecode(format!(
                "duplicate line for product {}",
                line.product_id
            )));
        }
        if validate_quantity(line.quantity).is_err() {
            return Err(CommerceError::StorageDecode(format!(
                "product {} has quantity {}",
                line.product_id, line.quantity
            )));
        }
        if validate_price(line).is_err() {
            return Err(CommerceError::StorageDecode(format!(
                "product {} has negative price {}",
                line.product_id, line.unit_price.amount_minor
            )));
        }
        if line.unit_price.currency != currency {
            return Err(CommerceError::StorageDecode(format!(
                "product {} priced in {}",
                line.product_id, line.unit_price.currency
            )));
        }
    }
    total_of(&lines, currency)
        .map_err(|e| CommerceError::StorageDecode(e.to_string()))?;
    Ok(lines)
}
