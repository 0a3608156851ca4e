//! Cart page totals: subtotal, delivery and grand total.

use crate::cart::CartLine;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// How the order reaches the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOption {
    /// Delivered to the shopper's address.
    #[default]
    HomeDelivery,
    /// Collected from the store. Always free.
    Pickup,
}

/// Delivery pricing rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Flat fee for home delivery.
    pub home_delivery_fee: Money,
    /// Subtotal at which home delivery becomes free.
    pub free_shipping_threshold: Option<Money>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            home_delivery_fee: Money::from_major(1_000, Currency::NGN),
            free_shipping_threshold: Some(Money::from_major(50_000, Currency::NGN)),
        }
    }
}

/// Complete pricing breakdown for the cart page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Delivery charge.
    pub shipping: Money,
    /// `subtotal + shipping`.
    pub total: Money,
    /// Units in the cart.
    pub item_count: i64,
    /// Distinct lines in the cart.
    pub line_count: usize,
    /// How much more to spend before home delivery is free.
    pub free_shipping_remaining: Option<Money>,
}

impl CartSummary {
    /// Price `lines` for the given delivery option.
    ///
    /// An empty cart never pays for delivery.
    pub fn compute(
        lines: &[CartLine],
        currency: Currency,
        delivery: DeliveryOption,
        config: &SummaryConfig,
    ) -> Result<Self, CommerceError> {
        let subtotal = lines.iter().try_fold(Money::zero(currency), |acc, line| {
            acc.checked_add(&line.line_total()?)
        })?;

        let threshold = config
            .free_shipping_threshold
            .filter(|_| delivery == DeliveryOption::HomeDelivery);
        let free_shipping_remaining = match threshold {
            Some(threshold) => {
                let remaining = threshold.checked_sub(&subtotal)?;
                remaining.is_positive().then_some(remaining)
            }
            None => None,
        };

        let shipping = match delivery {
            DeliveryOption::Pickup => Money::zero(currency),
            DeliveryOption::HomeDelivery if lines.is_empty() => Money::zero(currency),
            DeliveryOption::HomeDelivery
                if threshold.is_some() && free_shipping_remaining.is_none() =>
            {
                Money::zero(currency)
            }
            DeliveryOption::HomeDelivery => config.home_delivery_fee,
        };

        Ok(Self {
            subtotal,
            shipping,
            total: subtotal.checked_add(&shipping)?,
            item_count: lines.iter().map(|l| l.quantity).sum(),
            line_count: lines.len(),
            free_shipping_remaining,
        })
    }

    /// Whether the delivery fee was waived by the free-shipping threshold.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero() && self.line_count > 0
    }
}
