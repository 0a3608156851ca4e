//! Cart line types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One purchasable line in the cart.
///
/// Lines are keyed by `product_id` alone; `color` and `specifications`
/// are carried along for display but two variants of the same product
/// share one line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product being purchased; the cart's dedup key.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Price of a single unit.
    pub unit_price: Money,
    /// Image URL or asset path.
    pub image_ref: String,
    /// Quantity, at least 1 while the line exists.
    pub quantity: i64,
    /// Selected color, if the product has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Selected specification pairs (e.g., "Size": "5kg").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specifications: Vec<Specification>,
}

impl CartLine {
    /// Create a new line without variant attributes.
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Money,
        image_ref: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
            quantity,
            color: None,
            specifications: Vec::new(),
        }
    }

    /// Set the selected color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Add a specification pair.
    pub fn with_specification(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.push(Specification {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// `unit_price * quantity`.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price.checked_mul(self.quantity)
    }
}

/// A name/value specification on a line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specification {
    /// Specification name.
    pub name: String,
    /// Specification value.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = CartLine::new(1, "Fresh Whole Milk", Money::kobo(120_000), "/milk.png", 3);
        assert_eq!(line.line_total().unwrap(), Money::kobo(360_000));
    }

    #[test]
    fn test_line_total_overflow() {
        let line = CartLine::new(1, "Gold", Money::kobo(i64::MAX), "/gold.png", 2);
        assert!(matches!(line.line_total(), Err(CommerceError::Overflow)));
    }

    #[test]
    fn test_persisted_field_names() {
        let line = CartLine::new(7, "Rice", Money::kobo(750_000), "/rice.png", 1)
            .with_color("white")
            .with_specification("Weight", "5kg");
        let json = serde_json::to_value(&line).unwrap();

        assert_eq!(json["productId"], 7);
        assert_eq!(json["name"], "Rice");
        assert_eq!(json["unitPrice"]["amountMinor"], 750_000);
        assert_eq!(json["imageRef"], "/rice.png");
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["color"], "white");
        assert_eq!(json["specifications"][0]["name"], "Weight");
    }

    #[test]
    fn test_variant_fields_optional_on_read() {
        let json = concat!(
            r#"{"productId":2,"name":"Oil","#,
            r#""unitPrice":{"amountMinor":180000,"currency":"NGN"},"#,
            r#""imageRef":"","quantity":2}"#,
        );
        let line: CartLine = serde_json::from_str(json).unwrap();
        assert!(line.color.is_none());
        assert!(line.specifications.is_empty());
    }
}
