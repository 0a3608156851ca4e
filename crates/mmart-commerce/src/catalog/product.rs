//! Product types.

use crate::cart::CartLine;
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category the product is listed under.
    pub category_id: CategoryId,
    /// Price of one unit.
    pub unit_price: Money,
    /// Primary image URL.
    pub image_ref: String,
    /// Units on hand.
    pub stock: u32,
    /// Product description.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Create a product with an empty description.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category_id: impl Into<CategoryId>,
        unit_price: Money,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: category_id.into(),
            unit_price,
            image_ref: String::new(),
            stock,
            description: String::new(),
        }
    }

    /// Check if there are units left.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Build the cart line for `quantity` units of this product.
    pub fn to_cart_line(&self, quantity: i64) -> Result<CartLine, CommerceError> {
        if !self.in_stock() {
            return Err(CommerceError::OutOfStock(self.id.get()));
        }
        Ok(CartLine::new(
            self.id,
            self.name.clone(),
            self.unit_price,
            self.image_ref.clone(),
            quantity,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_to_cart_line() {
        let mut product = Product::new(
            1,
            "Fresh Whole Milk",
            11,
            Money::from_major(1200, Currency::NGN),
            24,
        );
        product.image_ref = "/milk.png".to_string();

        let line = product.to_cart_line(2).unwrap();
        assert_eq!(line.product_id, product.id);
        assert_eq!(line.image_ref, "/milk.png");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_out_of_stock() {
        let product = Product::new(3, "Honey", 11, Money::from_major(4500, Currency::NGN), 0);
        assert!(!product.in_stock());
        assert!(matches!(product.to_cart_line(1), Err(CommerceError::OutOfStock(3))));
    }
}
