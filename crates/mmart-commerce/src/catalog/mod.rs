//! Product catalog module.
//!
//! Contains products, categories, and the category page lookups over an
//! in-memory catalog.

mod category;
mod product;

pub use category::Category;
pub use product::Product;

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// An in-memory catalog of categories and products.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog. Product order is preserved in every listing.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Look up a category by slug.
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Look up a category by slug, failing if it doesn't exist.
    pub fn require_category(&self, slug: &str) -> Result<&Category, CommerceError> {
        self.category(slug)
            .ok_or_else(|| CommerceError::CategoryNotFound(slug.to_string()))
    }

    /// Root categories in catalog order.
    pub fn roots(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_root())
    }

    /// Direct children of `parent`.
    pub fn subcategories<'a>(
        &'a self,
        parent: &'a Category,
    ) -> impl Iterator<Item = &'a Category> {
        self.categories
            .iter()
            .filter(move |c| c.parent_id == Some(parent.id))
    }

    /// Parent of the category with `slug`, for breadcrumbs.
    pub fn parent_of(&self, slug: &str) -> Option<&Category> {
        let parent_id = self.category(slug)?.parent_id?;
        self.categories.iter().find(|c| c.id == parent_id)
    }

    /// Products listed on the page for `slug`.
    ///
    /// A root category also lists the products of its subcategories. An
    /// unknown slug lists nothing.
    pub fn products_in_category(&self, slug: &str) -> Vec<&Product> {
        let Some(category) = self.category(slug) else {
            return Vec::new();
        };

        let mut ids = vec![category.id];
        if category.is_root() {
            ids.extend(self.subcategories(category).map(|c| c.id));
        }

        self.products
            .iter()
            .filter(|p| ids.contains(&p.category_id))
            .collect()
    }

    /// Look up a product by ID.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
