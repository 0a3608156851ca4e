//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category. The hierarchy is two levels deep: root categories
/// and their subcategories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Parent category ID (None for root categories).
    pub parent_id: Option<CategoryId>,
    /// Category name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Category description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category image URL.
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl Category {
    /// Create a new root category.
    pub fn new_root(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            name: name.into(),
            slug: slug.into(),
            description: None,
            image_ref: None,
        }
    }

    /// Create a new child category.
    pub fn new_child(
        id: impl Into<CategoryId>,
        parent: &Category,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            parent_id: Some(parent.id),
            ..Self::new_root(id, name, slug)
        }
    }

    /// Check if this is a root category.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_category() {
        let cat = Category::new_root(1, "Food & Groceries", "food-groceries");
        assert!(cat.is_root());
        assert_eq!(cat.slug, "food-groceries");
    }

    #[test]
    fn test_child_category() {
        let parent = Category::new_root(1, "Food & Groceries", "food-groceries");
        let child = Category::new_child(7, &parent, "Staples & Grains", "staples-grains");

        assert!(!child.is_root());
        assert_eq!(child.parent_id, Some(parent.id));
    }
}
