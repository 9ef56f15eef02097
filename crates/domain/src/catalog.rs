//! Catalog items as supplied by the catalog provider.

use common::TeaId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::Money;

/// Errors that can occur when building catalog values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Category label is not one the catalog knows.
    #[error("Unknown tea category: {label:?}")]
    UnknownCategory { label: String },

    /// Unit price is below zero.
    #[error("Invalid price: {price} (must not be negative)")]
    NegativePrice { price: Money },
}

/// Tea category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Black,
    Green,
    White,
    Oolong,
    Herbal,
    Flavored,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Black,
        Category::Green,
        Category::White,
        Category::Oolong,
        Category::Herbal,
        Category::Flavored,
    ];

    /// Parses a category label, ignoring case.
    pub fn parse(label: &str) -> Result<Self, CatalogError> {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogError::UnknownCategory {
                label: label.to_string(),
            })
    }

    /// Returns the category label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Black => "Black",
            Category::Green => "Green",
            Category::White => "White",
            Category::Oolong => "Oolong",
            Category::Herbal => "Herbal",
            Category::Flavored => "Flavored",
        }
    }

    /// Returns the long display name, e.g. "Black Tea".
    pub fn display_name(&self) -> String {
        format!("{} Tea", self.as_str())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A sellable tea.
///
/// The cart copies the item when it is added, so later catalog price changes
/// do not affect a line already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Catalog identifier.
    pub id: TeaId,

    /// Human-readable tea name.
    pub name: String,

    /// Category label.
    pub category: Category,

    /// Price per unit.
    pub unit_price: Money,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CatalogItem {
    /// Creates a catalog item, rejecting negative prices.
    pub fn new(
        id: impl Into<TeaId>,
        name: impl Into<String>,
        category: Category,
        unit_price: Money,
    ) -> Result<Self, CatalogError> {
        if unit_price.is_negative() {
            return Err(CatalogError::NegativePrice { price: unit_price });
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            category,
            unit_price,
            description: None,
        })
    }

    /// Attaches a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_ignores_case() {
        assert_eq!(Category::parse("black").unwrap(), Category::Black);
        assert_eq!(Category::parse("OOLONG").unwrap(), Category::Oolong);
        assert_eq!(" Herbal ".parse::<Category>().unwrap(), Category::Herbal);
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        let err = Category::parse("Matcha").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownCategory {
                label: "Matcha".to_string()
            }
        );
    }

    #[test]
    fn test_category_display_name() {
        assert_eq!(Category::Green.display_name(), "Green Tea");
        assert_eq!(Category::Flavored.to_string(), "Flavored");
    }

    #[test]
    fn test_catalog_item_rejects_negative_price() {
        let result = CatalogItem::new("t-1", "Dimbula", Category::Black, Money::from_cents(-1));
        assert!(matches!(result, Err(CatalogError::NegativePrice { .. })));
    }

    #[test]
    fn test_catalog_item_allows_free_items() {
        let item = CatalogItem::new("t-0", "Sample", Category::White, Money::zero()).unwrap();
        assert!(item.unit_price.is_zero());
    }

    #[test]
    fn test_catalog_item_serialization_skips_missing_description() {
        let item =
            CatalogItem::new("t-1", "Dimbula", Category::Black, Money::from_cents(25000)).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("description").is_none());

        let described = item.with_description("High grown");
        let json = serde_json::to_string(&described).unwrap();
        let back: CatalogItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.description.as_deref(), Some("High grown"));
    }
}
