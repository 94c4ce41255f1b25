//! # Domain Types
//!
//! Core domain types used throughout ArtesanApp.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   submit    ┌─────────────────┐   insert          │
//! │  │  ProductForm    │ ──────────► │  ProductInput   │ ─────────► store  │
//! │  │  ─────────────  │  validate + │  ─────────────  │                   │
//! │  │  raw strings    │  convert    │  typed, no id   │                   │
//! │  └─────────────────┘             └─────────────────┘                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │  ShippingType   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (store)     │   │  Decoración     │   │  Local          │       │
//! │  │  name, price    │   │  Joyería        │   │  Nacional       │       │
//! │  │  stock, ...     │   │  Textil, ...    │   │  Internacional  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Category and shipping values are stored with their Spanish labels, which
//! are also what the form offers and what the listing shows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Product Id
// =============================================================================

/// Store-assigned product identifier.
///
/// Never chosen by the caller: the database hands it out on insert.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(i64);

impl ProductId {
    /// Wraps a raw row id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        ProductId(id)
    }

    /// Returns the raw row id.
    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category. The set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    #[serde(rename = "Decoración")]
    Decoration,
    #[serde(rename = "Joyería")]
    Jewelry,
    #[serde(rename = "Textil")]
    Textile,
    #[serde(rename = "Papelería")]
    Stationery,
    #[serde(rename = "Otros")]
    Other,
}

impl Category {
    /// Every category, in the order the form lists them.
    pub const ALL: [Category; 5] = [
        Category::Decoration,
        Category::Jewelry,
        Category::Textile,
        Category::Stationery,
        Category::Other,
    ];

    /// Label stored in `productos.categoria` and shown to the user.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Decoration => "Decoración",
            Category::Jewelry => "Joyería",
            Category::Textile => "Textil",
            Category::Stationery => "Papelería",
            Category::Other => "Otros",
        }
    }

    fn allowed() -> Vec<String> {
        Self::ALL.iter().map(|c| c.as_str().to_string()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Self::allowed(),
            })
    }
}

// =============================================================================
// Shipping Type
// =============================================================================

/// How a product ships. New products default to `Local`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ShippingType {
    #[default]
    #[serde(rename = "Local")]
    Local,
    #[serde(rename = "Nacional")]
    National,
    #[serde(rename = "Internacional")]
    International,
}

impl ShippingType {
    /// Every shipping type, in the order the form lists them.
    pub const ALL: [ShippingType; 3] = [
        ShippingType::Local,
        ShippingType::National,
        ShippingType::International,
    ];

    /// Label stored in `productos.tipo_envio` and shown to the user.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ShippingType::Local => "Local",
            ShippingType::National => "Nacional",
            ShippingType::International => "Internacional",
        }
    }
}

impl fmt::Display for ShippingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "shipping type".to_string(),
                allowed: Self::ALL.iter().map(|t| t.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// One row of the `productos` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,

    /// Display name, never empty.
    pub name: String,

    pub category: Category,

    /// Unit price in pesos.
    pub price: f64,

    /// Units on hand.
    pub stock: i64,

    /// Whether the product is offered for sale.
    pub available: bool,

    /// Supplier name. May be empty, or NULL for rows written by other tools.
    pub supplier: Option<String>,

    /// NULL only for rows written by other tools.
    pub shipping_type: Option<ShippingType>,
}

// =============================================================================
// Product Input
// =============================================================================

/// A validated, converted product ready to be inserted.
///
/// Built once per submit from a [`ProductForm`]; it has no id because the
/// store assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub stock: i64,
    pub available: bool,
    pub supplier: String,
    pub shipping_type: ShippingType,
}

// =============================================================================
// Product Form
// =============================================================================

/// Raw form state exactly as a view collects it.
///
/// `ProductForm::default()` is the cleared form shown after a save or when
/// the user hits "clear".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub available: bool,
    pub supplier: String,
    pub shipping_type: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        ProductForm {
            name: String::new(),
            category: String::new(),
            price: String::new(),
            stock: String::new(),
            available: true,
            supplier: String::new(),
            shipping_type: ShippingType::default().as_str().to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_label() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!(" Textil ".parse::<Category>(), Ok(Category::Textile));
    }

    #[test]
    fn test_unknown_category_lists_allowed_values() {
        let err = "Cerámica".parse::<Category>().unwrap_err();
        match err {
            ValidationError::NotAllowed { field, allowed } => {
                assert_eq!(field, "category");
                assert_eq!(allowed.len(), 5);
                assert_eq!(allowed[1], "Joyería");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_shipping_type_default_is_local() {
        assert_eq!(ShippingType::default(), ShippingType::Local);
        assert_eq!(
            "Internacional".parse::<ShippingType>(),
            Ok(ShippingType::International)
        );
        assert!("Express".parse::<ShippingType>().is_err());
    }

    #[test]
    fn test_cleared_form_defaults() {
        let form = ProductForm::default();
        assert!(form.name.is_empty());
        assert!(form.category.is_empty());
        assert!(form.available);
        assert_eq!(form.shipping_type, "Local");
    }

    #[test]
    fn test_product_id_parse_and_display() {
        let id: ProductId = " 42 ".parse().unwrap();
        assert_eq!(id, ProductId::new(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_serde_uses_stored_labels() {
        let json = serde_json::to_string(&Category::Stationery).unwrap();
        assert_eq!(json, "\"Papelería\"");

        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
