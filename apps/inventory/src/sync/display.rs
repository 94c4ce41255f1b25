//! # Display Rows
//!
//! What a listing shows for each product.
//!
//! ```text
//! Product { price: 45000.0, available: true, supplier: None, .. }
//!      │
//!      ▼
//! DisplayRow { price: "45000.00", available: "Yes", supplier: "", .. }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use artesan_core::{Product, ProductId, AVAILABLE_LABEL, UNAVAILABLE_LABEL};

/// One line of the visible listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DisplayRow {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Always two decimals.
    pub price: String,
    pub stock: i64,
    /// "Yes" or "No".
    pub available: String,
    pub supplier: String,
    pub shipping_type: String,
}

impl From<&Product> for DisplayRow {
    fn from(p: &Product) -> Self {
        DisplayRow {
            id: p.id,
            name: p.name.clone(),
            category: p.category.to_string(),
            price: format_price(p.price),
            stock: p.stock,
            available: availability_label(p.available).to_string(),
            supplier: p.supplier.clone().unwrap_or_default(),
            shipping_type: p
                .shipping_type
                .map(|t| t.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Formats a price with exactly two decimals, no grouping.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// Yes/no token for the availability flag.
pub fn availability_label(available: bool) -> &'static str {
    if available {
        AVAILABLE_LABEL
    } else {
        UNAVAILABLE_LABEL
    }
}

/// Case-insensitive substring match on a product name.
///
/// `needle` must already be normalized (trimmed, lower-cased); an empty
/// needle matches everything.
pub fn name_matches(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}
