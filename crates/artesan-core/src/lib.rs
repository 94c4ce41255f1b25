//! # artesan-core: Pure Domain Logic for ArtesanApp
//!
//! This crate holds the domain model of the handmade-goods inventory and the
//! rules that turn raw form input into a product that can be stored.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ArtesanApp Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 View (terminal, web view, ...)                  │   │
//! │  │        Form ──► Save      Search box      Delete selected       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ InventoryView trait                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 InventorySync (apps/inventory)                  │   │
//! │  │          submit, refresh, filter, delete                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ artesan-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌───────────┐               │   │
//! │  │   │   types   │  │  validation  │  │   error   │               │   │
//! │  │   │  Product  │  │  form → input│  │ Validation│               │   │
//! │  │   │  Category │  │  price/stock │  │ Conversion│               │   │
//! │  │   └───────────┘  └──────────────┘  └───────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 artesan-db (Database Layer)                     │   │
//! │  │              SQLite schema, product repository                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductInput, ProductForm, Category, ...)
//! - [`validation`] - Form validation and type conversion
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use artesan_core::{validation::validate_product_form, Category, ProductForm};
//!
//! let form = ProductForm {
//!     name: "  Collar artesanal ".to_string(),
//!     category: "Joyería".to_string(),
//!     price: "45000".to_string(),
//!     stock: "10".to_string(),
//!     ..ProductForm::default()
//! };
//!
//! let input = validate_product_form(&form).unwrap();
//! assert_eq!(input.name, "Collar artesanal");
//! assert_eq!(input.category, Category::Jewelry);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ConversionError, CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Token shown in listings for an available product.
pub const AVAILABLE_LABEL: &str = "Yes";

/// Token shown in listings for a product that is not for sale.
pub const UNAVAILABLE_LABEL: &str = "No";
