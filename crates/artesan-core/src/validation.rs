//! # Validation Module
//!
//! Turns raw form input into a [`ProductInput`].
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      submit(ProductForm)                                │
//! │                                                                         │
//! │  1. Trim every text field                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. Required: name, category, price, stock ──► ValidationError         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. Fixed sets: category, shipping type    ──► ValidationError         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  4. Convert: price → f64, stock → i64      ──► ConversionError         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ProductInput (immutable, ready for insert)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is partially converted: either every field is valid and a
//! `ProductInput` comes back, or the first failure is returned.
//!
//! ## Usage
//! ```rust
//! use artesan_core::validation::{parse_price, parse_stock};
//!
//! assert_eq!(parse_price("45000").unwrap(), 45000.0);
//! assert!(parse_stock("diez").is_err());
//! ```

use crate::error::{ConversionError, CoreResult, ValidationError};
use crate::types::{Category, ProductForm, ProductInput, ShippingType};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

// =============================================================================
// Form Validation
// =============================================================================

/// Validates and converts a submitted form.
///
/// ## Rules
/// - name, category, price and stock must be non-empty after trimming
/// - category must be one of the fixed categories
/// - shipping type must be one of the fixed types; blank means `Local`
/// - price must parse as a finite float (sign is not checked)
/// - stock must parse as an integer
/// - supplier is optional and stored trimmed, possibly empty
///
/// ## Example
/// ```rust
/// use artesan_core::validation::validate_product_form;
/// use artesan_core::{CoreError, ProductForm};
///
/// let form = ProductForm {
///     name: "Tapiz".to_string(),
///     category: "Textil".to_string(),
///     price: "abc".to_string(),
///     stock: "3".to_string(),
///     ..ProductForm::default()
/// };
/// assert!(matches!(validate_product_form(&form), Err(CoreError::Conversion(_))));
/// ```
pub fn validate_product_form(form: &ProductForm) -> CoreResult<ProductInput> {
    let name = form.name.trim();
    let category = form.category.trim();
    let price = form.price.trim();
    let stock = form.stock.trim();

    require("name", name)?;
    require("category", category)?;
    require("price", price)?;
    require("stock", stock)?;

    let category: Category = category.parse()?;
    let shipping_type = parse_shipping_type(&form.shipping_type)?;

    let price = parse_price(price)?;
    let stock = parse_stock(stock)?;

    Ok(ProductInput {
        name: name.to_string(),
        category,
        price,
        stock,
        available: form.available,
        supplier: form.supplier.trim().to_string(),
        shipping_type,
    })
}

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Parses a shipping type label. Blank input falls back to `Local`.
pub fn parse_shipping_type(text: &str) -> ValidationResult<ShippingType> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(ShippingType::default());
    }
    text.parse()
}

// =============================================================================
// Numeric Conversion
// =============================================================================

/// Parses price text as a float.
///
/// Negative prices are accepted. `NaN` and infinities are rejected because
/// they cannot be stored in a `NOT NULL REAL` column.
pub fn parse_price(text: &str) -> ConversionResult<f64> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(ConversionError::NotANumber {
            field: "price".to_string(),
            value: text.to_string(),
        }),
    }
}

/// Parses stock text as a whole number.
pub fn parse_stock(text: &str) -> ConversionResult<i64> {
    let text = text.trim();
    text.parse::<i64>()
        .map_err(|_| ConversionError::NotAnInteger {
            field: "stock".to_string(),
            value: text.to_string(),
        })
}

// =============================================================================
// Search
// =============================================================================

/// Normalizes a search query: trimmed and lower-cased.
///
/// An empty result matches every product.
pub fn normalize_search_query(query: &str) -> String {
    query.trim().to_lowercase()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn collar_form() -> ProductForm {
        ProductForm {
            name: "Collar artesanal".to_string(),
            category: "Joyería".to_string(),
            price: "45000.0".to_string(),
            stock: "10".to_string(),
            available: true,
            supplier: "Artesanos Unidos".to_string(),
            shipping_type: "Nacional".to_string(),
        }
    }

    #[test]
    fn test_valid_form_converts() {
        let input = validate_product_form(&collar_form()).unwrap();
        assert_eq!(
            input,
            ProductInput {
                name: "Collar artesanal".to_string(),
                category: Category::Jewelry,
                price: 45000.0,
                stock: 10,
                available: true,
                supplier: "Artesanos Unidos".to_string(),
                shipping_type: ShippingType::National,
            }
        );
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let form = ProductForm {
            name: "  Vela aromática  ".to_string(),
            category: " Decoración ".to_string(),
            price: " 12500 ".to_string(),
            stock: " 4 ".to_string(),
            supplier: "   ".to_string(),
            ..ProductForm::default()
        };
        let input = validate_product_form(&form).unwrap();
        assert_eq!(input.name, "Vela aromática");
        assert_eq!(input.category, Category::Decoration);
        assert_eq!(input.stock, 4);
        assert_eq!(input.supplier, "");
        assert_eq!(input.shipping_type, ShippingType::Local);
    }

    #[test]
    fn test_required_fields() {
        for field in ["name", "category", "price", "stock"] {
            let mut form = collar_form();
            match field {
                "name" => form.name = "   ".to_string(),
                "category" => form.category = String::new(),
                "price" => form.price = String::new(),
                _ => form.stock = " ".to_string(),
            }
            let err = validate_product_form(&form).unwrap_err();
            assert!(
                matches!(&err, CoreError::Validation(ValidationError::Required { field: f }) if f == field),
                "field {field}: {err:?}"
            );
        }
    }

    #[test]
    fn test_missing_field_reported_before_bad_number() {
        let form = ProductForm {
            name: String::new(),
            price: "abc".to_string(),
            ..collar_form()
        };
        assert!(matches!(
            validate_product_form(&form),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
    }

    #[test]
    fn test_unknown_category_is_validation_failure() {
        let form = ProductForm {
            category: "Cerámica".to_string(),
            ..collar_form()
        };
        assert!(matches!(
            validate_product_form(&form),
            Err(CoreError::Validation(ValidationError::NotAllowed { .. }))
        ));
    }

    #[test]
    fn test_bad_numbers_are_conversion_failures() {
        let form = ProductForm {
            price: "abc".to_string(),
            ..collar_form()
        };
        assert!(matches!(
            validate_product_form(&form),
            Err(CoreError::Conversion(ConversionError::NotANumber { .. }))
        ));

        let form = ProductForm {
            stock: "2.5".to_string(),
            ..collar_form()
        };
        assert!(matches!(
            validate_product_form(&form),
            Err(CoreError::Conversion(ConversionError::NotAnInteger { .. }))
        ));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("45000").unwrap(), 45000.0);
        assert_eq!(parse_price("1e3").unwrap(), 1000.0);
        assert_eq!(parse_price("-5.5").unwrap(), -5.5);
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
        assert!(parse_price("12,5").is_err());
    }

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock("10").unwrap(), 10);
        assert_eq!(parse_stock("-3").unwrap(), -3);
        assert!(parse_stock("ten").is_err());
    }

    #[test]
    fn test_parse_shipping_type_blank_is_local() {
        assert_eq!(parse_shipping_type("").unwrap(), ShippingType::Local);
        assert_eq!(
            parse_shipping_type("Nacional").unwrap(),
            ShippingType::National
        );
        assert!(parse_shipping_type("Aéreo").is_err());
    }

    #[test]
    fn test_normalize_search_query() {
        assert_eq!(normalize_search_query("  COLLAR "), "collar");
        assert_eq!(normalize_search_query("   "), "");
    }
}
