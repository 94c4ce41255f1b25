//! # Error Types
//!
//! Domain-specific error types for artesan-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  artesan-core errors (this file)                                       │
//! │  ├── CoreError         - Wraps the two below                           │
//! │  ├── ValidationError   - Missing field / value outside a fixed set     │
//! │  └── ConversionError   - Price or stock text does not parse            │
//! │                                                                         │
//! │  artesan-db errors (separate crate)                                    │
//! │  └── DbError           - Database operation failures                   │
//! │                                                                         │
//! │  App errors (apps/inventory)                                           │
//! │  └── SyncError         - What the view sees (code + message)           │
//! │                                                                         │
//! │  Flow: Validation/Conversion → CoreError → SyncError → View            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation and conversion failures are kept apart because the view shows
//! them differently: a missing field is a warning, an unparseable number is
//! an error.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning form input into a storable product.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required field is missing or a value is outside its allowed set.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A numeric field could not be converted.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any type conversion is attempted.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Conversion Error
// =============================================================================

/// Type conversion errors for numeric form fields.
#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    /// Text is not a finite decimal number.
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: String, value: String },

    /// Text is not a whole number.
    #[error("{field} must be a whole number, got '{value}'")]
    NotAnInteger { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
