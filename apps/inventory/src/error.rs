//! # Sync Error Type
//!
//! Unified error type for the presentation sync layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in ArtesanApp                             │
//! │                                                                         │
//! │  View                        InventorySync                              │
//! │  ────                        ─────────────                              │
//! │                                                                         │
//! │  Save button                                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  submit(form) -> Result<ProductId, SyncError>                    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Missing field? ──── ValidationError ──────────┐                 │  │
//! │  │         │                                      │                 │  │
//! │  │         ▼                                      ▼                 │  │
//! │  │  Bad number? ─────── ConversionError ───── SyncError ──► notify  │  │
//! │  │         │                                      ▲                 │  │
//! │  │         ▼                                      │                 │  │
//! │  │  Store fault? ────── DbError (logged) ─────────┘                 │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────► notify  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sync layer reports every failure to the view itself and also returns
//! it, so callers without a view (tests, scripts) still see the outcome.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use artesan_core::CoreError;
use artesan_db::DbError;

use crate::view::Severity;

/// Error surfaced by an inventory operation.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 7"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for sync operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required form field is empty, or a value is outside its fixed set
    ValidationError,

    /// Price or stock text did not convert
    ConversionError,

    /// Delete was requested with no row selected
    NothingSelected,

    /// The selected row no longer exists in the store
    NotFound,

    /// Store operation failed; details are in the log
    DatabaseError,
}

impl ErrorCode {
    /// How loudly the view should present this code.
    pub fn severity(self) -> Severity {
        match self {
            ErrorCode::ValidationError | ErrorCode::NothingSelected | ErrorCode::NotFound => {
                Severity::Warning
            }
            ErrorCode::ConversionError | ErrorCode::DatabaseError => Severity::Error,
        }
    }

    /// Dialog title for this code.
    pub fn title(self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Validation",
            ErrorCode::NothingSelected | ErrorCode::NotFound => "Attention",
            ErrorCode::ConversionError | ErrorCode::DatabaseError => "Error",
        }
    }
}

impl SyncError {
    /// Creates a new sync error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        SyncError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        SyncError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        SyncError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Delete was pressed without a selection.
    pub fn nothing_selected() -> Self {
        SyncError::new(ErrorCode::NothingSelected, "Select a product to delete.")
    }

    /// Converts a store error, logging the detail and keeping `message` as
    /// the only thing the user sees.
    ///
    /// `NotFound` keeps its own message since it names the missing row.
    pub fn storage(err: DbError, message: &str) -> Self {
        match err {
            DbError::NotFound { entity, id } => SyncError::not_found(&entity, &id),
            other => {
                tracing::error!(error = %other, "{}", message);
                SyncError::new(ErrorCode::DatabaseError, message)
            }
        }
    }

    /// See [`ErrorCode::severity`].
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for SyncError {}

/// Converts database errors to sync errors.
impl From<DbError> for SyncError {
    fn from(err: DbError) -> Self {
        SyncError::storage(err, "Database operation failed")
    }
}

/// Converts core errors to sync errors.
impl From<CoreError> for SyncError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => SyncError::validation(e.to_string()),
            CoreError::Conversion(e) => SyncError::new(ErrorCode::ConversionError, e.to_string()),
        }
    }
}

// =============================================================================
// Startup Error
// =============================================================================

/// Failures that stop the application before or while the shell runs.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The store could not be opened or its table created.
    #[error("could not open the inventory store: {0}")]
    Store(#[from] DbError),

    /// Reading commands or writing the listing failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use artesan_core::{ConversionError, ValidationError};

    #[test]
    fn test_serializes_code_and_message() {
        let err = SyncError::not_found("Product", "7");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "NOT_FOUND", "message": "Product not found: 7" })
        );

        let json = serde_json::to_value(SyncError::nothing_selected()).unwrap();
        assert_eq!(json["code"], "NOTHING_SELECTED");
    }

    #[test]
    fn test_core_errors_keep_their_kind() {
        let err: SyncError = CoreError::from(ValidationError::required("name")).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
        assert_eq!(err.severity(), Severity::Warning);

        let err: SyncError = CoreError::from(ConversionError::NotANumber {
            field: "price".to_string(),
            value: "abc".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ConversionError);
        assert_eq!(err.severity(), Severity::Error);
    }

    #[test]
    fn test_db_fault_message_is_generic() {
        let err: SyncError = DbError::QueryFailed("disk I/O error".to_string()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
        assert!(!err.message.contains("disk"));

        let err = SyncError::storage(
            DbError::ConnectionFailed("locked".to_string()),
            "Could not save the product.",
        );
        assert_eq!(err.message, "Could not save the product.");
    }

    #[test]
    fn test_db_not_found_maps_to_not_found() {
        let err: SyncError = DbError::not_found("Product", 3).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 3");
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn test_titles() {
        assert_eq!(ErrorCode::ValidationError.title(), "Validation");
        assert_eq!(ErrorCode::NothingSelected.title(), "Attention");
        assert_eq!(ErrorCode::DatabaseError.title(), "Error");
    }
}
