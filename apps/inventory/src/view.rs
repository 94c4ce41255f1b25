//! # View Handle
//!
//! The capabilities [`InventorySync`](crate::sync::InventorySync) needs from
//! whatever draws the inventory window.
//!
//! ```text
//! InventorySync ──render(rows)────────► table widget
//!               ──notify(notice)──────► message box
//!               ──confirm(prompt)─────► yes/no dialog ──► bool
//!               ──reset_form(defaults)► form fields
//! ```
//!
//! The sync layer owns the view and calls it synchronously on the UI thread.

use serde::Serialize;

use artesan_core::ProductForm;

use crate::error::SyncError;
use crate::sync::DisplayRow;

/// What a view must be able to do.
pub trait InventoryView {
    /// Replaces the visible listing with `rows`, in order.
    fn render(&mut self, rows: &[DisplayRow]);

    /// Shows an informational, warning or error message.
    fn notify(&mut self, notice: Notice);

    /// Asks a yes/no question; `true` means go ahead.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Puts every form field back to `defaults`.
    fn reset_form(&mut self, defaults: &ProductForm);
}

/// How a notice is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Info,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&SyncError> for Notice {
    fn from(err: &SyncError) -> Self {
        Notice {
            severity: err.severity(),
            title: err.code.title().to_string(),
            message: err.message.clone(),
        }
    }
}
