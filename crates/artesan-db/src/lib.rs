//! # artesan-db: Database Layer for ArtesanApp
//!
//! This crate provides the persistent store of the inventory: a single
//! SQLite table, `productos`, accessed through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ArtesanApp Data Flow                             │
//! │                                                                         │
//! │  InventorySync (submit / refresh / filter / delete)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     artesan-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌─────────────┐   │   │
//! │  │   │   Database    │    │  Repositories  │    │   Schema    │   │   │
//! │  │   │ (database.rs) │    │  (product.rs)  │    │ (schema.rs) │   │   │
//! │  │   │               │    │                │    │             │   │   │
//! │  │   │ Connect opts  │◄───│ insert         │    │ productos   │   │   │
//! │  │   │ one conn per  │    │ list_all       │    │ IF NOT      │   │   │
//! │  │   │ operation     │    │ delete_by_id   │    │ EXISTS      │   │   │
//! │  │   └───────────────┘    └────────────────┘    └─────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                     ./artesanapp.db                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`database`] - Connection configuration and the `Database` handle
//! - [`schema`] - Table definition and idempotent initialization
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use artesan_db::{Database, DbConfig};
//!
//! // Opens the file and creates the table if needed
//! let db = Database::new(DbConfig::new("artesanapp.db")).await?;
//!
//! let id = db.products().insert(&input).await?;
//! let all = db.products().list_all().await?;
//! db.products().delete_by_id(id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod database;
pub mod error;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use database::{Database, DbConfig};
pub use error::{DbError, DbResult};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;

/// File name of the store, relative to the working directory.
pub const DEFAULT_DB_FILENAME: &str = "artesanapp.db";
