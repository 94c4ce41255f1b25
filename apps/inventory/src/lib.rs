//! # ArtesanApp Inventory Library
//!
//! Presentation layer of the handmade-goods inventory.
//! This is the main entry point that configures and runs the app.
//!
//! ## Module Organization
//! ```text
//! artesan_inventory/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── AppConfig (database path, log filter)
//! ├── error.rs        ◄─── SyncError / StartupError
//! ├── view.rs         ◄─── InventoryView trait, Notice
//! ├── sync/
//! │   ├── mod.rs      ◄─── InventorySync: submit / refresh / filter / delete
//! │   └── display.rs  ◄─── DisplayRow formatting, name matching
//! └── terminal.rs     ◄─── TerminalView + Shell command loop
//! ```
//!
//! Any toolkit can drive [`InventorySync`] by implementing
//! [`InventoryView`]; the terminal is the one shipped here.

pub mod config;
pub mod error;
pub mod sync;
pub mod terminal;
pub mod view;

pub use config::AppConfig;
pub use error::{ErrorCode, StartupError, SyncError};
pub use sync::{DeleteOutcome, DisplayRow, InventorySync, ListingState, Selection};
pub use terminal::{Shell, TerminalView};
pub use view::{InventoryView, Notice, Severity};

use std::io;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use artesan_db::Database;

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • ARTESAN_DB_PATH overrides ./artesanapp.db                         │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber to stderr, RUST_LOG or the config default      │
/// │                                                                         │
/// │  3. Open Store ───────────────────────────────────────────────────────► │
/// │     • CREATE TABLE IF NOT EXISTS productos                              │
/// │     • Failure here is fatal                                             │
/// │                                                                         │
/// │  4. Run Shell ────────────────────────────────────────────────────────► │
/// │     • Full listing, then commands until quit / end of input             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env();
    init_tracing(&config.log_filter);

    info!("Starting ArtesanApp inventory");
    debug!(
        config = %serde_json::to_string(&config).unwrap_or_default(),
        "Configuration loaded"
    );

    let db = open_store(&config).await?;

    let view = TerminalView::new(io::stdin().lock(), io::stdout());
    let mut shell = Shell::new(InventorySync::new(db, view));
    shell.run().await?;

    info!("Shutting down");
    Ok(())
}

/// Opens the store, creating the table if needed, and logs its health and
/// size.
///
/// ## Returns
/// * `Ok(Database)` - Ready for the shell
/// * `Err(StartupError::Store)` - File or table unusable; the app stops
pub async fn open_store(config: &AppConfig) -> Result<Database, StartupError> {
    let db = Database::new(config.db_config()).await?;

    if !db.health_check().await {
        warn!(path = %db.path().display(), "Store did not answer a test query");
    }
    match db.products().count().await {
        Ok(products) => info!(path = %db.path().display(), products, "Store ready"),
        Err(e) => warn!(error = %e, "Could not count products"),
    }

    Ok(db)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the listing on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=artesan=trace` - Show trace for artesan crates only
/// - Default: `default_filter`
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be set (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
