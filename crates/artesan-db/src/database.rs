//! # Database Handle
//!
//! Connection configuration for the SQLite store.
//!
//! ## Connection Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One Connection Per Operation                       │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure file path and timeouts                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Build options + create table            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  Database { options }                   │  no open connection       │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  insert()    ──► open ──► INSERT ──► close                             │
//! │  list_all()  ──► open ──► SELECT ──► close                             │
//! │  delete()    ──► open ──► DELETE ──► close                             │
//! │                                                                         │
//! │  Connections never overlap: the app is single-threaded.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A connection that is dropped on an error path is closed by its `Drop`
//! impl, so every exit releases the file.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode, SqliteSynchronous};
use sqlx::{ConnectOptions, Connection};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use crate::schema;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("artesanapp.db")
///     .busy_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// How long SQLite waits on a locked file before failing.
    /// Default: 5 seconds
    pub busy_timeout: Duration,

    /// Create the file if it does not exist.
    /// Default: true
    pub create_if_missing: bool,

    /// Create the `productos` table on connect.
    /// Default: true
    pub init_schema: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Will be created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            busy_timeout: Duration::from_secs(5),
            create_if_missing: true,
            init_schema: true,
        }
    }

    /// Sets the busy timeout.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets whether a missing file is created.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Sets whether the table is created on connect.
    pub fn init_schema(mut self, init: bool) -> Self {
        self.init_schema = init;
        self
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig::new(crate::DEFAULT_DB_FILENAME)
    }
}

// =============================================================================
// Database
// =============================================================================

/// Handle to the store.
///
/// Holds connection options only. Cloning is cheap and every clone talks to
/// the same file.
#[derive(Debug, Clone)]
pub struct Database {
    options: SqliteConnectOptions,
    path: PathBuf,
}

impl Database {
    /// Opens the store.
    ///
    /// ## What This Does
    /// 1. Builds connection options for the file:
    ///    - WAL journal
    ///    - NORMAL synchronous (balance of safety/speed)
    ///    - busy timeout from the config
    /// 2. Creates the `productos` table (if enabled)
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use handle
    /// * `Err(DbError)` - File can't be opened or the table can't be created.
    ///   Callers treat this as fatal.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database"
        );

        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(config.create_if_missing)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(config.busy_timeout);

        debug!("Connection options configured");

        let db = Database {
            options,
            path: config.database_path,
        };

        if config.init_schema {
            db.init_schema().await?;
        }

        Ok(db)
    }

    /// Creates the `productos` table if it is absent.
    ///
    /// Idempotent: safe to call on every startup.
    pub async fn init_schema(&self) -> DbResult<()> {
        let mut conn = self.connect().await?;
        let existed = schema::table_exists(&mut conn).await?;
        schema::init_schema(&mut conn).await?;
        release(conn).await;
        info!(created = !existed, "Schema ready");
        Ok(())
    }

    /// Path of the database file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = db.products().list_all().await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Checks if the database is healthy (can execute queries).
    ///
    /// ## Returns
    /// * `true` - Database is responsive
    /// * `false` - Database is unavailable
    pub async fn health_check(&self) -> bool {
        let Ok(mut conn) = self.connect().await else {
            return false;
        };
        let ok = sqlx::query("SELECT 1").execute(&mut conn).await.is_ok();
        release(conn).await;
        ok
    }

    /// Opens a fresh connection for a single operation.
    pub(crate) async fn connect(&self) -> DbResult<SqliteConnection> {
        self.options
            .connect()
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))
    }
}

/// Closes a connection after its operation finished.
///
/// The operation's outcome is already decided at this point, so a failed
/// close is logged and not reported.
pub(crate) async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close database connection");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
