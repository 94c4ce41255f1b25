//! # Configuration
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ARTESAN_DB_PATH`, `RUST_LOG`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use artesan_db::{DbConfig, DEFAULT_DB_FILENAME};

/// Development override for the database file.
pub const DB_PATH_ENV: &str = "ARTESAN_DB_PATH";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,artesan=debug,sqlx=warn";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// SQLite file, relative to the working directory unless absolute.
    /// Default: "artesanapp.db"
    pub database_path: PathBuf,

    /// Fallback `EnvFilter` directives.
    pub log_filter: String,

    /// How long a statement waits on a locked file.
    pub busy_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: PathBuf::from(DEFAULT_DB_FILENAME),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            busy_timeout_ms: 5_000,
        }
    }
}

impl AppConfig {
    /// Creates an AppConfig from environment variables and defaults.
    pub fn from_env() -> Self {
        AppConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(path) = lookup(DB_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        config
    }

    /// Store configuration for this app.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .busy_timeout(Duration::from_millis(self.busy_timeout_ms))
    }
}
