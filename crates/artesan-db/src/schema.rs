//! # Schema
//!
//! The store has exactly one table and no migration mechanism.
//!
//! ## Table `productos`
//! ```text
//! ┌──────────────┬──────────────────────────────────────┐
//! │ column       │ definition                           │
//! ├──────────────┼──────────────────────────────────────┤
//! │ id           │ INTEGER PRIMARY KEY AUTOINCREMENT    │
//! │ nombre       │ TEXT NOT NULL                        │
//! │ categoria    │ TEXT NOT NULL                        │
//! │ precio       │ REAL NOT NULL                        │
//! │ stock        │ INTEGER NOT NULL                     │
//! │ disponible   │ INTEGER NOT NULL   (0 / 1)           │
//! │ proveedor    │ TEXT                                 │
//! │ tipo_envio   │ TEXT                                 │
//! └──────────────┴──────────────────────────────────────┘
//! ```
//!
//! Changing the table requires manual intervention on existing files:
//! `CREATE TABLE IF NOT EXISTS` leaves an older layout untouched.

use sqlx::sqlite::SqliteConnection;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Name of the product table.
pub const PRODUCTS_TABLE: &str = "productos";

/// DDL for the product table.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS productos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT NOT NULL,
    categoria TEXT NOT NULL,
    precio REAL NOT NULL,
    stock INTEGER NOT NULL,
    disponible INTEGER NOT NULL,
    proveedor TEXT,
    tipo_envio TEXT
)
"#;

/// Creates the product table on the given connection if it is absent.
pub async fn init_schema(conn: &mut SqliteConnection) -> DbResult<()> {
    debug!(table = PRODUCTS_TABLE, "Ensuring table exists");

    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(&mut *conn)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    Ok(())
}

/// Returns true if the product table exists.
pub async fn table_exists(conn: &mut SqliteConnection) -> DbResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(PRODUCTS_TABLE)
            .fetch_one(&mut *conn)
            .await?;

    Ok(count > 0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{Database, DbConfig};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_table_created_once() {
        let dir = tempdir().unwrap();
        let db = Database::new(DbConfig::new(dir.path().join("schema.db")).init_schema(false))
            .await
            .unwrap();

        let mut conn = db.connect().await.unwrap();
        assert!(!table_exists(&mut conn).await.unwrap());

        init_schema(&mut conn).await.unwrap();
        init_schema(&mut conn).await.unwrap();
        assert!(table_exists(&mut conn).await.unwrap());
    }

    #[tokio::test]
    async fn test_columns_match_layout() {
        let dir = tempdir().unwrap();
        let db = Database::new(DbConfig::new(dir.path().join("schema.db")))
            .await
            .unwrap();

        let mut conn = db.connect().await.unwrap();
        let columns: Vec<(String, i64)> =
            sqlx::query_as("SELECT name, \"notnull\" FROM pragma_table_info('productos')")
                .fetch_all(&mut conn)
                .await
                .unwrap();

        assert_eq!(
            columns,
            vec![
                ("id".to_string(), 0),
                ("nombre".to_string(), 1),
                ("categoria".to_string(), 1),
                ("precio".to_string(), 1),
                ("stock".to_string(), 1),
                ("disponible".to_string(), 1),
                ("proveedor".to_string(), 0),
                ("tipo_envio".to_string(), 0),
            ]
        );
    }
}
