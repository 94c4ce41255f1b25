//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Append a product (the store assigns the id)
//! - List every product in storage order
//! - Delete by id
//!
//! There is no search here: filtering happens client-side on a full listing,
//! and there is no update because products are never edited in place.

use sqlx::FromRow;
use tracing::{debug, warn};

use crate::database::{release, Database};
use crate::error::{DbError, DbResult};
use artesan_core::{Category, Product, ProductId, ProductInput, ShippingType};

const SELECT_COLUMNS: &str =
    "SELECT id, nombre, categoria, precio, stock, disponible, proveedor, tipo_envio FROM productos";

/// A row as SQLite returns it, before label parsing.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: ProductId,
    nombre: String,
    categoria: String,
    precio: f64,
    stock: i64,
    disponible: bool,
    proveedor: Option<String>,
    tipo_envio: Option<String>,
}

impl ProductRow {
    fn into_domain(self) -> DbResult<Product> {
        let id = self.id;
        let invalid = |reason: String| DbError::InvalidRow {
            id: id.get(),
            reason,
        };

        let category = self
            .categoria
            .parse::<Category>()
            .map_err(|e| invalid(e.to_string()))?;

        let shipping_type = self
            .tipo_envio
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<ShippingType>)
            .transpose()
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Product {
            id,
            name: self.nombre,
            category,
            price: self.precio,
            stock: self.stock,
            available: self.disponible,
            supplier: self.proveedor,
            shipping_type,
        })
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let id = repo.insert(&input).await?;
/// let all = repo.list_all().await?;
/// repo.delete_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: Database,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(db: Database) -> Self {
        ProductRepository { db }
    }

    /// Appends a product and returns the id the store assigned.
    ///
    /// The input is trusted: name and category were validated by the caller.
    ///
    /// ## Returns
    /// * `Ok(ProductId)` - Row persisted
    /// * `Err(DbError)` - Nothing persisted (disk full, file locked, ...)
    pub async fn insert(&self, input: &ProductInput) -> DbResult<ProductId> {
        debug!(name = %input.name, category = %input.category, "Inserting product");

        let mut conn = self.db.connect().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO productos (
                nombre, categoria, precio, stock, disponible, proveedor, tipo_envio
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&input.name)
        .bind(input.category.as_str())
        .bind(input.price)
        .bind(input.stock)
        .bind(input.available)
        .bind(&input.supplier)
        .bind(input.shipping_type.as_str())
        .execute(&mut conn)
        .await?;

        release(conn).await;

        let id = ProductId::new(result.last_insert_rowid());
        debug!(%id, "Product inserted");
        Ok(id)
    }

    /// Lists every product in storage order.
    ///
    /// No `ORDER BY`: rows come back in insertion order.
    ///
    /// A row whose category or shipping label is unknown is skipped with a
    /// warning; the rest of the listing is still returned.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let mut conn = self.db.connect().await?;

        let rows = sqlx::query_as::<_, ProductRow>(SELECT_COLUMNS)
            .fetch_all(&mut conn)
            .await?;

        release(conn).await;

        let fetched = rows.len();
        let products: Vec<Product> = rows
            .into_iter()
            .filter_map(|row| match row.into_domain() {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable product row");
                    None
                }
            })
            .collect();

        debug!(count = products.len(), skipped = fetched - products.len(), "Listed products");
        Ok(products)
    }

    /// Deletes a product by id.
    ///
    /// ## Returns
    /// * `Ok(())` - The row was removed
    /// * `Err(DbError::NotFound)` - No row had that id
    /// * `Err(DbError)` - Storage fault, nothing removed
    pub async fn delete_by_id(&self, id: ProductId) -> DbResult<()> {
        debug!(%id, "Deleting product");

        let mut conn = self.db.connect().await?;

        let result = sqlx::query("DELETE FROM productos WHERE id = ?1")
            .bind(id)
            .execute(&mut conn)
            .await?;

        release(conn).await;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let mut conn = self.db.connect().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM productos")
            .fetch_one(&mut conn)
            .await?;

        release(conn).await;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
