//! # Presentation Sync
//!
//! Connects the view to the store: validates form input, persists it, and
//! keeps the visible listing in step with the table.
//!
//! ## Listing State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            filter("col")                                                │
//! │   ┌──────┐ ─────────────────────────────► ┌──────────────────────┐     │
//! │   │ Full │                                 │ Filtered { "col" }   │     │
//! │   └──────┘ ◄───────────────────────────── └──────────────────────┘     │
//! │       ▲     refresh() / filter("")                   │                  │
//! │       │                                               │                  │
//! │       └──────── submit() / delete() succeed ──────────┘                  │
//! │                                                                         │
//! │  A successful mutation always ends in Full: an active filter is         │
//! │  dropped, not re-applied.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Flows
//! - Save: validate → convert → insert → notify → reset form → refresh
//! - Delete: selection → confirm → delete → notify → refresh
//!
//! Every failure is shown on the view and returned to the caller.

mod display;

pub use display::{availability_label, format_price, name_matches, DisplayRow};

use std::time::Instant;
use tracing::{debug, info, warn};

use artesan_core::validation::{normalize_search_query, validate_product_form};
use artesan_core::{ProductForm, ProductId};
use artesan_db::Database;

use crate::error::{ErrorCode, SyncError};
use crate::view::{InventoryView, Notice};

/// Which rows the listing currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListingState {
    /// Every stored product.
    #[default]
    Full,

    /// Only products whose name contains `query` (normalized).
    Filtered { query: String },
}

/// The row the user picked for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: ProductId,
    pub name: String,
}

impl From<&DisplayRow> for Selection {
    fn from(row: &DisplayRow) -> Self {
        Selection {
            id: row.id,
            name: row.name.clone(),
        }
    }
}

/// Result of a delete request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row is gone and the listing was refreshed.
    Deleted,

    /// The user declined the confirmation; nothing changed.
    Cancelled,
}

/// Drives one view against one store.
///
/// ## Usage
/// ```rust,ignore
/// let mut sync = InventorySync::new(db, view);
/// sync.refresh().await?;
/// let id = sync.submit(form).await?;
/// sync.delete(sync.selection_for(id)).await?;
/// ```
pub struct InventorySync<V> {
    db: Database,
    view: V,
    rows: Vec<DisplayRow>,
    listing: ListingState,
}

impl<V: InventoryView> InventorySync<V> {
    /// Creates the sync layer. Nothing is rendered until the first
    /// [`refresh`](Self::refresh).
    pub fn new(db: Database, view: V) -> Self {
        InventorySync {
            db,
            view,
            rows: Vec::new(),
            listing: ListingState::Full,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Rows as last rendered.
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Selects a visible row by id.
    ///
    /// Returns `None` when the id is not in the current listing, which
    /// [`delete`](Self::delete) reports as "nothing selected".
    pub fn selection_for(&self, id: ProductId) -> Option<Selection> {
        self.rows.iter().find(|r| r.id == id).map(Selection::from)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Saves the form as a new product.
    ///
    /// ## Returns
    /// * `Ok(ProductId)` - Stored; form reset and listing refreshed
    /// * `Err(ValidationError)` - Missing field or unknown label, store untouched
    /// * `Err(ConversionError)` - Price or stock unparseable, store untouched
    /// * `Err(DatabaseError)` - Insert failed
    ///
    /// A refresh failure after a successful insert is reported on the view
    /// but does not turn the save into an error.
    pub async fn submit(&mut self, form: ProductForm) -> Result<ProductId, SyncError> {
        let input = match validate_product_form(&form) {
            Ok(input) => input,
            Err(e) => {
                let err = SyncError::from(e);
                debug!(code = ?err.code, message = %err.message, "Form rejected");
                return Err(self.report(err));
            }
        };

        let id = match self.db.products().insert(&input).await {
            Ok(id) => id,
            Err(e) => return Err(self.report(SyncError::storage(e, "Could not save the product."))),
        };

        info!(%id, name = %input.name, category = %input.category, "Product saved");
        self.view.notify(Notice::info("Success", "Product saved."));
        self.clear_form();
        self.refresh_after_change(id, "save").await;

        Ok(id)
    }

    /// Reloads every product into the listing.
    pub async fn refresh(&mut self) -> Result<Vec<DisplayRow>, SyncError> {
        let start = Instant::now();
        let rows = self.load(|_| true).await?;

        debug!(count = rows.len(), elapsed = ?start.elapsed(), "Listing refreshed");
        self.show(rows.clone(), ListingState::Full);
        Ok(rows)
    }

    /// Shows only products whose name contains `query`, ignoring case.
    ///
    /// The query is trimmed; an empty query shows everything.
    pub async fn filter(&mut self, query: &str) -> Result<Vec<DisplayRow>, SyncError> {
        let needle = normalize_search_query(query);
        let rows = self.load(|name| name_matches(name, &needle)).await?;

        debug!(query = %needle, matches = rows.len(), "Listing filtered");
        let state = if needle.is_empty() {
            ListingState::Full
        } else {
            ListingState::Filtered { query: needle }
        };
        self.show(rows.clone(), state);
        Ok(rows)
    }

    /// Deletes the selected product after the user confirms.
    ///
    /// ## Returns
    /// * `Ok(Deleted)` - Row removed; listing refreshed
    /// * `Ok(Cancelled)` - User said no; store untouched
    /// * `Err(NothingSelected)` - No selection; nothing asked
    /// * `Err(NotFound)` - The row was already gone; listing refreshed
    /// * `Err(DatabaseError)` - Delete failed
    pub async fn delete(&mut self, selection: Option<Selection>) -> Result<DeleteOutcome, SyncError> {
        let Some(selection) = selection else {
            return Err(self.report(SyncError::nothing_selected()));
        };

        let prompt = format!("Delete product '{}'?", selection.name);
        if !self.view.confirm(&prompt) {
            debug!(id = %selection.id, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = self.db.products().delete_by_id(selection.id).await {
            let err = self.report(SyncError::storage(e, "Could not delete the product."));
            if err.code == ErrorCode::NotFound {
                // The listing still shows a row the store no longer has.
                self.refresh_after_change(selection.id, "missing row").await;
            }
            return Err(err);
        }

        info!(id = %selection.id, name = %selection.name, "Product deleted");
        self.view.notify(Notice::info("Deleted", "Product deleted."));
        self.refresh_after_change(selection.id, "delete").await;

        Ok(DeleteOutcome::Deleted)
    }

    /// Puts the view's form back to its defaults.
    pub fn clear_form(&mut self) {
        self.view.reset_form(&ProductForm::default());
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Reads the whole table and keeps products whose name passes `keep`.
    async fn load(&mut self, keep: impl Fn(&str) -> bool) -> Result<Vec<DisplayRow>, SyncError> {
        match self.db.products().list_all().await {
            Ok(products) => Ok(products
                .iter()
                .filter(|p| keep(&p.name))
                .map(DisplayRow::from)
                .collect()),
            Err(e) => Err(self.report(SyncError::storage(e, "Could not load the products."))),
        }
    }

    /// Full refresh after the store changed under the listing.
    ///
    /// A failed reload is already on the view; the listing is still marked
    /// Full so no filter outlives the change.
    async fn refresh_after_change(&mut self, id: ProductId, cause: &str) {
        if let Err(err) = self.refresh().await {
            warn!(%id, cause, error = %err, "Listing not refreshed");
            self.listing = ListingState::Full;
        }
    }

    fn show(&mut self, rows: Vec<DisplayRow>, listing: ListingState) {
        self.view.render(&rows);
        self.rows = rows;
        self.listing = listing;
    }

    fn report(&mut self, err: SyncError) -> SyncError {
        self.view.notify(Notice::from(&err));
        err
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::view::Severity;
    use artesan_db::DbConfig;
    use sqlx::sqlite::SqliteConnectOptions;
    use sqlx::{ConnectOptions, Connection};
    use tempfile::{tempdir, TempDir};

    /// Records everything the sync layer asks of the view.
    #[derive(Default)]
    struct RecordingView {
        renders: Vec<Vec<DisplayRow>>,
        notices: Vec<Notice>,
        prompts: Vec<String>,
        form_resets: usize,
        decline: bool,
    }

    impl InventoryView for RecordingView {
        fn render(&mut self, rows: &[DisplayRow]) {
            self.renders.push(rows.to_vec());
        }

        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }

        fn confirm(&mut self, prompt: &str) -> bool {
            self.prompts.push(prompt.to_string());
            !self.decline
        }

        fn reset_form(&mut self, defaults: &ProductForm) {
            assert_eq!(defaults, &ProductForm::default());
            self.form_resets += 1;
        }
    }

    async fn setup() -> (TempDir, InventorySync<RecordingView>) {
        let dir = tempdir().unwrap();
        let db = Database::new(DbConfig::new(dir.path().join("inventory.db")))
            .await
            .unwrap();
        (dir, InventorySync::new(db, RecordingView::default()))
    }

    fn collar_form() -> ProductForm {
        ProductForm {
            name: "  Collar artesanal ".to_string(),
            category: "Joyería".to_string(),
            price: "45000".to_string(),
            stock: "10".to_string(),
            available: true,
            supplier: "Artesanos Unidos".to_string(),
            shipping_type: "Nacional".to_string(),
        }
    }

    fn form(name: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            category: "Textil".to_string(),
            price: "1000".to_string(),
            stock: "1".to_string(),
            ..ProductForm::default()
        }
    }

    /// Runs one statement on the store file behind `db`.
    async fn run_sql(db: &Database, sql: &str) {
        let mut conn = SqliteConnectOptions::new()
            .filename(db.path())
            .connect()
            .await
            .unwrap();
        sqlx::query(sql).execute(&mut conn).await.unwrap();
        conn.close().await.unwrap();
    }

    /// After every `event` on the table, adds a row whose stock is text, which
    /// makes the next listing fail to decode.
    fn undecodable_row_trigger(event: &str) -> String {
        format!(
            "CREATE TRIGGER leave_bad_row AFTER {event} ON productos \
             WHEN (SELECT COUNT(*) FROM productos WHERE nombre = 'Roto') = 0 \
             BEGIN \
                 INSERT INTO productos (nombre, categoria, precio, stock, disponible) \
                 VALUES ('Roto', 'Otros', 1, 'muchos', 1); \
             END"
        )
    }

    fn last_notice(sync: &InventorySync<RecordingView>) -> &Notice {
        sync.view().notices.last().unwrap()
    }

    #[tokio::test]
    async fn test_submit_then_refresh_adds_one_converted_row() {
        let (_dir, mut sync) = setup().await;
        sync.submit(form("Tapiz")).await.unwrap();
        let before = sync.refresh().await.unwrap();

        let id = sync.submit(collar_form()).await.unwrap();
        let after = sync.refresh().await.unwrap();

        assert_eq!(after.len(), before.len() + 1);
        assert!(before.iter().all(|r| r.id != id));
        let row = after.iter().find(|r| r.id == id).unwrap();
        assert_eq!(row.name, "Collar artesanal");
        assert_eq!(row.category, "Joyería");
        assert_eq!(row.price, "45000.00");
        assert_eq!(row.stock, 10);
        assert_eq!(row.available, "Yes");
        assert_eq!(row.supplier, "Artesanos Unidos");
        assert_eq!(row.shipping_type, "Nacional");
    }

    #[tokio::test]
    async fn test_submit_notifies_resets_form_and_refreshes() {
        let (_dir, mut sync) = setup().await;

        sync.submit(collar_form()).await.unwrap();

        let view = sync.view();
        assert_eq!(view.form_resets, 1);
        assert_eq!(view.notices, vec![Notice::info("Success", "Product saved.")]);
        assert_eq!(view.renders.len(), 1);
        assert_eq!(view.renders[0].len(), 1);
        assert_eq!(sync.rows().len(), 1);
        assert_eq!(sync.listing(), &ListingState::Full);
    }

    #[tokio::test]
    async fn test_empty_required_field_leaves_store_untouched() {
        let (_dir, mut sync) = setup().await;

        for blank in ["name", "category", "price", "stock"] {
            let mut f = collar_form();
            match blank {
                "name" => f.name = "   ".to_string(),
                "category" => f.category = String::new(),
                "price" => f.price = " ".to_string(),
                _ => f.stock = String::new(),
            }

            let err = sync.submit(f).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "blank {blank}");
            assert_eq!(last_notice(&sync).severity, Severity::Warning);
        }

        assert_eq!(sync.database().products().count().await.unwrap(), 0);
        assert_eq!(sync.view().form_resets, 0);
        assert!(sync.view().renders.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_number_is_conversion_error() {
        let (_dir, mut sync) = setup().await;

        let err = sync
            .submit(ProductForm {
                price: "abc".to_string(),
                ..collar_form()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConversionError);
        assert_eq!(last_notice(&sync).severity, Severity::Error);
        assert_eq!(last_notice(&sync).title, "Error");

        let err = sync
            .submit(ProductForm {
                stock: "2.5".to_string(),
                ..collar_form()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConversionError);

        assert_eq!(sync.database().products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_category_is_rejected() {
        let (_dir, mut sync) = setup().await;

        let err = sync
            .submit(ProductForm {
                category: "Cerámica".to_string(),
                ..collar_form()
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(sync.database().products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_filter_empty_query_equals_refresh() {
        let (_dir, mut sync) = setup().await;
        for name in ["Collar artesanal", "Tapiz", "Agenda"] {
            sync.submit(form(name)).await.unwrap();
        }

        let all = sync.refresh().await.unwrap();
        assert_eq!(sync.filter("").await.unwrap(), all);
        assert_eq!(sync.filter("   ").await.unwrap(), all);
        assert_eq!(sync.listing(), &ListingState::Full);
    }

    #[tokio::test]
    async fn test_filter_is_case_insensitive_substring() {
        let (_dir, mut sync) = setup().await;
        sync.submit(form("Collar artesanal")).await.unwrap();
        sync.submit(form("Tapiz")).await.unwrap();

        for query in ["COLLAR", "art", " collar "] {
            let rows = sync.filter(query).await.unwrap();
            assert_eq!(rows.len(), 1, "query {query:?}");
            assert_eq!(rows[0].name, "Collar artesanal");
        }
        assert_eq!(
            sync.listing(),
            &ListingState::Filtered {
                query: "collar".to_string()
            }
        );

        assert!(sync.filter("xyz").await.unwrap().is_empty());
        assert_eq!(sync.view().renders.last().unwrap(), &Vec::new());
    }

    #[tokio::test]
    async fn test_collar_scenario() {
        let (_dir, mut sync) = setup().await;

        let id = sync.submit(collar_form()).await.unwrap();
        assert_eq!(id, ProductId::new(1));

        let rows = sync.refresh().await.unwrap();
        assert_eq!(
            rows,
            vec![DisplayRow {
                id: ProductId::new(1),
                name: "Collar artesanal".to_string(),
                category: "Joyería".to_string(),
                price: "45000.00".to_string(),
                stock: 10,
                available: "Yes".to_string(),
                supplier: "Artesanos Unidos".to_string(),
                shipping_type: "Nacional".to_string(),
            }]
        );

        let outcome = sync.delete(sync.selection_for(id)).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(
            sync.view().prompts,
            vec!["Delete product 'Collar artesanal'?".to_string()]
        );
        assert!(sync.refresh().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_without_selection_warns_and_asks_nothing() {
        let (_dir, mut sync) = setup().await;
        sync.submit(collar_form()).await.unwrap();

        let err = sync.delete(None).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NothingSelected);
        assert_eq!(last_notice(&sync).severity, Severity::Warning);
        assert!(sync.view().prompts.is_empty());
        assert_eq!(sync.database().products().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_declined_delete_changes_nothing() {
        let (_dir, mut sync) = setup().await;
        let id = sync.submit(collar_form()).await.unwrap();
        sync.view_mut().decline = true;
        let renders = sync.view().renders.len();

        let outcome = sync.delete(sync.selection_for(id)).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(sync.database().products().count().await.unwrap(), 1);
        assert_eq!(sync.view().renders.len(), renders);
    }

    #[tokio::test]
    async fn test_delete_of_vanished_row_is_not_found() {
        let (_dir, mut sync) = setup().await;
        let id = sync.submit(collar_form()).await.unwrap();
        let stale = sync.selection_for(id);

        sync.database().products().delete_by_id(id).await.unwrap();
        let err = sync.delete(stale).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(last_notice(&sync).severity, Severity::Warning);
    }

    #[tokio::test]
    async fn test_delete_of_vanished_row_drops_it_from_listing() {
        let (_dir, mut sync) = setup().await;
        sync.submit(form("Collar artesanal")).await.unwrap();
        let tapiz = sync.submit(form("Tapiz")).await.unwrap();
        sync.filter("tapiz").await.unwrap();
        let stale = sync.selection_for(tapiz);

        sync.database().products().delete_by_id(tapiz).await.unwrap();
        let err = sync.delete(stale).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(sync.selection_for(tapiz).is_none());
        let names: Vec<&str> = sync.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Collar artesanal"]);
        assert_eq!(sync.listing(), &ListingState::Full);
        assert_eq!(sync.view().renders.last().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mutations_reset_an_active_filter() {
        let (_dir, mut sync) = setup().await;
        sync.submit(form("Collar artesanal")).await.unwrap();
        sync.submit(form("Tapiz")).await.unwrap();

        sync.filter("collar").await.unwrap();
        assert_eq!(sync.rows().len(), 1);

        sync.submit(form("Agenda")).await.unwrap();
        assert_eq!(sync.listing(), &ListingState::Full);
        assert_eq!(sync.rows().len(), 3);

        sync.filter("tapiz").await.unwrap();
        let tapiz = sync.rows()[0].id;
        sync.delete(sync.selection_for(tapiz)).await.unwrap();
        assert_eq!(sync.listing(), &ListingState::Full);
        let names: Vec<&str> = sync.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Collar artesanal", "Agenda"]);
    }

    #[tokio::test]
    async fn test_selection_only_from_visible_rows() {
        let (_dir, mut sync) = setup().await;
        let collar = sync.submit(form("Collar artesanal")).await.unwrap();
        let tapiz = sync.submit(form("Tapiz")).await.unwrap();

        sync.filter("tapiz").await.unwrap();

        assert!(sync.selection_for(collar).is_none());
        assert_eq!(
            sync.selection_for(tapiz),
            Some(Selection {
                id: tapiz,
                name: "Tapiz".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_store_fault_is_generic_error() {
        let dir = tempdir().unwrap();
        let db = Database::new(
            DbConfig::new(dir.path().join("no-table.db")).init_schema(false),
        )
        .await
        .unwrap();
        let mut sync = InventorySync::new(db, RecordingView::default());

        let err = sync.submit(collar_form()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Could not save the product.");
        assert_eq!(last_notice(&sync).severity, Severity::Error);

        let err = sync.refresh().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("productos"));
    }

    #[tokio::test]
    async fn test_delete_store_fault_is_generic_error() {
        let dir = tempdir().unwrap();
        let db = Database::new(
            DbConfig::new(dir.path().join("no-table.db")).init_schema(false),
        )
        .await
        .unwrap();
        let mut sync = InventorySync::new(db, RecordingView::default());
        let selection = Selection {
            id: ProductId::new(1),
            name: "Collar artesanal".to_string(),
        };

        let err = sync.delete(Some(selection)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Could not delete the product.");
        assert_eq!(last_notice(&sync).severity, Severity::Error);
        assert_eq!(sync.view().notices.len(), 1);
        assert!(sync.view().renders.is_empty());
    }

    #[tokio::test]
    async fn test_failed_reload_after_save_still_drops_filter() {
        let (_dir, mut sync) = setup().await;
        sync.submit(form("Tapiz")).await.unwrap();
        sync.filter("tapiz").await.unwrap();
        run_sql(sync.database(), &undecodable_row_trigger("INSERT")).await;

        let result = sync.submit(form("Agenda")).await;

        assert!(result.is_ok());
        assert_eq!(sync.listing(), &ListingState::Full);
        assert_eq!(last_notice(&sync).severity, Severity::Error);
        assert_eq!(last_notice(&sync).message, "Could not load the products.");
    }

    #[tokio::test]
    async fn test_failed_reload_after_delete_still_drops_filter() {
        let (_dir, mut sync) = setup().await;
        sync.submit(form("Collar artesanal")).await.unwrap();
        let tapiz = sync.submit(form("Tapiz")).await.unwrap();
        sync.filter("tapiz").await.unwrap();
        run_sql(sync.database(), &undecodable_row_trigger("DELETE")).await;

        let outcome = sync.delete(sync.selection_for(tapiz)).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(sync.listing(), &ListingState::Full);
        assert_eq!(last_notice(&sync).severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_clear_form_resets_view() {
        let (_dir, mut sync) = setup().await;
        sync.clear_form();
        assert_eq!(sync.view().form_resets, 1);
    }
}
