//! # Repository Module
//!
//! Database repository implementations for ArtesanApp.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  InventorySync                                                         │
//! │       │                                                                 │
//! │       │  db.products().list_all()                                      │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── insert(&self, input)      → ProductId                             │
//! │  ├── list_all(&self)           → Vec<Product> (storage order)          │
//! │  ├── delete_by_id(&self, id)   → () or NotFound                        │
//! │  └── count(&self)              → i64                                   │
//! │       │                                                                 │
//! │       │  SQL Query on a fresh connection                               │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product persistence

pub mod product;
