//! # ArtesanApp Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ArtesanApp Inventory                             │
//! │                                                                         │
//! │  main.rs ────► current-thread runtime, exit status                      │
//! │                                                                         │
//! │  lib.rs ─────► config, logging, store, shell                            │
//! │                                                                         │
//! │  terminal ───► list / search / add / delete / clear                     │
//! │                                                                         │
//! │                         │                                               │
//! │                         ▼                                               │
//! │  artesanapp.db (SQLite file in the working directory)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match artesan_inventory::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("artesan: {e}");
            ExitCode::FAILURE
        }
    }
}
