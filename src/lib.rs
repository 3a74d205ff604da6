//! Core library surface for the Library Manager CLI.
//!
//! The catalog and the borrow ledger hold all state in memory; the CSV store
//! snapshots the catalog to disk; the `ui` shell drives everything from a
//! numbered menu.
pub mod catalog;
pub mod config;
pub mod error;
pub mod ledger;
pub mod library;
pub mod models;
pub mod store;
pub mod ui;

pub use catalog::{AddOutcome, Catalog};
pub use config::Config;
pub use error::{LibraryError, LibraryResult};
pub use ledger::BorrowLedger;
pub use library::Library;
pub use models::Book;

/// The interactive entry point and its state container.
pub use ui::{run_app, run_shell, App};
