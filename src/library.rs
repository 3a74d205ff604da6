//! The process-wide context: one catalog and the ledger that lends from it.
//! The shell owns a single `Library` and routes every menu action through it,
//! so copy counts are only ever changed in the places below.

use std::path::Path;

use crate::catalog::{AddOutcome, Catalog};
use crate::error::LibraryResult;
use crate::ledger::BorrowLedger;
use crate::store;

/// Catalog plus ledger, mutated only through the methods below.
#[derive(Debug, Default)]
pub struct Library {
    catalog: Catalog,
    ledger: BorrowLedger,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the catalog for listings and search.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only view of outstanding borrows.
    pub fn ledger(&self) -> &BorrowLedger {
        &self.ledger
    }

    /// Add a book or more copies of one; `copies` is the raw user input.
    pub fn add_book(
        &mut self,
        id: &str,
        title: &str,
        author: &str,
        copies: &str,
    ) -> LibraryResult<AddOutcome> {
        self.catalog.add_or_update(id, title, author, copies)
    }

    /// Lend one copy of `book_id` to `student`.
    pub fn borrow(&mut self, student: &str, book_id: &str) -> LibraryResult<()> {
        self.ledger.borrow(&mut self.catalog, student, book_id)
    }

    /// Take one copy of `book_id` back from `student`.
    pub fn return_book(&mut self, student: &str, book_id: &str) -> LibraryResult<()> {
        self.ledger.return_book(&mut self.catalog, student, book_id)
    }

    /// Write the catalog to `path`, replacing whatever was there.
    pub fn save(&self, path: &Path) -> LibraryResult<()> {
        store::save(&self.catalog, path)
    }

    /// Replace the catalog with the contents of `path`. Nothing changes unless
    /// the whole file parses. Outstanding borrows are kept as they are.
    ///
    /// Returns the number of books now in the catalog.
    pub fn load(&mut self, path: &Path) -> LibraryResult<usize> {
        let records = store::load(path)?;
        self.catalog.clear_and_replace(records);
        Ok(self.catalog.len())
    }
}
