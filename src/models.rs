//! Plain data records shared by the catalog, the borrow ledger, and the CSV
//! store. These types carry no behavior beyond formatting so the components
//! that own them stay the only place where state changes.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single catalog entry. The book identifier is the key in the catalog and
/// is therefore not repeated here.
pub struct Book {
    /// Title shown in listings and matched by keyword search.
    pub title: String,
    /// Author name, display only.
    pub author: String,
    /// Units still on the shelf. Lent copies are not counted.
    pub copies: u64,
}

impl Book {
    /// Build a record from its three fields.
    pub fn new(title: impl Into<String>, author: impl Into<String>, copies: u64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            copies,
        }
    }
}

impl fmt::Display for Book {
    /// Render as `title by author (Copies: n)`, the format used by search
    /// results.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} (Copies: {})",
            self.title, self.author, self.copies
        )
    }
}
