//! The catalog owns every book record and its copy count. Records keep their
//! insertion order, which is also the order used by listings, search results,
//! and the CSV file.

use indexmap::IndexMap;
use log::{info, warn};

use crate::error::{LibraryError, LibraryResult};
use crate::models::Book;

/// Result of [`Catalog::add_or_update`], used by the shell to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Updated { total: u64 },
}

/// Book records keyed by identifier, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: IndexMap<String, Book>,
}

/// Parse a raw copy count as typed by the user. Surrounding whitespace is
/// ignored; negative or non-numeric input is rejected.
pub fn parse_copies(raw: &str) -> LibraryResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| LibraryError::InvalidInput)
}

impl Catalog {
    /// Start with no books.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new book, or add `copies` to an existing one. On update the
    /// stored title and author are kept and the supplied ones are ignored.
    pub fn add_or_update(
        &mut self,
        id: &str,
        title: &str,
        author: &str,
        copies: &str,
    ) -> LibraryResult<AddOutcome> {
        let copies = parse_copies(copies).inspect_err(|_| {
            warn!("rejected copy count for book {id}");
        })?;

        match self.books.get_mut(id) {
            Some(book) => {
                book.copies = book
                    .copies
                    .checked_add(copies)
                    .ok_or(LibraryError::InvalidInput)?;
                info!("book {id} now has {} copies", book.copies);
                Ok(AddOutcome::Updated { total: book.copies })
            }
            None => {
                self.books
                    .insert(id.to_string(), Book::new(title, author, copies));
                info!("added book {id} with {copies} copies");
                Ok(AddOutcome::Added)
            }
        }
    }

    /// Look up one book by identifier.
    pub fn get(&self, id: &str) -> LibraryResult<&Book> {
        self.books.get(id).ok_or(LibraryError::NotFound)
    }

    /// Mutable access for the ledger, which is the only other place copy
    /// counts change.
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Book> {
        self.books.get_mut(id)
    }

    /// Case-insensitive substring match on titles. An empty keyword matches
    /// every record.
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<(&str, &Book)> {
        let needle = keyword.to_lowercase();
        self.list()
            .filter(|(_, book)| book.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Every `(id, book)` pair in insertion order. Each call walks the current
    /// state again.
    pub fn list(&self) -> impl Iterator<Item = (&str, &Book)> + '_ {
        self.books.iter().map(|(id, book)| (id.as_str(), book))
    }

    /// Drop every record and repopulate from `records`, keeping their order.
    /// A repeated id in `records` overwrites the earlier entry in place.
    pub fn clear_and_replace<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = (String, Book)>,
    {
        self.books = records.into_iter().collect();
    }

    /// Number of distinct book identifiers.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_or_update("B1", "Go Programming", "A", "3").unwrap();
        catalog.add_or_update("B2", "Rust Basics", "B", "1").unwrap();
        catalog
    }

    #[test]
    fn repeat_add_sums_copies_and_keeps_first_title() {
        let mut catalog = Catalog::new();
        assert_eq!(
            catalog.add_or_update("B1", "Go", "A", "3").unwrap(),
            AddOutcome::Added
        );
        assert_eq!(
            catalog.add_or_update("B1", "Other", "Z", " 4 ").unwrap(),
            AddOutcome::Updated { total: 7 }
        );

        let book = catalog.get("B1").unwrap();
        assert_eq!(book, &Book::new("Go", "A", 7));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn invalid_copies_leave_state_unchanged() {
        let mut catalog = sample();
        for raw in ["-1", "abc", "", "2.5"] {
            assert!(matches!(
                catalog.add_or_update("B1", "Go", "A", raw),
                Err(LibraryError::InvalidInput)
            ));
            assert!(matches!(
                catalog.add_or_update("B9", "New", "N", raw),
                Err(LibraryError::InvalidInput)
            ));
        }
        assert_eq!(catalog.get("B1").unwrap().copies, 3);
        assert!(matches!(catalog.get("B9"), Err(LibraryError::NotFound)));
    }

    #[test]
    fn zero_copies_is_accepted() {
        let mut catalog = Catalog::new();
        catalog.add_or_update("B1", "Go", "A", "0").unwrap();
        assert_eq!(catalog.get("B1").unwrap().copies, 0);
    }

    #[test]
    fn overflowing_add_is_rejected() {
        let mut catalog = Catalog::new();
        catalog
            .add_or_update("B1", "Go", "A", &u64::MAX.to_string())
            .unwrap();
        assert!(matches!(
            catalog.add_or_update("B1", "Go", "A", "1"),
            Err(LibraryError::InvalidInput)
        ));
        assert_eq!(catalog.get("B1").unwrap().copies, u64::MAX);
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let catalog = sample();
        let hits: Vec<_> = catalog
            .search_by_keyword("go")
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(hits, vec!["B1"]);

        assert_eq!(catalog.search_by_keyword("BASICS").len(), 1);
        assert!(catalog.search_by_keyword("python").is_empty());
    }

    #[test]
    fn empty_keyword_matches_everything_in_order() {
        let catalog = sample();
        let ids: Vec<_> = catalog
            .search_by_keyword("")
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["B1", "B2"]);
    }

    #[test]
    fn list_follows_insertion_order_and_reflects_updates() {
        let mut catalog = sample();
        catalog.add_or_update("A0", "Algorithms", "C", "2").unwrap();
        let ids: Vec<_> = catalog.list().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["B1", "B2", "A0"]);

        catalog.add_or_update("B2", "ignored", "ignored", "5").unwrap();
        let copies: Vec<_> = catalog.list().map(|(_, book)| book.copies).collect();
        assert_eq!(copies, vec![3, 6, 2]);
    }

    #[test]
    fn clear_and_replace_discards_previous_records() {
        let mut catalog = sample();
        catalog.clear_and_replace(vec![("X1".to_string(), Book::new("New", "N", 9))]);

        assert_eq!(catalog.len(), 1);
        assert!(matches!(catalog.get("B1"), Err(LibraryError::NotFound)));
        assert_eq!(catalog.get("X1").unwrap().copies, 9);

        catalog.clear_and_replace(Vec::new());
        assert!(catalog.is_empty());
    }
}
