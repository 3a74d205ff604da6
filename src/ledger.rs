//! Per-student record of books currently on loan. Each entry in a student's
//! sequence is one borrow instance, matched by exactly one copy taken out of
//! the catalog. Returned instances are dropped, not kept as history.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{info, warn};

use crate::catalog::Catalog;
use crate::error::{LibraryError, LibraryResult};

#[derive(Debug, Default, Clone)]
pub struct BorrowLedger {
    /// Students keep the position of their first borrow even after every book
    /// has been returned.
    borrowed: IndexMap<String, Vec<String>>,
    students: HashSet<String>,
}

impl BorrowLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lend one copy of `book_id` to `student`. The same student may hold
    /// several copies of one book as long as the catalog has them.
    pub fn borrow(
        &mut self,
        catalog: &mut Catalog,
        student: &str,
        book_id: &str,
    ) -> LibraryResult<()> {
        let book = catalog
            .get_mut(book_id)
            .ok_or(LibraryError::BookNotFound)?;
        if book.copies == 0 {
            warn!("{student} asked for {book_id} but no copies are left");
            return Err(LibraryError::NoCopiesAvailable);
        }

        book.copies -= 1;
        self.borrowed
            .entry(student.to_string())
            .or_default()
            .push(book_id.to_string());
        self.students.insert(student.to_string());
        info!("{student} borrowed {book_id}");
        Ok(())
    }

    /// Take back one copy of `book_id` from `student`. When the student holds
    /// duplicates the earliest borrow is the one removed.
    pub fn return_book(
        &mut self,
        catalog: &mut Catalog,
        student: &str,
        book_id: &str,
    ) -> LibraryResult<()> {
        let held = self
            .borrowed
            .get_mut(student)
            .filter(|held| !held.is_empty())
            .ok_or(LibraryError::NoRecord)?;
        let position = held
            .iter()
            .position(|id| id == book_id)
            .ok_or(LibraryError::InvalidReturn)?;

        held.remove(position);
        match catalog.get_mut(book_id) {
            Some(book) => book.copies = book.copies.saturating_add(1),
            None => warn!("{book_id} returned by {student} is no longer in the catalog"),
        }
        info!("{student} returned {book_id}");
        Ok(())
    }

    /// Books currently held by `student`, in borrow order.
    pub fn borrowed_by(&self, student: &str) -> LibraryResult<&[String]> {
        self.borrowed
            .get(student)
            .map(Vec::as_slice)
            .filter(|held| !held.is_empty())
            .ok_or(LibraryError::NoRecord)
    }

    /// Students with at least one outstanding borrow, in order of their first
    /// borrow.
    pub fn list_active(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.borrowed
            .iter()
            .filter(|(_, held)| !held.is_empty())
            .map(|(student, held)| (student.as_str(), held.as_slice()))
    }

    /// `student -> id, id` lines for every active student.
    pub fn summary_lines(&self) -> Vec<String> {
        self.list_active()
            .map(|(student, held)| format!("{student} -> {}", held.join(", ")))
            .collect()
    }

    /// Every student that has ever borrowed, whether or not they still hold
    /// anything.
    pub fn known_students(&self) -> &HashSet<String> {
        &self.students
    }
}
