use std::io::Write;

use anyhow::{Context, Error, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::catalog::Catalog;
use crate::error::LibraryError;

/// Width of the rule drawn around the book table.
const TABLE_RULE_WIDTH: usize = 65;
/// Width of the rule framing the menu title.
const MENU_RULE_WIDTH: usize = 55;

/// Fixed-width table of every book, or `None` when the catalog is empty.
pub(crate) fn book_table_lines(catalog: &Catalog) -> Option<Vec<String>> {
    if catalog.is_empty() {
        return None;
    }

    let rule = "-".repeat(TABLE_RULE_WIDTH);
    let mut lines = Vec::with_capacity(catalog.len() + 3);
    lines.push(format!(
        "{:<8} {:<25} {:<20} {:<6}",
        "Book ID", "Title", "Author", "Copies"
    ));
    lines.push(rule.clone());
    for (id, book) in catalog.list() {
        lines.push(format!(
            "{:<8} {:<25} {:<20} {:<6}",
            id, book.title, book.author, book.copies
        ));
    }
    lines.push(rule);
    Some(lines)
}

pub(crate) fn menu_lines() -> Vec<String> {
    let rule = "=".repeat(MENU_RULE_WIDTH);
    vec![
        format!("\n{rule}"),
        "          Library Book Manager CLI".to_string(),
        rule,
        "1. Add / Update Book".to_string(),
        "2. View Books".to_string(),
        "3. Search Book".to_string(),
        "4. Borrow Book".to_string(),
        "5. Return Book".to_string(),
        "6. View Borrowed Records".to_string(),
        "7. Save to CSV".to_string(),
        "8. Load from CSV".to_string(),
        "0. Exit".to_string(),
    ]
}

/// Wipe the terminal and park the cursor in the top-left corner.
pub(crate) fn clear_screen<W: Write>(out: &mut W) -> Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0)).context("failed to clear screen")
}

/// Extract the most relevant error message from a chained error. Library
/// errors already carry their own user-facing wording, path included.
pub(crate) fn surface_error(err: &Error) -> String {
    if let Some(library_err) = err.downcast_ref::<LibraryError>() {
        return library_err.to_string();
    }
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
