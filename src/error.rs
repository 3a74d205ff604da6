//! Error kinds surfaced by the catalog, the borrow ledger, and the CSV store.
//! The shell turns every variant into a one-line message and goes back to the
//! menu, so the `Display` text doubles as the user-facing wording.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Invalid number of copies.")]
    InvalidInput,

    #[error("Book ID not found.")]
    NotFound,

    #[error("Book does not exist.")]
    BookNotFound,

    #[error("No copies available.")]
    NoCopiesAvailable,

    #[error("No borrowing record found.")]
    NoRecord,

    #[error("Invalid return.")]
    InvalidReturn,

    #[error("{} not found.", .0.display())]
    SourceNotFound(PathBuf),

    /// `line` is the 1-based line in the source file, header included.
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type LibraryResult<T> = Result<T, LibraryError>;
