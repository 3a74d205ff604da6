//! End-to-end lending scenarios through the `Library` context.

use library_manager::{AddOutcome, Library, LibraryError};

fn library_with(id: &str, title: &str, copies: &str) -> Library {
    let mut library = Library::new();
    library.add_book(id, title, "A", copies).unwrap();
    library
}

#[test]
fn borrow_and_return_single_copy_round_trip() {
    let mut library = library_with("B1", "Go", "3");

    library.borrow("Alice", "B1").unwrap();
    assert_eq!(library.catalog().get("B1").unwrap().copies, 2);
    let active: Vec<_> = library
        .ledger()
        .list_active()
        .map(|(student, held)| (student.to_string(), held.to_vec()))
        .collect();
    assert_eq!(active, vec![("Alice".to_string(), vec!["B1".to_string()])]);

    library.return_book("Alice", "B1").unwrap();
    assert_eq!(library.catalog().get("B1").unwrap().copies, 3);
    assert_eq!(library.ledger().list_active().count(), 0);
    assert!(matches!(
        library.ledger().borrowed_by("Alice"),
        Err(LibraryError::NoRecord)
    ));
}

#[test]
fn repeated_add_sums_copies_and_keeps_first_details() {
    let mut library = library_with("B1", "Go", "3");
    let outcome = library.add_book("B1", "Go 2nd Edition", "Someone", "4").unwrap();

    assert_eq!(outcome, AddOutcome::Updated { total: 7 });
    let book = library.catalog().get("B1").unwrap();
    assert_eq!(book.title, "Go");
    assert_eq!(book.author, "A");
}

#[test]
fn exhausted_book_cannot_be_borrowed() {
    let mut library = library_with("B1", "Go", "1");
    library.borrow("Alice", "B1").unwrap();

    assert!(matches!(
        library.borrow("Bob", "B1"),
        Err(LibraryError::NoCopiesAvailable)
    ));
    assert_eq!(library.catalog().get("B1").unwrap().copies, 0);
    assert_eq!(library.ledger().summary_lines(), vec!["Alice -> B1".to_string()]);
    assert!(!library.ledger().known_students().contains("Bob"));
}

#[test]
fn unknown_book_cannot_be_borrowed() {
    let mut library = library_with("B1", "Go", "1");
    assert!(matches!(
        library.borrow("Alice", "NOPE"),
        Err(LibraryError::BookNotFound)
    ));
}

#[test]
fn returning_someone_elses_book_is_invalid() {
    let mut library = library_with("B1", "Go", "2");
    library.add_book("B2", "Rust Basics", "B", "2").unwrap();
    library.borrow("Alice", "B1").unwrap();
    library.borrow("Bob", "B2").unwrap();

    assert!(matches!(
        library.return_book("Alice", "B2"),
        Err(LibraryError::InvalidReturn)
    ));
    assert_eq!(library.catalog().get("B1").unwrap().copies, 1);
    assert_eq!(library.catalog().get("B2").unwrap().copies, 1);
    assert_eq!(
        library.ledger().summary_lines(),
        vec!["Alice -> B1".to_string(), "Bob -> B2".to_string()]
    );
}

#[test]
fn keyword_search_matches_title_case_insensitively() {
    let mut library = library_with("B1", "Go Programming", "1");
    library.add_book("B2", "Rust Basics", "B", "1").unwrap();

    let hits: Vec<_> = library
        .catalog()
        .search_by_keyword("go")
        .into_iter()
        .map(|(id, book)| (id, book.title.as_str()))
        .collect();
    assert_eq!(hits, vec![("B1", "Go Programming")]);
}
