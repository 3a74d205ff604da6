use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, warn};

use crate::catalog::AddOutcome;
use crate::config::Config;
use crate::error::LibraryError;
use crate::library::Library;

use super::forms::{BookForm, Console, LoanForm};
use super::helpers::{book_table_lines, surface_error};

/// Entries of the main menu, keyed by the digit the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    ViewBooks,
    Search,
    Borrow,
    Return,
    ViewBorrowed,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    /// Map one line of menu input to a choice. Anything but a single known
    /// digit is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => Self::AddBook,
            "2" => Self::ViewBooks,
            "3" => Self::Search,
            "4" => Self::Borrow,
            "5" => Self::Return,
            "6" => Self::ViewBorrowed,
            "7" => Self::Save,
            "8" => Self::Load,
            "0" => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// What the shell loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Shell state: the library context plus the settings that shape I/O.
#[derive(Debug)]
pub struct App {
    library: Library,
    config: Config,
}

impl App {
    /// Wrap an existing library; the shell never creates its own.
    pub fn new(library: Library, config: Config) -> Self {
        Self { library, config }
    }

    /// State after the actions run so far.
    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one menu action. Domain failures are printed and swallowed; only
    /// terminal I/O problems come back as errors.
    pub(crate) fn dispatch<R: BufRead, W: Write>(
        &mut self,
        input: &str,
        console: &mut Console<R, W>,
    ) -> Result<Flow> {
        let Some(choice) = MenuChoice::parse(input) else {
            debug!("unrecognized menu input {input:?}");
            console.say("Invalid choice.")?;
            return Ok(Flow::Continue);
        };
        debug!("dispatching {choice:?}");

        let outcome = match choice {
            MenuChoice::AddBook => self.add_book(console),
            MenuChoice::ViewBooks => self.view_books(console),
            MenuChoice::Search => self.search_book(console),
            MenuChoice::Borrow => self.borrow_book(console),
            MenuChoice::Return => self.return_book(console),
            MenuChoice::ViewBorrowed => self.view_borrowed(console),
            MenuChoice::Save => self.save_books(console),
            MenuChoice::Load => self.load_books(console),
            MenuChoice::Exit => {
                console.say("Exiting...")?;
                return Ok(Flow::Exit);
            }
        };

        match outcome {
            Ok(()) => Ok(Flow::Continue),
            Err(err) if err.downcast_ref::<LibraryError>().is_some() => {
                warn!("{choice:?} failed: {err}");
                console.say(surface_error(&err))?;
                Ok(Flow::Continue)
            }
            Err(err) => Err(err),
        }
    }

    fn add_book<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        console.say("\n--- Add / Update Book ---")?;
        let form = BookForm::read(console)?;
        let outcome = self
            .library
            .add_book(&form.id, &form.title, &form.author, &form.copies)?;
        match outcome {
            AddOutcome::Added => console.say(format!("Book {} added successfully.", form.id)),
            AddOutcome::Updated { total } => {
                console.say(format!("Copies updated. Total: {total}"))
            }
        }
    }

    fn view_books<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        console.say("\n--- Library Books ---")?;
        match book_table_lines(self.library.catalog()) {
            Some(lines) => {
                for line in lines {
                    console.say(line)?;
                }
                Ok(())
            }
            None => console.say("No books available."),
        }
    }

    fn search_book<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        console.say("\n--- Search Book ---")?;
        console.say("1. Search by Book ID")?;
        console.say("2. Search by Title keyword")?;
        let choice = console.prompt("Enter choice: ")?;

        match choice.trim() {
            "1" => {
                let id = console.prompt_trimmed("Enter Book ID: ")?;
                let book = self.library.catalog().get(&id)?;
                console.say(format!(
                    "Found: {id} -> title: {}, author: {}, copies: {}",
                    book.title, book.author, book.copies
                ))
            }
            "2" => {
                let keyword = console.prompt("Enter keyword: ")?;
                let results = self.library.catalog().search_by_keyword(&keyword);
                if results.is_empty() {
                    return console.say("No matching titles found.");
                }
                console.say(format!("\nFound {} book(s):", results.len()))?;
                for (id, book) in results {
                    console.say(format!("{id}: {book}"))?;
                }
                Ok(())
            }
            _ => console.say("Invalid choice."),
        }
    }

    fn borrow_book<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        console.say("\n--- Borrow Book ---")?;
        let form = LoanForm::read(console)?;
        self.library.borrow(&form.student, &form.book_id)?;
        console.say(format!(
            "{} borrowed {} successfully.",
            form.student, form.book_id
        ))
    }

    fn return_book<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        console.say("\n--- Return Book ---")?;
        let student = console.prompt_trimmed("Enter Student Name: ")?;
        let held = self.library.ledger().borrowed_by(&student)?.join(", ");
        console.say(format!("Borrowed books: {held}"))?;

        let book_id = console.prompt_trimmed("Enter Book ID to return: ")?;
        self.library.return_book(&student, &book_id)?;
        console.say(format!("{student} returned {book_id} successfully."))?;

        console.say("\nUpdated Borrowed List:")?;
        for line in self.library.ledger().summary_lines() {
            console.say(line)?;
        }
        Ok(())
    }

    fn view_borrowed<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        console.say("\n--- Borrowed Records ---")?;
        let lines = self.library.ledger().summary_lines();
        if lines.is_empty() {
            return console.say("No borrowed books.");
        }
        for line in lines {
            console.say(line)?;
        }
        Ok(())
    }

    fn save_books<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let path = self.config.csv_path();
        self.library.save(path)?;
        console.say(format!("Books saved to {}", path.display()))
    }

    fn load_books<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let path = self.config.csv_path();
        self.library.load(path)?;
        console.say(format!("Books loaded from {}", path.display()))
    }
}
