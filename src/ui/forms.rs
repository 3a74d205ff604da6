use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use thiserror::Error;

/// Raised when standard input reaches end-of-file in the middle of a prompt.
/// The shell treats it like choosing exit.
#[derive(Debug, Error)]
#[error("input closed")]
pub(crate) struct InputClosed;

/// Line-oriented input and output shared by every menu action.
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one line back, minus its line
    /// terminator. Bytes that are not valid UTF-8 become U+FFFD.
    pub(crate) fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("failed to read input")?;
        if read == 0 {
            return Err(InputClosed.into());
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompt and strip surrounding whitespace.
    pub(crate) fn prompt_trimmed(&mut self, label: &str) -> Result<String> {
        Ok(self.prompt(label)?.trim().to_string())
    }

    pub(crate) fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref()).context("failed to write output")
    }

    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

/// Fields collected by the add / update action. `copies` stays raw so the
/// catalog decides what counts as valid.
pub(crate) struct BookForm {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) copies: String,
}

impl BookForm {
    pub(crate) fn read<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Self> {
        let id = console.prompt_trimmed("Enter Book ID: ")?;
        let title = console.prompt_trimmed("Enter Book Title: ")?;
        let author = console.prompt_trimmed("Enter Author Name: ")?;
        let copies = console.prompt("Enter number of copies: ")?;
        Ok(Self {
            id,
            title,
            author,
            copies,
        })
    }
}

/// Student and book pair used by the borrow action.
pub(crate) struct LoanForm {
    pub(crate) student: String,
    pub(crate) book_id: String,
}

impl LoanForm {
    pub(crate) fn read<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Self> {
        let student = console.prompt_trimmed("Enter Student Name: ")?;
        let book_id = console.prompt_trimmed("Enter Book ID: ")?;
        Ok(Self { student, book_id })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn prompt_strips_line_endings_only() {
        let mut console = Console::new(Cursor::new("  B1 \r\nnext\n"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap(), "  B1 ");
        assert_eq!(console.prompt_trimmed("> ").unwrap(), "next");
        assert_eq!(String::from_utf8(console.output().clone()).unwrap(), "> > ");
    }

    #[test]
    fn end_of_input_is_input_closed() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        let err = console.prompt("> ").unwrap_err();
        assert!(err.downcast_ref::<InputClosed>().is_some());
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let mut console = Console::new(Cursor::new(b"\xffB1\nnext\n".to_vec()), Vec::new());
        assert_eq!(console.prompt("> ").unwrap(), "\u{FFFD}B1");
        assert_eq!(console.prompt("> ").unwrap(), "next");
    }

    #[test]
    fn book_form_reads_four_fields() {
        let input = "B1\n Go \nA\n3\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let form = BookForm::read(&mut console).unwrap();
        assert_eq!(form.id, "B1");
        assert_eq!(form.title, "Go");
        assert_eq!(form.author, "A");
        assert_eq!(form.copies, "3");
    }
}
