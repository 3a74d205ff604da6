use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{LibraryError, LibraryResult};
use crate::models::Book;

/// Column names written as the first row, in order.
pub const HEADER: [&str; 4] = ["book_id", "title", "author", "copies"];

#[derive(Serialize)]
struct BookRow<'a> {
    book_id: &'a str,
    title: &'a str,
    author: &'a str,
    copies: u64,
}

/// Rows are matched to fields by header name. `copies` stays raw text so a
/// bad value can be reported with its line.
#[derive(Deserialize)]
struct RawBookRow {
    book_id: String,
    title: String,
    author: String,
    copies: String,
}

/// Write the header and one row per book, in catalog order.
pub fn write_catalog<W: Write>(catalog: &Catalog, sink: W) -> LibraryResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    writer.write_record(HEADER)?;
    for (book_id, book) in catalog.list() {
        writer.serialize(BookRow {
            book_id,
            title: &book.title,
            author: &book.author,
            copies: book.copies,
        })?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Parse every data row. The first bad row aborts the whole read.
pub fn read_catalog<R: Read>(source: R) -> LibraryResult<Vec<(String, Book)>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|err| {
            let line = err.position().map_or(0, csv::Position::line);
            LibraryError::MalformedRow {
                line,
                reason: err.to_string(),
            }
        })?;
        records.push(parse_row(&record, &headers)?);
    }

    debug!("parsed {} catalog rows", records.len());
    Ok(records)
}

fn parse_row(record: &StringRecord, headers: &StringRecord) -> LibraryResult<(String, Book)> {
    let line = record.position().map_or(0, csv::Position::line);
    let row: RawBookRow =
        record
            .deserialize(Some(headers))
            .map_err(|err| LibraryError::MalformedRow {
                line,
                reason: err.to_string(),
            })?;

    let copies = row
        .copies
        .trim()
        .parse::<u64>()
        .map_err(|_| LibraryError::MalformedRow {
            line,
            reason: format!("copies `{}` is not a non-negative integer", row.copies),
        })?;

    Ok((row.book_id, Book::new(row.title, row.author, copies)))
}

/// Overwrite `path` with the current catalog.
pub fn save(catalog: &Catalog, path: &Path) -> LibraryResult<()> {
    let file = File::create(path).map_err(|source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_catalog(catalog, file)?;
    info!("saved {} books to {}", catalog.len(), path.display());
    Ok(())
}

/// Read the records stored at `path`. A missing file is reported as
/// [`LibraryError::SourceNotFound`].
pub fn load(path: &Path) -> LibraryResult<Vec<(String, Book)>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LibraryError::SourceNotFound(path.to_path_buf()),
        _ => LibraryError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let records = read_catalog(file)?;
    info!("read {} books from {}", records.len(), path.display());
    Ok(records)
}
