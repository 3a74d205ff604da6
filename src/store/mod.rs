//! Flat-file persistence for the catalog.

mod csv_file;

pub use csv_file::{load, read_catalog, save, write_catalog, HEADER};
