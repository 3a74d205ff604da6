//! Runtime settings for the shell. There is no config file or command line;
//! the defaults reproduce the fixed behavior and tests override them.

use std::path::{Path, PathBuf};

/// File name used for save and load, relative to the working directory.
pub const DEFAULT_CSV_PATH: &str = "books.csv";

/// Settings read by the shell.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target of both save and load.
    csv_path: PathBuf,
    /// Clear the terminal at start-up and after every action.
    clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            clear_screen: true,
        }
    }
}

impl Config {
    /// Save to and load from `path` instead of the default file.
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = path.into();
        self
    }

    /// Keep previous output on screen between actions.
    pub fn without_clear_screen(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    /// Path used by the save and load actions.
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Whether the shell clears the screen between actions.
    pub fn clear_screen(&self) -> bool {
        self.clear_screen
    }
}
