//! Line-based interactive shell: a numbered menu read from standard input,
//! one action per choice, looping until exit.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::{App, Flow, MenuChoice};
pub use terminal::{run_app, run_shell};
