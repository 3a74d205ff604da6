use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::info;

use super::app::{App, Flow};
use super::forms::{Console, InputClosed};
use super::helpers::{clear_screen, menu_lines};

/// Drive the menu on the process's standard input and output until the user
/// exits or input ends.
pub fn run_app(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(app, stdin.lock(), stdout.lock())
}

/// The menu loop over arbitrary line-based I/O. End of input at any prompt
/// ends the session the same way as choosing exit.
pub fn run_shell<R: BufRead, W: Write>(app: &mut App, input: R, output: W) -> Result<()> {
    let mut console = Console::new(input, output);
    match shell_loop(app, &mut console) {
        Err(err) if err.downcast_ref::<InputClosed>().is_some() => {
            info!("input closed, leaving the shell");
            Ok(())
        }
        other => other,
    }
}

fn shell_loop<R: BufRead, W: Write>(app: &mut App, console: &mut Console<R, W>) -> Result<()> {
    let clear = app.config().clear_screen();
    if clear {
        clear_screen(console.output())?;
    }
    console.say("Welcome to Library Manager CLI\n")?;

    loop {
        for line in menu_lines() {
            console.say(line)?;
        }
        let choice = console.prompt("Enter choice: ")?;
        if app.dispatch(&choice, console)? == Flow::Exit {
            return Ok(());
        }

        console.prompt("\nPress Enter to continue...")?;
        if clear {
            clear_screen(console.output())?;
        }
    }
}
