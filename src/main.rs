//! Binary entry point: set up logging, build an empty library, and hand
//! control to the menu loop until the user exits.
use library_manager::{run_app, App, Config, Library};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut app = App::new(Library::new(), Config::default());
    run_app(&mut app)
}
