// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod ports;
pub mod util;

use anyhow::Result;
use tracing::{debug, info};

use crate::application::Session;
use crate::cli::args::Args;
use crate::cli::shell::Shell;
use crate::ports::TextPresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting pinnote with arguments");

    // Initialize application state
    let session = match args.query {
        Some(query) => {
            debug!(?query, "Applying initial search query");
            Session::new().with_query(query)
        }
        None => Session::new(),
    };

    // Initialize presentation
    let presenter = TextPresenter::with_color(!args.no_color);
    let mut shell = Shell::new(session, presenter);

    info!("Entering interactive session");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(&mut stdin.lock(), &mut stdout.lock())?;
    info!("Session ended");

    Ok(())
}
