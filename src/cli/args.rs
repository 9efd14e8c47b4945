// src/cli/args.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Initial search query applied to the list screen
    #[arg(short, long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Disable ANSI colors in the output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
