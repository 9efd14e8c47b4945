// src/cli/mod.rs
pub mod args;
pub mod shell;

pub use args::Args;
pub use shell::Shell;
