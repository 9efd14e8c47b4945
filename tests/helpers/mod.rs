use anyhow::Result;
use std::io::Cursor;

use pinnote::application::Session;
use pinnote::cli::Shell;
use pinnote::ports::TextPresenter;

/// Run a scripted shell session (one command per line, colors off) and
/// return the shell for state assertions plus everything it printed.
#[allow(dead_code)]
pub fn run_script(script: &str) -> Result<(Shell, String)> {
    let mut shell = Shell::new(Session::new(), TextPresenter::with_color(false));
    let mut input = Cursor::new(script.to_string());
    let mut output: Vec<u8> = Vec::new();

    shell.run(&mut input, &mut output)?;

    Ok((shell, String::from_utf8(output)?))
}
