// src/cli/shell.rs
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::{Screen, Session};
use crate::domain::{DomainError, Label};
use crate::ports::TextPresenter;

const LIST_HELP: &str = "commands: add | edit <id> | delete <id> | pin <id> | \
                         search [text] | dump | goto <screen> [id] | help | quit";
const FORM_HELP: &str = "commands: title <text> | desc <text> | label <name> | \
                         save | cancel | help";

/// Line-oriented interactive front end.
///
/// Reads one command per line, applies it to the session, and re-renders the
/// active screen. Runs until `quit` or end of input; every command handler
/// completes before the next line is read, so the session needs no locking.
pub struct Shell {
    session: Session,
    presenter: TextPresenter,
}

impl Shell {
    pub fn new(session: Session, presenter: TextPresenter) -> Self {
        Self { session, presenter }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(output, "{}\n> ", self.presenter.render(&self.session))
                .context("Failed to write to output")?;
            output.flush().context("Failed to flush output")?;

            line.clear();
            let read = input.read_line(&mut line).context("Failed to read input")?;
            if read == 0 {
                debug!("end of input, leaving session");
                return Ok(());
            }

            if !self.dispatch(line.trim(), output)? {
                return Ok(());
            }
        }
    }

    /// Apply one command line. Returns false when the session should end.
    fn dispatch(&mut self, line: &str, output: &mut impl Write) -> Result<bool> {
        if line.is_empty() {
            return Ok(true);
        }

        // A pending delete confirmation swallows the next answer.
        if self.session.pending_delete().is_some() {
            match line {
                "y" | "yes" => self.session.confirm_delete(),
                "n" | "no" => self.session.cancel_delete(),
                _ => writeln!(output, "Please answer y or n.")?,
            }
            return Ok(true);
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "quit" | "exit" => return Ok(false),
            "help" => {
                let help = match self.session.screen() {
                    Screen::List => LIST_HELP,
                    _ => FORM_HELP,
                };
                writeln!(output, "{help}")?;
            }
            "dump" => {
                let json = self.presenter.render_json(&self.session.visible())?;
                writeln!(output, "{json}")?;
            }
            "goto" => {
                let (name, id) = match rest.split_once(char::is_whitespace) {
                    Some((name, id)) => (name, id.trim().parse::<u64>().ok()),
                    None => (rest, None),
                };
                self.session.go_to(name, id);
            }
            _ => match self.session.screen() {
                Screen::List => self.dispatch_list(cmd, rest, output)?,
                Screen::Create | Screen::Edit(_) => self.dispatch_form(cmd, rest, output)?,
            },
        }

        Ok(true)
    }

    fn dispatch_list(&mut self, cmd: &str, rest: &str, output: &mut impl Write) -> Result<()> {
        match cmd {
            "add" => self.session.open_create(),
            "list" => {}
            "search" => self.session.set_query(rest),
            "edit" | "delete" | "pin" => match rest.parse::<u64>() {
                Ok(id) => match cmd {
                    "edit" => self.session.open_edit(id),
                    "delete" => self.session.request_delete(id),
                    _ => self.session.toggle_pin(id),
                },
                Err(_) => writeln!(output, "Expected a note id, e.g. `{cmd} 2`.")?,
            },
            _ => writeln!(output, "Unknown command `{cmd}`; try `help`.")?,
        }
        Ok(())
    }

    fn dispatch_form(&mut self, cmd: &str, rest: &str, output: &mut impl Write) -> Result<()> {
        match cmd {
            "title" => self.session.set_draft_title(rest),
            "desc" => self.session.set_draft_desc(rest),
            "label" => match rest.parse::<Label>() {
                Ok(label) => {
                    if let Err(err @ DomainError::LabelLimit) =
                        self.session.toggle_draft_label(label)
                    {
                        writeln!(output, "{err}")?;
                    }
                }
                Err(err) => {
                    let keys = Label::ALL.map(|l| l.as_str()).join(", ");
                    writeln!(output, "{err} (valid labels: {keys})")?;
                }
            },
            "save" => {
                // A blank draft stays on the form without comment.
                let _ = self.session.submit();
            }
            "cancel" => self.session.cancel_form(),
            _ => writeln!(output, "Unknown command `{cmd}`; try `help`.")?,
        }
        Ok(())
    }
}
