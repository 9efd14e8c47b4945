// src/ports/text.rs
use anyhow::Result;

use crate::application::{Screen, Session};
use crate::constants::DESC_PREVIEW_LEN;
use crate::domain::{Label, Note};

// Fixed label color map, carried over from the app's UI palette
// (urgent #D32F2F, notUrgent #388E3C, important #1976D2, notImportant #FFC107).
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const BLUE: &str = "\x1b[34m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Renders the active screen as plain text for the interactive shell.
///
/// The presenter only reads session state; the core never interprets the
/// label colors applied here.
#[derive(Debug)]
pub struct TextPresenter {
    color: bool,
}

impl TextPresenter {
    pub fn new() -> Self {
        Self { color: true }
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Render whatever the router says is active, plus the delete
    /// confirmation prompt when one is pending.
    pub fn render(&self, session: &Session) -> String {
        let mut out = match session.screen() {
            Screen::List => self.render_list(session),
            Screen::Create => self.render_form("New note", session),
            Screen::Edit(id) => self.render_form(&format!("Edit note #{id}"), session),
        };

        if let Some(id) = session.pending_delete() {
            out.push_str(&format!("\nDelete note #{id}? (y/n)\n"));
        }

        out
    }

    fn render_list(&self, session: &Session) -> String {
        let visible = session.visible();
        let mut out = format!("Notes ({} total)\n", session.store().len());

        if !session.query().is_empty() {
            out.push_str(&format!("search: \"{}\"\n", session.query()));
        }

        if visible.is_empty() {
            out.push_str("  (no notes match)\n");
        }
        for note in visible {
            out.push_str(&self.render_row(note));
        }
        out
    }

    fn render_row(&self, note: &Note) -> String {
        let marker = if note.pinned { '*' } else { ' ' };
        let chips: String = note.labels.iter().map(|l| self.label_chip(*l)).collect();

        let mut line = format!("{marker} #{} {}{}", note.id, chips, note.title.trim());
        let preview = preview(&note.desc);
        if !preview.is_empty() {
            line.push_str(" - ");
            line.push_str(&preview);
        }
        line.push('\n');
        line
    }

    fn render_form(&self, heading: &str, session: &Session) -> String {
        let draft = session.draft();
        let chips: String = draft.labels().iter().map(|l| self.label_chip(*l)).collect();
        let available = Label::ALL.map(|l| l.as_str()).join(", ");

        format!(
            "-- {heading} --\ntitle: {}\ndesc:  {}\nlabels: {} (available: {available})\n",
            draft.title, draft.desc, chips,
        )
    }

    fn label_chip(&self, label: Label) -> String {
        if !self.color {
            return format!("[{label}]");
        }
        let color = match label {
            Label::Urgent => RED,
            Label::NotUrgent => GREEN,
            Label::Important => BLUE,
            Label::NotImportant => YELLOW,
        };
        format!("{color}[{label}]{RESET}")
    }

    /// Pretty JSON of the current visible projection, for the `dump` command.
    pub fn render_json(&self, notes: &[&Note]) -> Result<String> {
        Ok(serde_json::to_string_pretty(notes)?)
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new()
    }
}

fn preview(desc: &str) -> String {
    let first_line = desc.lines().next().unwrap_or("").trim();
    if first_line.chars().count() <= DESC_PREVIEW_LEN {
        return first_line.to_string();
    }
    let cut: String = first_line.chars().take(DESC_PREVIEW_LEN).collect();
    format!("{}...", cut.trim_end())
}
