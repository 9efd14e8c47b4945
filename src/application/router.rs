// src/application/router.rs
use tracing::debug;

/// Screen selection for the single-window UI.
///
/// The machine has no terminal state; it runs for the process lifetime.
/// `Edit` carries only the note id — the note itself is re-looked-up from
/// the store when the form renders, so edits always see the latest state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    List,
    Create,
    Edit(u64),
}

#[derive(Debug, Default)]
pub struct Router {
    screen: Screen,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn open_create(&mut self) {
        self.screen = Screen::Create;
    }

    pub fn open_edit(&mut self, id: u64) {
        self.screen = Screen::Edit(id);
    }

    pub fn back_to_list(&mut self) {
        self.screen = Screen::List;
    }

    /// Navigate by screen name, the generic entry point for the presentation
    /// layer. Unknown names, and `edit` without an id, fall back to the list.
    pub fn go_to(&mut self, name: &str, note_id: Option<u64>) {
        self.screen = match (name, note_id) {
            ("create", _) | ("add", _) => Screen::Create,
            ("edit", Some(id)) => Screen::Edit(id),
            ("list", _) | ("home", _) => Screen::List,
            _ => {
                debug!(name, "unknown screen name, falling back to list");
                Screen::List
            }
        };
    }
}
