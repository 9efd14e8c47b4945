// src/application/session.rs
use tracing::debug;

use crate::application::form::NoteDraft;
use crate::application::query::visible_notes;
use crate::application::router::{Router, Screen};
use crate::application::store::NoteStore;
use crate::domain::{DomainError, Label, Note};

/// Application root: owns the store, the router, the persistent search query,
/// the active form draft, and the pending delete confirmation.
///
/// Every user-visible operation goes through a method here; the presentation
/// layer never mutates state directly. All methods run synchronously on the
/// calling thread and leave the session in a renderable state.
#[derive(Debug)]
pub struct Session {
    store: NoteStore,
    router: Router,
    query: String,
    draft: NoteDraft,
    pending_delete: Option<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            store: NoteStore::seeded(),
            router: Router::new(),
            query: String::new(),
            draft: NoteDraft::new(),
            pending_delete: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn screen(&self) -> Screen {
        self.router.screen()
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn pending_delete(&self) -> Option<u64> {
        self.pending_delete
    }

    /// The filtered, pinned-first projection the list screen renders.
    pub fn visible(&self) -> Vec<&Note> {
        visible_notes(self.store.notes(), &self.query)
    }

    // --- navigation ---

    pub fn open_create(&mut self) {
        self.draft.clear();
        self.router.open_create();
    }

    /// Open the edit form for `id`, seeding the draft from the current store
    /// state. Stays on the list when the note no longer exists.
    pub fn open_edit(&mut self, id: u64) {
        match self.store.get(id) {
            Some(note) => {
                self.draft = NoteDraft::from_note(note);
                self.router.open_edit(id);
            }
            None => debug!(id, "edit target gone, staying on list"),
        }
    }

    /// Generic navigation by screen name; unknown names land on the list.
    pub fn go_to(&mut self, name: &str, note_id: Option<u64>) {
        match (name, note_id) {
            ("create" | "add", _) => self.open_create(),
            ("edit", Some(id)) => self.open_edit(id),
            _ => {
                self.router.go_to(name, note_id);
                self.draft.clear();
            }
        }
    }

    // --- list screen operations ---

    pub fn toggle_pin(&mut self, id: u64) {
        self.store.toggle_pin(id);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start the two-step delete: remembers the id and lets the presentation
    /// layer ask for confirmation. Ignored when the id is unknown.
    pub fn request_delete(&mut self, id: u64) {
        if self.store.get(id).is_some() {
            self.pending_delete = Some(id);
        } else {
            debug!(id, "delete target not found, ignoring request");
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            self.store.delete(id);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // --- form screen operations ---

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_desc(&mut self, desc: impl Into<String>) {
        self.draft.desc = desc.into();
    }

    pub fn toggle_draft_label(&mut self, label: Label) -> Result<(), DomainError> {
        self.draft.toggle_label(label)
    }

    /// Commit the draft.
    ///
    /// A blank draft is rejected silently and the form stays open (returns
    /// false). Otherwise the draft is handed to the store (`add` on the
    /// create screen, `edit` on the edit screen), cleared, and the router
    /// returns to the list.
    pub fn submit(&mut self) -> bool {
        if self.draft.is_blank() {
            debug!("rejecting submit: blank draft");
            return false;
        }

        match self.router.screen() {
            Screen::Create => {
                self.store
                    .add(&self.draft.title, &self.draft.desc, self.draft.labels().to_vec());
            }
            Screen::Edit(id) => {
                self.store.edit(
                    id,
                    &self.draft.title,
                    &self.draft.desc,
                    self.draft.labels().to_vec(),
                );
            }
            Screen::List => {
                debug!("submit outside a form, ignoring");
                return false;
            }
        }

        self.draft.clear();
        self.router.back_to_list();
        true
    }

    pub fn cancel_form(&mut self) {
        self.draft.clear();
        self.router.back_to_list();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
