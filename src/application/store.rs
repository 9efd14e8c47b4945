// src/application/store.rs
use tracing::debug;

use crate::constants::{MAX_NOTE_LABELS, MAX_PINNED_NOTES};
use crate::domain::{Label, Note};

/// In-memory note collection and its mutation operations.
///
/// The store owns the single ordered collection of notes for the process
/// lifetime. All access happens on the one UI thread, so there is no locking;
/// every operation is a plain O(n) scan, fine for the note counts involved.
///
/// Rejected mutations (blank drafts, pin cap, unknown ids) are deliberate
/// no-ops rather than errors; they are logged at debug level only.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection every fresh session starts with: one example note.
    pub fn seeded() -> Self {
        let seed = Note::new(
            1,
            "Welcome to pinnote",
            "Lorem Ipsum is simply dummy text of the printing and typesetting \
             industry. Lorem Ipsum has been the industry",
        )
        .with_labels(vec![Label::Urgent, Label::Important]);

        Self { notes: vec![seed] }
    }

    /// Append a new note with a freshly assigned id.
    ///
    /// Ids are `max existing id + 1` (1 for an empty collection), so deleting
    /// notes can never cause an id to be reused. Returns `None` without
    /// mutating when both title and desc are blank.
    pub fn add(&mut self, title: &str, desc: &str, labels: Vec<Label>) -> Option<&Note> {
        if title.trim().is_empty() && desc.trim().is_empty() {
            debug!("rejecting add: blank title and desc");
            return None;
        }

        let id = self.next_id();
        let note = Note::new(id, title, desc).with_labels(normalize_labels(labels));
        debug!(id, "adding note");
        self.notes.push(note);
        self.notes.last()
    }

    /// Replace the record matching `id` in full, keeping id and pinned flag.
    ///
    /// Silently does nothing when `id` is absent or the replacement is blank.
    pub fn edit(&mut self, id: u64, title: &str, desc: &str, labels: Vec<Label>) {
        if title.trim().is_empty() && desc.trim().is_empty() {
            debug!(id, "rejecting edit: blank title and desc");
            return;
        }

        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                debug!(id, "editing note");
                note.title = title.to_string();
                note.desc = desc.to_string();
                note.labels = normalize_labels(labels);
            }
            None => debug!(id, "edit target not found"),
        }
    }

    /// Remove the record matching `id`; no-op when absent.
    pub fn delete(&mut self, id: u64) {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            debug!(id, "delete target not found");
        } else {
            debug!(id, "deleted note");
        }
    }

    /// Flip the pinned flag on the note matching `id`.
    ///
    /// Unpinning always succeeds. Pinning succeeds only while fewer than
    /// [`MAX_PINNED_NOTES`] notes are pinned; at the cap the toggle is a
    /// silent no-op.
    pub fn toggle_pin(&mut self, id: u64) {
        let pinned_count = self.pinned_count();

        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(note) if note.pinned => {
                debug!(id, "unpinning note");
                note.pinned = false;
            }
            Some(note) if pinned_count < MAX_PINNED_NOTES => {
                debug!(id, "pinning note");
                note.pinned = true;
            }
            Some(_) => debug!(id, pinned_count, "rejecting pin: cap reached"),
            None => debug!(id, "pin target not found"),
        }
    }

    pub fn get(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn pinned_count(&self) -> usize {
        self.notes.iter().filter(|n| n.pinned).count()
    }

    fn next_id(&self) -> u64 {
        self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1
    }
}

/// Drop duplicate labels (keeping first occurrence) and cap the length.
fn normalize_labels(labels: Vec<Label>) -> Vec<Label> {
    let mut out: Vec<Label> = Vec::with_capacity(MAX_NOTE_LABELS);
    for label in labels {
        if !out.contains(&label) {
            out.push(label);
        }
        if out.len() == MAX_NOTE_LABELS {
            break;
        }
    }
    out
}
