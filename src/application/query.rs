// src/application/query.rs
use crate::domain::Note;

/// Derive the visible projection of the collection for rendering.
///
/// Retains a note when the case-insensitive `query` is a substring of its
/// title, its desc, or any of its label keys (an empty query matches all),
/// then orders pinned notes first. The sort is stable, so both groups keep
/// insertion order. Pure: the underlying collection is never touched, and
/// repeated calls with the same inputs yield the same snapshot.
pub fn visible_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let needle = query.trim().to_lowercase();

    let mut visible: Vec<&Note> = notes
        .iter()
        .filter(|note| needle.is_empty() || matches_query(note, &needle))
        .collect();

    visible.sort_by_key(|note| !note.pinned);
    visible
}

fn matches_query(note: &Note, needle: &str) -> bool {
    note.title.to_lowercase().contains(needle)
        || note.desc.to_lowercase().contains(needle)
        || note
            .labels
            .iter()
            .any(|label| label.as_str().to_lowercase().contains(needle))
}
