// src/constants.rs
//
// Application-wide constants extracted from magic numbers throughout the codebase.
// Each constant is documented with its purpose and usage context.

/// Maximum number of notes that may be pinned at the same time.
///
/// Pinning an additional note while this many are already pinned is silently
/// ignored; unpinning is never restricted.
///
/// Used in: `application/store.rs`
pub const MAX_PINNED_NOTES: usize = 3;

/// Maximum number of labels a single note may carry.
///
/// The form controller rejects a third selection with a user-facing notice;
/// the store additionally truncates to this many on commit.
///
/// Used in: `application/form.rs`, `application/store.rs`
pub const MAX_NOTE_LABELS: usize = 2;

/// Maximum characters of the description shown in a list row.
///
/// Longer descriptions are cut at this many characters and suffixed with
/// an ellipsis; the full text is always available in the edit form.
///
/// Used in: `ports/text.rs`
pub const DESC_PREVIEW_LEN: usize = 60;
