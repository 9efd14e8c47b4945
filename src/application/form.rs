// src/application/form.rs
use crate::constants::MAX_NOTE_LABELS;
use crate::domain::{DomainError, Label, Note};

/// Transient draft state for the create and edit forms.
///
/// A draft is uncommitted until `Session::submit` hands it to the store; it
/// validates label selection eagerly (with a user-facing notice at the cap)
/// but leaves the blank-draft check to commit time, as the original form did.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub desc: String,
    labels: Vec<Label>,
}

impl NoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the edit form from the latest stored state of a note.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            desc: note.desc.clone(),
            labels: note.labels.clone(),
        }
    }

    /// Toggle a label selection.
    ///
    /// Removes the label when already selected; otherwise adds it, unless
    /// [`MAX_NOTE_LABELS`] are selected already, in which case the selection
    /// stays as-is and [`DomainError::LabelLimit`] is returned for the
    /// presentation layer to surface.
    pub fn toggle_label(&mut self, label: Label) -> Result<(), DomainError> {
        if let Some(pos) = self.labels.iter().position(|l| *l == label) {
            self.labels.remove(pos);
            return Ok(());
        }

        if self.labels.len() >= MAX_NOTE_LABELS {
            return Err(DomainError::LabelLimit);
        }

        self.labels.push(label);
        Ok(())
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn has_label(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }

    /// True when both title and desc are blank; such a draft cannot commit.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.desc.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.desc.clear();
        self.labels.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_draft_when_toggling_label_then_label_is_selected() {
        // Arrange
        let mut draft = NoteDraft::new();

        // Act
        draft.toggle_label(Label::Urgent).expect("toggle should succeed");

        // Assert
        assert_eq!(draft.labels(), &[Label::Urgent]);
    }

    #[test]
    fn given_selected_label_when_toggling_again_then_label_is_removed() {
        // Arrange
        let mut draft = NoteDraft::new();
        draft.toggle_label(Label::Urgent).unwrap();
        draft.toggle_label(Label::Important).unwrap();

        // Act
        draft.toggle_label(Label::Urgent).expect("toggle should succeed");

        // Assert
        assert_eq!(draft.labels(), &[Label::Important]);
    }

    #[test]
    fn given_two_selected_labels_when_toggling_third_then_selection_is_unchanged() {
        // Arrange
        let mut draft = NoteDraft::new();
        draft.toggle_label(Label::Urgent).unwrap();
        draft.toggle_label(Label::Important).unwrap();

        // Act
        let result = draft.toggle_label(Label::NotUrgent);

        // Assert
        assert!(matches!(result, Err(DomainError::LabelLimit)));
        assert_eq!(draft.labels(), &[Label::Urgent, Label::Important]);
    }

    #[test]
    fn given_label_limit_rejection_when_rendered_then_matches_alert_text() {
        let err = DomainError::LabelLimit;
        assert_eq!(err.to_string(), "You can only select up to 2 labels");
    }

    #[test]
    fn given_whitespace_fields_when_checking_blank_then_draft_is_blank() {
        let draft = NoteDraft {
            title: "  ".to_string(),
            desc: "\t".to_string(),
            labels: vec![],
        };
        assert!(draft.is_blank());
    }

    #[test]
    fn given_desc_only_when_checking_blank_then_draft_is_not_blank() {
        let draft = NoteDraft {
            desc: "something".to_string(),
            ..NoteDraft::new()
        };
        assert!(!draft.is_blank());
    }

    #[test]
    fn given_note_when_seeding_draft_then_copies_all_fields() {
        // Arrange
        let note = Note::new(7, "title", "desc").with_labels(vec![Label::NotImportant]);

        // Act
        let draft = NoteDraft::from_note(&note);

        // Assert
        assert_eq!(draft.title, "title");
        assert_eq!(draft.desc, "desc");
        assert_eq!(draft.labels(), &[Label::NotImportant]);
    }

    #[test]
    fn given_populated_draft_when_clearing_then_all_fields_reset() {
        // Arrange
        let mut draft = NoteDraft {
            title: "t".to_string(),
            desc: "d".to_string(),
            labels: vec![Label::Urgent],
        };

        // Act
        draft.clear();

        // Assert
        assert!(draft.is_blank());
        assert!(draft.labels().is_empty());
    }
}
