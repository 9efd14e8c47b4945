// src/domain/note.rs
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::DomainError;

/// The four fixed categorical labels a note can carry.
///
/// The key strings (`urgent`, `notUrgent`, ...) are the canonical wire and
/// search representation; the presentation layer maps them to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    #[serde(rename = "urgent")]
    Urgent,
    #[serde(rename = "notUrgent")]
    NotUrgent,
    #[serde(rename = "important")]
    Important,
    #[serde(rename = "notImportant")]
    NotImportant,
}

impl Label {
    pub const ALL: [Label; 4] = [
        Label::Urgent,
        Label::NotUrgent,
        Label::Important,
        Label::NotImportant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Urgent => "urgent",
            Label::NotUrgent => "notUrgent",
            Label::Important => "important",
            Label::NotImportant => "notImportant",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the camelCase keys plus spaced/hyphenated spellings.
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "urgent" => Ok(Label::Urgent),
            "noturgent" => Ok(Label::NotUrgent),
            "important" => Ok(Label::Important),
            "notimportant" => Ok(Label::NotImportant),
            _ => Err(DomainError::UnknownLabel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub desc: String,
    pub labels: Vec<Label>,
    pub pinned: bool,
}

impl Note {
    pub fn new(id: u64, title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            desc: desc.into(),
            labels: Vec::new(),
            pinned: false,
        }
    }

    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }
}
