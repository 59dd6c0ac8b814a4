use std::fmt;

use serde::{Deserialize, Serialize};

/// The six form fields, in the order the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Type,
    Ticket,
    Scope,
    Title,
    Description,
    Breaking,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Type,
        Field::Ticket,
        Field::Scope,
        Field::Title,
        Field::Description,
        Field::Breaking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Ticket => "ticket",
            Field::Scope => "scope",
            Field::Title => "title",
            Field::Description => "description",
            Field::Breaking => "breaking",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Field::ALL.into_iter().find(|field| field.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Type => "What type of change did you make in this PR?",
            Field::Ticket => "What is the ticket for this PR?",
            Field::Scope => "What scope of the project did you change?",
            Field::Title => "Give a short description of what you did?",
            Field::Description => "Describe in more detail what you did during this PR?",
            Field::Breaking => "Is there a breaking change in this PR?",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Field::Type | Field::Title | Field::Description)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory state of the message being composed.
///
/// `kind` keeps the raw text for the commit type so that an unknown type is
/// reported by validation rather than refused at input time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitDraft {
    #[serde(rename = "type")]
    pub kind: String,
    pub scope: String,
    pub ticket: String,
    pub title: String,
    pub description: String,
    pub breaking: String,
}

impl CommitDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Type => &self.kind,
            Field::Ticket => &self.ticket,
            Field::Scope => &self.scope,
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Breaking => &self.breaking,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Type => &mut self.kind,
            Field::Ticket => &mut self.ticket,
            Field::Scope => &mut self.scope,
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Breaking => &mut self.breaking,
        };
        *slot = value.into();
    }

    /// Overlays every non-empty field of `other` onto `self`.
    pub fn merge(&mut self, other: &CommitDraft) {
        for field in Field::ALL {
            let value = other.get(field);
            if !value.is_empty() {
                self.set(field, value);
            }
        }
    }
}
