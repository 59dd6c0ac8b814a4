use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::draft::{CommitDraft, Field};
use crate::domain::message::CommitMessage;
use crate::domain::validation::{ValidationReport, validate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Set(Field, String),
    Clear(Field),
}

impl FieldEdit {
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::Set(field, _) | FieldEdit::Clear(field) => *field,
        }
    }
}

/// What the user sees below the form once they have changed something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub message: CommitMessage,
    pub errors: Vec<(Field, String)>,
}

impl Preview {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    initial: CommitDraft,
    draft: CommitDraft,
    touched: BTreeSet<Field>,
    report: ValidationReport,
}

impl FormState {
    pub fn new(initial: CommitDraft) -> Self {
        let report = validate(&initial);
        Self {
            draft: initial.clone(),
            initial,
            touched: BTreeSet::new(),
            report,
        }
    }

    pub fn draft(&self) -> &CommitDraft {
        &self.draft
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Applies one edit and revalidates. Returns the edited field's error.
    pub fn apply(&mut self, edit: FieldEdit) -> Option<&str> {
        let field = edit.field();
        match edit {
            FieldEdit::Set(field, value) => self.draft.set(field, value),
            FieldEdit::Clear(field) => self.draft.set(field, String::new()),
        }
        self.touched.insert(field);
        self.report = validate(&self.draft);
        debug!(
            field = field.as_str(),
            valid = self.report.is_valid(),
            "field updated"
        );
        self.report.error(field)
    }

    /// Marks a field as visited without changing it.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.initial
    }

    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }

    /// Rendered message plus the errors of fields the user has visited.
    pub fn preview(&self) -> Option<Preview> {
        if !self.is_dirty() {
            return None;
        }
        Some(Preview {
            message: CommitMessage::render(&self.draft),
            errors: self
                .report
                .errors()
                .filter(|(field, _)| self.is_touched(*field))
                .map(|(field, msg)| (field, msg.to_string()))
                .collect(),
        })
    }
}
