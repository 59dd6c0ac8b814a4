use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::commit_type::CommitType;
use crate::domain::draft::{CommitDraft, Field};

pub const TITLE_MIN: usize = 10;
pub const TITLE_MAX: usize = 50;
pub const DESCRIPTION_MIN: usize = 50;
pub const DESCRIPTION_MAX: usize = 300;
pub const BREAKING_MIN: usize = 10;
pub const BREAKING_MAX: usize = 100;

/// Bounded free-text rule. `required` is reported when the field is empty;
/// an empty optional field passes.
struct LengthRule {
    field: Field,
    min: usize,
    max: usize,
    required: Option<&'static str>,
    too_short: &'static str,
    too_long: &'static str,
}

const LENGTH_RULES: [LengthRule; 3] = [
    LengthRule {
        field: Field::Title,
        min: TITLE_MIN,
        max: TITLE_MAX,
        required: Some("You need to provide a short description."),
        too_short: "Your short description should be more than 10 characters.",
        too_long: "Your short description should be less than 50 characters.",
    },
    LengthRule {
        field: Field::Description,
        min: DESCRIPTION_MIN,
        max: DESCRIPTION_MAX,
        required: Some("You should provide more details."),
        too_short: "Your details should be more than 50 characters.",
        too_long: "Your details should be less than 300 characters.",
    },
    LengthRule {
        field: Field::Breaking,
        min: BREAKING_MIN,
        max: BREAKING_MAX,
        required: None,
        too_short: "Your breaking changes should be more than 10 characters.",
        too_long: "Your breaking changes should be less than 100 characters.",
    },
];

impl LengthRule {
    fn check(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            return self.required.map(str::to_string);
        }
        let len = value.chars().count();
        if len < self.min {
            Some(self.too_short.to_string())
        } else if len > self.max {
            Some(self.too_long.to_string())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Errors in form order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

pub fn validate(draft: &CommitDraft) -> ValidationReport {
    let mut errors = BTreeMap::new();

    if let Some(message) = check_type(&draft.kind) {
        errors.insert(Field::Type, message);
    }
    for rule in &LENGTH_RULES {
        if let Some(message) = rule.check(draft.get(rule.field)) {
            errors.insert(rule.field, message);
        }
    }

    ValidationReport { errors }
}

fn check_type(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("You need to provide what type of change.".to_string());
    }
    match CommitType::from_str(value) {
        Some(_) => None,
        None => Some(format!(
            "type must be one of the following values: {}",
            CommitType::names().join(", ")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> CommitDraft {
        CommitDraft {
            kind: "fix".to_string(),
            scope: "parser".to_string(),
            ticket: "abc-123".to_string(),
            title: "correct null check".to_string(),
            description: "x".repeat(60),
            breaking: String::new(),
        }
    }

    #[test]
    fn accepts_complete_draft() {
        let report = validate(&valid_draft());
        assert!(report.is_valid());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn empty_draft_flags_required_fields_only() {
        let report = validate(&CommitDraft::default());
        let fields: Vec<Field> = report.errors().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Type, Field::Title, Field::Description]);
        assert_eq!(
            report.error(Field::Title),
            Some("You need to provide a short description.")
        );
        assert_eq!(
            report.error(Field::Description),
            Some("You should provide more details.")
        );
    }

    #[test]
    fn title_outside_bounds_is_invalid() {
        for len in [1, 9, 51, 80] {
            let mut draft = valid_draft();
            draft.title = "t".repeat(len);
            let report = validate(&draft);
            assert!(!report.is_valid(), "title of length {len}");
            assert!(report.error(Field::Title).is_some(), "title of length {len}");
        }
        for len in [10, 50] {
            let mut draft = valid_draft();
            draft.title = "t".repeat(len);
            assert!(validate(&draft).is_valid(), "title of length {len}");
        }
    }

    #[test]
    fn description_outside_bounds_is_invalid() {
        let mut draft = valid_draft();
        draft.description = "d".repeat(49);
        assert_eq!(
            validate(&draft).error(Field::Description),
            Some("Your details should be more than 50 characters.")
        );

        draft.description = "d".repeat(301);
        assert_eq!(
            validate(&draft).error(Field::Description),
            Some("Your details should be less than 300 characters.")
        );

        draft.description = "d".repeat(300);
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn breaking_is_checked_only_when_present() {
        let mut draft = valid_draft();
        draft.breaking = "short".to_string();
        assert_eq!(
            validate(&draft).error(Field::Breaking),
            Some("Your breaking changes should be more than 10 characters.")
        );

        draft.breaking = "b".repeat(101);
        assert_eq!(
            validate(&draft).error(Field::Breaking),
            Some("Your breaking changes should be less than 100 characters.")
        );

        draft.breaking = "drops the --legacy flag".to_string();
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn unknown_type_lists_allowed_values() {
        let mut draft = valid_draft();
        draft.kind = "feature".to_string();
        let report = validate(&draft);
        assert_eq!(
            report.error(Field::Type),
            Some(
                "type must be one of the following values: build, ci, docs, feat, fix, perf, refactor, style, test"
            )
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut draft = valid_draft();
        draft.title = "é".repeat(10);
        assert!(validate(&draft).is_valid());
    }
}
