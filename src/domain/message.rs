use std::fmt;

use crate::domain::draft::CommitDraft;

/// Rendered commit message. The header doubles as the pull-request title and
/// the body as its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub header: String,
    pub body: String,
}

impl CommitMessage {
    pub fn render(draft: &CommitDraft) -> Self {
        Self {
            header: render_header(draft),
            body: render_body(draft),
        }
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.header, self.body)
    }
}

fn render_header(draft: &CommitDraft) -> String {
    let mut header = draft.kind.clone();
    if !draft.scope.is_empty() {
        header.push_str(&format!("({})", draft.scope));
    }
    header.push_str(": ");
    header.push_str(&draft.title);
    if !draft.ticket.is_empty() {
        header.push_str(&format!(" ({})", draft.ticket.to_uppercase()));
    }
    header
}

fn render_body(draft: &CommitDraft) -> String {
    let mut body = draft.description.clone();
    if !draft.breaking.is_empty() {
        body.push_str("\n\nBREAKING CHANGE: ");
        body.push_str(&draft.breaking);
    }
    body
}
