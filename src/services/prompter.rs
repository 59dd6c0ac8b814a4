use async_trait::async_trait;

use crate::error::AppResult;

/// Outcome of a single prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Keep,
    Clear,
    Set(String),
    /// Input stream ended.
    Closed,
}

impl PromptAction {
    /// Enter keeps the current value, `-` clears it, anything else replaces it.
    pub fn from_line(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            PromptAction::Keep
        } else if trimmed == "-" {
            PromptAction::Clear
        } else {
            PromptAction::Set(trimmed.to_string())
        }
    }
}

/// Appends one input line to `buffer`. A line ending in `\` continues the
/// answer on the next line; returns whether another line is expected.
pub fn append_line(buffer: &mut String, line: &str) -> bool {
    match line.strip_suffix('\\') {
        Some(head) => {
            buffer.push_str(head);
            buffer.push('\n');
            true
        }
        None => {
            buffer.push_str(line);
            false
        }
    }
}

#[async_trait]
pub trait FieldPrompter: Send + Sync {
    async fn ask(&self, question: &str, current: Option<&str>) -> AppResult<PromptAction>;
    async fn say(&self, text: &str) -> AppResult<()>;
}
