pub mod prompter;

pub use prompter::{FieldPrompter, PromptAction, append_line};

#[cfg(test)]
pub mod scripted;
