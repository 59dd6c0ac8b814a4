use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::services::{FieldPrompter, PromptAction};

/// Replays canned answers and records everything shown to the user.
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    transcript: Mutex<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            transcript: Mutex::new(String::new()),
        }
    }

    pub fn transcript(&self) -> String {
        self.transcript.lock().unwrap().clone()
    }
}

#[async_trait]
impl FieldPrompter for ScriptedPrompter {
    async fn ask(&self, question: &str, _current: Option<&str>) -> AppResult<PromptAction> {
        self.transcript.lock().unwrap().push_str(&format!("? {question}\n"));
        let answer = self.answers.lock().unwrap().pop_front();
        Ok(match answer {
            Some(line) => PromptAction::from_line(&line),
            None => PromptAction::Closed,
        })
    }

    async fn say(&self, text: &str) -> AppResult<()> {
        let mut transcript = self.transcript.lock().unwrap();
        transcript.push_str(text);
        if !text.ends_with('\n') {
            transcript.push('\n');
        }
        Ok(())
    }
}
