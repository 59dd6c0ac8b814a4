use async_trait::async_trait;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stderr};
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::services::{FieldPrompter, PromptAction, append_line};

/// Reads answers from stdin and writes prompts to stderr, leaving stdout for
/// the finished message.
pub struct TerminalPrompter {
    input: Mutex<Lines<BufReader<Stdin>>>,
    output: Mutex<Stderr>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(io::stdin()).lines()),
            output: Mutex::new(io::stderr()),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FieldPrompter for TerminalPrompter {
    async fn ask(&self, question: &str, current: Option<&str>) -> AppResult<PromptAction> {
        let prompt = match current {
            Some(value) if !value.is_empty() => {
                format!("{question} [{value}] (Enter to keep, '-' to clear): ")
            }
            _ => format!("{question} (Enter to skip): "),
        };
        {
            let mut output = self.output.lock().await;
            output.write_all(prompt.as_bytes()).await?;
            output.flush().await?;
        }

        let mut input = self.input.lock().await;
        let Some(first) = input.next_line().await? else {
            return Ok(PromptAction::Closed);
        };
        let mut answer = String::new();
        let mut more = append_line(&mut answer, &first);
        while more {
            match input.next_line().await? {
                Some(line) => more = append_line(&mut answer, &line),
                None => more = false,
            }
        }
        Ok(PromptAction::from_line(&answer))
    }

    async fn say(&self, text: &str) -> AppResult<()> {
        let mut output = self.output.lock().await;
        output.write_all(text.as_bytes()).await?;
        if !text.ends_with('\n') {
            output.write_all(b"\n").await?;
        }
        output.flush().await?;
        Ok(())
    }
}
