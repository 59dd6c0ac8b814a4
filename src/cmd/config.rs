use clap::{Args, Subcommand};

use crate::config::{StoredConfig, config_file_path};
use crate::domain::commit_type::CommitType;
use crate::error::AppResult;
use crate::services::{FieldPrompter, PromptAction};

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Run the interactive configuration wizard.
    Init,
    /// Show the stored configuration.
    Show,
}

pub async fn run(command: ConfigCommand, prompter: &dyn FieldPrompter) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(prompter).await,
        ConfigCommand::Show => run_show(),
    }
}

async fn run_init(prompter: &dyn FieldPrompter) -> AppResult<()> {
    let mut cfg = StoredConfig::load()?;
    if edit_config(&mut cfg, prompter).await? {
        cfg.save()?;
        let path = config_file_path()?;
        prompter
            .say(&format!("\nConfiguration saved to {}", path.display()))
            .await?;
    }
    Ok(())
}

/// Returns `false` when input ended before the wizard finished.
async fn edit_config(cfg: &mut StoredConfig, prompter: &dyn FieldPrompter) -> AppResult<bool> {
    prompter.say("Configuring cmb defaults.").await?;
    prompter
        .say("Press Enter to keep the current value, '-' to clear it.\n")
        .await?;

    loop {
        let mut candidate = cfg.default_type.clone();
        if !apply_prompt(prompter, "Default commit type", &mut candidate).await? {
            return Ok(false);
        }
        match candidate.as_deref().map(CommitType::from_choice) {
            Some(None) => {
                prompter
                    .say(&format!(
                        "Unknown type. Choose one of: {}",
                        CommitType::names().join(", ")
                    ))
                    .await?;
            }
            Some(Some(kind)) => {
                cfg.default_type = Some(kind.as_str().to_string());
                break;
            }
            None => {
                cfg.default_type = None;
                break;
            }
        }
    }

    apply_prompt(prompter, "Default scope", &mut cfg.default_scope).await
}

async fn apply_prompt(
    prompter: &dyn FieldPrompter,
    field: &str,
    target: &mut Option<String>,
) -> AppResult<bool> {
    match prompter.ask(field, target.as_deref()).await? {
        PromptAction::Keep => {}
        PromptAction::Clear => *target = None,
        PromptAction::Set(value) => *target = Some(value),
        PromptAction::Closed => return Ok(false),
    }
    Ok(true)
}

fn run_show() -> AppResult<()> {
    let cfg = StoredConfig::load()?;
    let path = config_file_path()?;

    println!("Configuration file: {}", path.display());
    println!("Default type: {}", display_value(&cfg.default_type));
    println!("Default scope: {}", display_value(&cfg.default_scope));
    Ok(())
}

fn display_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scripted::ScriptedPrompter;

    #[tokio::test]
    async fn wizard_normalizes_type_choice() {
        let prompter = ScriptedPrompter::new(&["4", "web"]);
        let mut cfg = StoredConfig::default();

        assert!(edit_config(&mut cfg, &prompter).await.unwrap());
        assert_eq!(cfg.default_type.as_deref(), Some("feat"));
        assert_eq!(cfg.default_scope.as_deref(), Some("web"));
    }

    #[tokio::test]
    async fn wizard_reprompts_on_unknown_type_and_clears() {
        let prompter = ScriptedPrompter::new(&["feature", "-", "-"]);
        let mut cfg = StoredConfig {
            default_type: Some("fix".to_string()),
            default_scope: Some("core".to_string()),
        };

        assert!(edit_config(&mut cfg, &prompter).await.unwrap());
        assert_eq!(cfg, StoredConfig::default());
        assert!(prompter.transcript().contains("Unknown type."));
    }

    #[tokio::test]
    async fn wizard_stops_when_input_ends() {
        let prompter = ScriptedPrompter::new(&[]);
        let mut cfg = StoredConfig::default();
        assert!(!edit_config(&mut cfg, &prompter).await.unwrap());
    }

    #[test]
    fn displays_missing_values() {
        assert_eq!(display_value(&None), "<not set>");
        assert_eq!(display_value(&Some(String::new())), "<not set>");
        assert_eq!(display_value(&Some("api".to_string())), "api");
    }
}
