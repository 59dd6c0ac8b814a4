use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::draft::{CommitDraft, Field};
use crate::domain::message::CommitMessage;
use crate::domain::validation::{ValidationReport, validate};
use crate::error::{AppError, AppResult};
use crate::preview::format_warnings;

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Commit type (build, ci, docs, feat, fix, perf, refactor, style, test).
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,
    /// Part of the project that changed.
    #[arg(short, long)]
    pub scope: Option<String>,
    /// Ticket reference; rendered upper-cased.
    #[arg(short = 'k', long)]
    pub ticket: Option<String>,
    /// Short summary, 10 to 50 characters.
    #[arg(long)]
    pub title: Option<String>,
    /// Detailed description, 50 to 300 characters.
    #[arg(short, long)]
    pub description: Option<String>,
    /// Breaking change note, 10 to 100 characters.
    #[arg(short, long)]
    pub breaking: Option<String>,
    /// Read a JSON draft from this file (`-` for stdin). Flags take precedence.
    #[arg(short, long, value_name = "FILE")]
    pub from: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Exit with an error when the message has validation problems.
    #[arg(long)]
    pub strict: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    header: &'a str,
    body: &'a str,
    message: String,
    valid: bool,
    errors: &'a ValidationReport,
}

pub fn run(config: &AppConfig, args: BuildArgs) -> AppResult<()> {
    let draft = resolve_draft(config, &args)?;
    let report = validate(&draft);
    let message = CommitMessage::render(&draft);

    match args.format {
        OutputFormat::Text => {
            if !report.is_valid() {
                let errors: Vec<_> = report.errors().collect();
                eprint!("{}", format_warnings(&errors));
            }
            println!("{message}");
        }
        OutputFormat::Json => println!("{}", json_report(&message, &report)?),
    }

    if args.strict && !report.is_valid() {
        return Err(AppError::Validation(report.len()));
    }
    Ok(())
}

/// Config defaults, then the draft file, then flags.
fn resolve_draft(config: &AppConfig, args: &BuildArgs) -> AppResult<CommitDraft> {
    let mut draft = config.initial_draft();
    if let Some(path) = &args.from {
        draft.merge(&read_draft(path)?);
    }
    // A flag given as "" clears whatever the lower layers supplied.
    let flags = [
        (Field::Type, &args.kind),
        (Field::Scope, &args.scope),
        (Field::Ticket, &args.ticket),
        (Field::Title, &args.title),
        (Field::Description, &args.description),
        (Field::Breaking, &args.breaking),
    ];
    for (field, value) in flags {
        if let Some(value) = value {
            draft.set(field, value.as_str());
        }
    }
    debug!(?draft, "draft resolved");
    Ok(draft)
}

fn read_draft(path: &Path) -> AppResult<CommitDraft> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|err| {
            AppError::Input(format!("cannot read draft {}: {err}", path.display()))
        })?
    };
    serde_json::from_str(&contents)
        .map_err(|err| AppError::Input(format!("invalid draft {}: {err}", path.display())))
}

fn json_report(message: &CommitMessage, report: &ValidationReport) -> AppResult<String> {
    let json = JsonReport {
        header: &message.header,
        body: &message.body,
        message: message.to_string(),
        valid: report.is_valid(),
        errors: report,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_and_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.json");
        fs::write(&path, r#"{"type":"feat","scope":"api","title":"from the file"}"#).unwrap();

        let config = AppConfig {
            default_type: Some("chore".to_string()),
            default_scope: Some("core".to_string()),
        };
        let args = BuildArgs {
            scope: Some("cli".to_string()),
            from: Some(path),
            ..BuildArgs::default()
        };

        let draft = resolve_draft(&config, &args).unwrap();
        assert_eq!(draft.kind, "feat");
        assert_eq!(draft.scope, "cli");
        assert_eq!(draft.title, "from the file");
    }

    #[test]
    fn empty_flags_clear_file_and_config_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.json");
        fs::write(
            &path,
            r#"{"ticket":"abc-9","title":"from the file","breaking":"drops the v1 api"}"#,
        )
        .unwrap();

        let config = AppConfig {
            default_type: Some("ci".to_string()),
            default_scope: Some("github".to_string()),
        };
        let args = BuildArgs {
            scope: Some(String::new()),
            ticket: Some(String::new()),
            breaking: Some(String::new()),
            from: Some(path),
            ..BuildArgs::default()
        };

        let draft = resolve_draft(&config, &args).unwrap();
        assert_eq!(draft.scope, "");
        assert_eq!(draft.ticket, "");
        assert_eq!(draft.breaking, "");
        assert_eq!(
            CommitMessage::render(&draft).header,
            "ci: from the file"
        );
    }

    #[test]
    fn rejects_malformed_draft_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.json");
        fs::write(&path, "{not json").unwrap();
        let args = BuildArgs {
            from: Some(path),
            ..BuildArgs::default()
        };

        let err = resolve_draft(&AppConfig::default(), &args).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn json_report_lists_errors_by_field() {
        let draft = CommitDraft {
            kind: "fix".to_string(),
            title: "tiny".to_string(),
            ..CommitDraft::default()
        };
        let json = json_report(&CommitMessage::render(&draft), &validate(&draft)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["header"], "fix: tiny");
        assert_eq!(value["valid"], false);
        assert_eq!(
            value["errors"]["title"],
            "Your short description should be more than 10 characters."
        );
        assert!(value["errors"].get("type").is_none());
    }
}
