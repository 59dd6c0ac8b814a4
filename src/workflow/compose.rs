use std::fmt::Write as _;

use tracing::debug;

use crate::context::AppContext;
use crate::domain::commit_type::CommitType;
use crate::domain::draft::Field;
use crate::domain::message::CommitMessage;
use crate::error::AppResult;
use crate::preview::format_preview;
use crate::services::PromptAction;
use crate::workflow::form::{FieldEdit, FormState};

pub struct ComposeOutcome {
    pub message: CommitMessage,
    pub valid: bool,
    pub errors: Vec<(Field, String)>,
}

/// Walks the form once, then keeps taking edit requests until the user
/// finishes or input ends.
pub async fn compose_message(ctx: &AppContext) -> AppResult<ComposeOutcome> {
    let mut form = FormState::new(ctx.config.initial_draft());

    let mut open = true;
    for field in Field::ALL {
        if !edit_field(ctx, &mut form, field).await? {
            open = false;
            break;
        }
    }

    while open {
        match form.preview() {
            Some(preview) => ctx.prompter.say(&format_preview(&preview)).await?,
            None => ctx.prompter.say("Nothing to preview yet.").await?,
        }

        let question = format!(
            "Edit a field ({}), or press Enter to finish",
            Field::ALL.map(|f| f.as_str()).join(", ")
        );
        match ctx.prompter.ask(&question, None).await? {
            PromptAction::Keep | PromptAction::Clear | PromptAction::Closed => open = false,
            PromptAction::Set(name) => match Field::from_str(&name) {
                Some(field) => open = edit_field(ctx, &mut form, field).await?,
                None => {
                    ctx.prompter
                        .say(&format!("Unknown field '{name}'."))
                        .await?
                }
            },
        }
    }

    Ok(ComposeOutcome {
        message: CommitMessage::render(form.draft()),
        valid: form.is_valid(),
        errors: form
            .report()
            .errors()
            .map(|(field, msg)| (field, msg.to_string()))
            .collect(),
    })
}

/// Prompts for one field. Returns `false` once input is exhausted.
async fn edit_field(ctx: &AppContext, form: &mut FormState, field: Field) -> AppResult<bool> {
    if field == Field::Type {
        ctx.prompter.say(&type_menu()).await?;
    }

    let mut question = field.label().to_string();
    if field.is_required() {
        question.push_str(" *");
    }
    if matches!(field, Field::Description | Field::Breaking) {
        question.push_str(" (end a line with \\ to continue)");
    }
    let current = form.draft().get(field).to_string();
    let current = (!current.is_empty()).then_some(current.as_str());

    let edit = match ctx.prompter.ask(&question, current).await? {
        PromptAction::Closed => return Ok(false),
        PromptAction::Keep => {
            form.touch(field);
            return Ok(true);
        }
        PromptAction::Clear => FieldEdit::Clear(field),
        PromptAction::Set(value) if field == Field::Type => {
            let value = CommitType::from_choice(&value)
                .map(|kind| kind.as_str().to_string())
                .unwrap_or(value);
            FieldEdit::Set(field, value)
        }
        PromptAction::Set(value) => FieldEdit::Set(field, value),
    };

    debug!(field = field.as_str(), "applying edit");
    if let Some(error) = form.apply(edit) {
        let warning = format!("  ! {error}");
        ctx.prompter.say(&warning).await?;
    }
    Ok(true)
}

fn type_menu() -> String {
    let mut menu = String::new();
    for (index, kind) in CommitType::ALL.iter().enumerate() {
        let _ = writeln!(menu, "  {}) {}: {}", index + 1, kind, kind.description());
    }
    menu
}
