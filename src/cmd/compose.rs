use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::preview::format_warnings;
use crate::workflow::compose::compose_message;

#[derive(Debug, Clone)]
pub struct ComposeCommandArgs {
    pub strict: bool,
}

pub async fn run(ctx: &AppContext, args: ComposeCommandArgs) -> AppResult<()> {
    let outcome = compose_message(ctx).await?;

    if !outcome.valid {
        ctx.prompter.say(&format_warnings(&outcome.errors)).await?;
    }
    println!("{}", outcome.message);

    if args.strict && !outcome.valid {
        return Err(AppError::Validation(outcome.errors.len()));
    }
    Ok(())
}
