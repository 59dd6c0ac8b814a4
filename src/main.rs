mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod preview;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::build::{self, BuildArgs};
use crate::cmd::compose::{self, ComposeCommandArgs};
use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::types;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::terminal::TerminalPrompter;

#[derive(Parser)]
#[command(
    name = "cmb",
    author,
    version,
    about = "Build Conventional Commits messages for your pull requests"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the commit message form interactively.
    Compose(ComposeArgs),
    /// Render a commit message from flags or a JSON draft.
    Build(BuildArgs),
    /// List the available commit types.
    Types,
    /// Manage CLI configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct ComposeArgs {
    /// Exit with an error when the finished message has validation problems.
    #[arg(long)]
    strict: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CMB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Types => {
            types::run();
            Ok(())
        }
        Commands::Config(args) => {
            let prompter = TerminalPrompter::new();
            config_cmd::run(args.command, &prompter).await
        }
        Commands::Build(args) => {
            let config = AppConfig::load()?;
            build::run(&config, args)
        }
        Commands::Compose(args) => {
            let config = AppConfig::load()?;
            let context = AppContext::new(config, Arc::new(TerminalPrompter::new()));
            compose::run(
                &context,
                ComposeCommandArgs {
                    strict: args.strict,
                },
            )
            .await
        }
    }
}
