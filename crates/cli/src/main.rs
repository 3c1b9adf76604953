use clap::Parser;
use commands::Commands;
use error::CliError;
use replay_core::{config::ReplayConfig, context::ReplayContext};
use std::process::ExitCode;
use tracing::Level;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "lockstep",
    version = "0.1.0",
    about = "Synchronized telemetry replay engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The failure body is the invocation result; the exit status
            // distinguishes it from success for the trigger.
            output::print_failure(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<(), CliError> {
    let config = ReplayConfig::from_env()?;
    let ctx = ReplayContext::from_config(config)?;

    match command {
        Commands::Tick => {
            let report = replay_runtime::executor::run(&ctx).await?;
            output::print_report(&report)?;
        }
        Commands::Init { position } => {
            ctx.cursor_store.init(position).await?;
        }
        Commands::Cursor => {
            let cursor = ctx.cursor_store.read().await?;
            println!("{}", serde_json::to_string(&cursor)?);
        }
    }

    Ok(())
}
