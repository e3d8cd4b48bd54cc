//! hookflow CLI entry point.
//!
//! Binary name: `hookflow`
//!
//! Parses CLI arguments, sets up tracing, loads configuration, then
//! dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use hookflow_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};
use state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = dispatch(cli).await;
    shutdown_tracing();
    result
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        // Neither needs configuration.
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "hookflow", &mut std::io::stdout());
        }
        Commands::Select { reg_no } => {
            cli::select::select(&reg_no, cli.json)?;
        }

        Commands::Config => {
            let state = AppState::init(cli.config.as_deref()).await?;
            cli::config::show_config(&state, cli.json)?;
        }
        Commands::Run {
            name,
            reg_no,
            email,
            strict,
        } => {
            let state = AppState::init(cli.config.as_deref()).await?;
            cli::run::run_flow(&state, name, reg_no, email, strict, cli.json).await?;
        }
    }

    Ok(())
}
