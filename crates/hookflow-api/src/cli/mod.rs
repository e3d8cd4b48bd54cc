//! CLI command definitions for the `hookflow` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod config;
pub mod run;
pub mod select;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use hookflow_infra::config::CONFIG_PATH_ENV;

/// Fetch a webhook, pick a payload, store it, and submit it.
#[derive(Parser)]
#[command(name = "hookflow", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to hookflow.toml (defaults to ./hookflow.toml).
    #[arg(long, global = true, env = CONFIG_PATH_ENV)]
    pub config: Option<PathBuf>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full flow: generate webhook, select, store, submit.
    Run {
        /// Name sent to the Generation Endpoint.
        #[arg(long, env = "HOOKFLOW_NAME")]
        name: String,

        /// Registration id; its trailing digits choose the payload.
        #[arg(long = "reg-no", env = "HOOKFLOW_REG_NO")]
        reg_no: String,

        /// Email sent to the Generation Endpoint.
        #[arg(long, env = "HOOKFLOW_EMAIL")]
        email: String,

        /// Exit non-zero on failure and print the flow report.
        #[arg(long)]
        strict: bool,
    },

    /// Show which payload a registration id selects, without any I/O.
    Select {
        /// Registration id to evaluate.
        reg_no: String,
    },

    /// Show the resolved configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_flag_reads_config_path_env() {
        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == "config")
            .unwrap();
        assert_eq!(arg.get_env(), Some(std::ffi::OsStr::new(CONFIG_PATH_ENV)));
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from([
            "hookflow",
            "run",
            "--name",
            "Jane",
            "--reg-no",
            "PES1202300001",
            "--email",
            "jane@example.com",
            "--strict",
        ])
        .unwrap();

        match cli.command {
            Commands::Run {
                name,
                reg_no,
                email,
                strict,
            } => {
                assert_eq!(name, "Jane");
                assert_eq!(reg_no, "PES1202300001");
                assert_eq!(email, "jane@example.com");
                assert!(strict);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hookflow",
            "select",
            "REG12",
            "--json",
            "-vv",
            "--config",
            "/tmp/h.toml",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/h.toml")));
        assert!(matches!(cli.command, Commands::Select { ref reg_no } if reg_no == "REG12"));
    }
}
