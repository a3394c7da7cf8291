// Tally CLI - verified volunteer hours from heterogeneous site logs

mod exit_codes;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{tally_exit_code, EXIT_ERROR, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Total verified volunteer hours across site activity logs")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize the configured sources and print verified hours per volunteer
    #[command(after_help = "\
Examples:
  tally run
  tally run spring.tally.toml
  tally run spring.tally.toml --report
  tally run spring.tally.toml --output report.json --quiet")]
    Run {
        /// Path to a .tally.toml config (omit to use the bundled site logs)
        config: Option<PathBuf>,

        /// Print the full report (meta, summary, skipped) instead of the result list
        #[arg(long)]
        report: bool,

        /// Write the full JSON report to a file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Suppress the human summary on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Validate a tally config without reading any source
    #[command(after_help = "\
Examples:
  tally validate spring.tally.toml")]
    Validate {
        /// Path to the .tally.toml config file
        config: PathBuf,
    },

    /// List the bundled site logs and their record shapes
    Sources,
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (",
        env!("GIT_COMMIT_HASH"),
        ")",
        "\nengine:  tally ",
        env!("CARGO_PKG_VERSION"),
    )
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { config, report, output, quiet } => run::cmd_run(config, report, output, quiet),
        Commands::Validate { config } => run::cmd_validate(config),
        Commands::Sources => run::cmd_sources(),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<tally::TallyError> for CliError {
    fn from(err: tally::TallyError) -> Self {
        let hint = match &err {
            tally::TallyError::InvalidId { .. } => {
                Some("set invalid_id = \"skip\" to drop volunteers with unparsable ids".to_string())
            }
            tally::TallyError::MissingDuration { .. } => {
                Some("check the source's duration_field (hours, time, or auto)".to_string())
            }
            tally::TallyError::RejectedVerification { .. } => Some(
                "set unrecognized_verification = \"unverified\" to treat such values as not verified"
                    .to_string(),
            ),
            _ => None,
        };
        Self { code: tally_exit_code(&err), message: err.to_string(), hint }
    }
}
