//! CLI for minspread.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use minspread_core::{config, RowRule};

use commands::{run_config_path, run_named, run_scan, run_sources};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "minspread", version)]
#[command(about = "Find the row of a remote whitespace table with the smallest column spread", long_about = None)]
pub struct Cli {
    /// Write logs to stderr instead of the log file.
    #[arg(long, global = true)]
    pub log_stderr: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scan a named source from the config file or the built-in presets.
    Run {
        /// Source name (e.g. football, weather).
        name: String,
    },

    /// Scan an ad-hoc source given on the command line.
    Scan {
        /// HTTP/HTTPS URL of the table.
        #[arg(long)]
        url: String,
        /// Index of the token identifying a row.
        #[arg(long, value_name = "N")]
        key: String,
        /// The two spread column indexes, comma separated.
        #[arg(long, value_name = "A,B")]
        spread: String,
        #[command(flatten)]
        rule: RuleArgs,
    },

    /// List available sources.
    Sources,

    /// Print the path of the config file.
    ConfigPath,
}

/// Row filter flags for `scan`; all given conditions must hold.
#[derive(Debug, Clone, Default, Args)]
pub struct RuleArgs {
    /// Keep rows with exactly N tokens.
    #[arg(long = "tokens", value_name = "N")]
    pub token_count: Option<usize>,
    /// Keep rows with at least N tokens.
    #[arg(long, value_name = "N")]
    pub min_tokens: Option<usize>,
    /// Keep rows whose token at index N is all digits.
    #[arg(long, value_name = "N")]
    pub numeric_column: Option<usize>,
}

impl From<RuleArgs> for RowRule {
    fn from(args: RuleArgs) -> Self {
        RowRule {
            token_count: args.token_count,
            min_tokens: args.min_tokens,
            numeric_column: args.numeric_column,
        }
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Run { name } => run_named(&load_config()?, &name),
            CliCommand::Scan {
                url,
                key,
                spread,
                rule,
            } => run_scan(&load_config()?, &url, &key, &spread, rule.into()),
            CliCommand::Sources => {
                run_sources(&load_config()?);
                Ok(())
            }
            CliCommand::ConfigPath => run_config_path(),
        }
    }
}

fn load_config() -> Result<config::AppConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}
