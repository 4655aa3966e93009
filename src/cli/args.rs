//! Clap argument types and flag-over-config resolution.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use cline_test::config::Config;
use cline_test::models::OutputFormat;

/// Sample greeting, summation and user-lookup operations.
#[derive(Parser, Debug)]
#[command(name = "cline-test", version = cline_test::constants::VERSION)]
pub struct Cli {
    /// Output format (overrides config and CLINE_TEST_FORMAT).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Log filter directive, e.g. `debug` (overrides config and CLINE_TEST_LOG).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Config file to use instead of `.cline-test.toml` in the working directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the greeting, the sum of [1, 2, 3, 4, 5] and user 123 (default).
    Demo,

    /// Print the greeting.
    Hello,

    /// Sum a JSON list of integers, e.g. `sum '[1, 2, 3]'`.
    Sum {
        /// JSON value to sum; must be a list of integers.
        json: String,
    },

    /// Look up the simulated user with this ID.
    User {
        /// User ID; must be positive.
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Print the effective configuration as TOML.
    Config,

    /// Print version and build information.
    Version,
}

impl Cli {
    /// The command to run; `demo` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Demo)
    }

    /// Apply CLI flag overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
    }
}

/// Parse the `sum` argument as JSON; any JSON value is accepted so the
/// summation itself reports wrong container or element types.
pub fn parse_json_input(json: &str) -> Result<serde_json::Value> {
    serde_json::from_str(json).with_context(|| format!("invalid JSON input: {json}"))
}
