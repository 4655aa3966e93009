//! cline-test — sample operations CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use cline_test::config::Config;
use cline_test::constants;
use cline_test::env::Env;
use cline_test::logging;
use cline_test::models::Report;
use cline_test::output;
use cline_test::sample;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let work_dir = std::env::current_dir().ok();
    let mut config = Config::load(cli.config.as_deref(), work_dir.as_deref(), &Env::real())
        .context("failed to load configuration")?;
    cli.apply_overrides(&mut config);

    logging::init_logging(&config.logging);

    let report = match cli.command() {
        Command::Demo => Report::demo()?,
        Command::Hello => Report::default().with_greeting(sample::hello_world()),
        Command::Sum { json } => Report::sum_of(&cli::args::parse_json_input(&json)?)?,
        Command::User { id } => Report::default().with_user(sample::get_user_info(id)?),
        Command::Config => return run_config(&config),
        Command::Version => return run_version(),
    };

    print!("{}", output::render(config.output.format, &report));
    Ok(())
}

/// Print the effective configuration.
fn run_config(config: &Config) -> Result<()> {
    let rendered = config.to_toml().context("failed to render configuration")?;
    print!("{rendered}");
    Ok(())
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}
