//! Loxt CLI - A command-line tool for inspecting Lox source.
//!
//! This is the main entry point for the loxt CLI application.
//! It uses clap for argument parsing and dispatches to the scanner-backed
//! command handlers.

mod commands;
mod config;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{LoxtError, Result};

/// Loxt - A CLI tool for inspecting Lox source
#[derive(Parser, Debug)]
#[command(name = "loxt")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for inspecting Lox source tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LOXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LOXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the loxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source
    ///
    /// Reads from `--expr`, else FILE, else stdin. Nothing is printed if the
    /// source fails to scan.
    Tokens(TokensCommand),

    /// Scan a source and report whether it is lexically valid
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to scan (default: stdin)
    file: Option<PathBuf>,

    /// Scan this text instead of a file
    #[arg(short, long)]
    expr: Option<String>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source file to scan (default: stdin)
    file: Option<PathBuf>,

    /// Scan this text instead of a file
    #[arg(short, long)]
    expr: Option<String>,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Loads configuration, initializes logging, and runs the selected command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(cli.command, &config, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so token dumps on stdout stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LoxtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                file: args.file,
                expr: args.expr,
                format: args.format,
            };
            run_tokens(tokens_args, config, out)?;
        },
        Commands::Check(args) => {
            let check_args = CheckArgs {
                file: args.file,
                expr: args.expr,
            };
            run_check(check_args, out)?;
        },
    }
    Ok(())
}
