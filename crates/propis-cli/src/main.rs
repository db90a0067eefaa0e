//! propis CLI entry point.
//!
//! Command-line access to the amount speller:
//! - `propis spell` - Spell out currency amounts
//! - `propis words` - Spell out a bare integer
//! - `propis format` - Clean up and group a numeric string
//! - `propis date` - Render an ISO date as a document date

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_date, run_format, run_spell, run_words, DateArgs, FormatArgs, SpellArgs, WordsArgs,
};
use tracing_subscriber::EnvFilter;

/// Spell out amounts in Russian.
#[derive(Debug, Parser)]
#[command(name = "propis")]
#[command(about = "Spell out currency amounts in Russian", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Spell out one or more currency amounts
    Spell(SpellArgs),
    /// Spell out a non-negative integer without a currency
    Words(WordsArgs),
    /// Sanitize a numeric string and group its digits
    Format(FormatArgs),
    /// Render a YYYY-MM-DD date in Russian document style
    Date(DateArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Spell(args) => run_spell(args),
        Commands::Words(args) => run_words(args),
        Commands::Format(args) => run_format(args),
        Commands::Date(args) => run_date(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
