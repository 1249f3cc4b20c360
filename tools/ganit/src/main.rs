//! Ganit - localized calculator and unit converter for the terminal
//!
//! One-shot evaluation and conversion, plus an interactive keypad REPL driven
//! by the same sessions a graphical front-end would use.

mod commands;
mod repl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ganit_session::{GanitConfig, Language};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "ganit")]
#[command(about = "Ganit - localized calculator and unit converter")]
#[command(long_about = "Ganit - localized calculator and unit converter

Commands:
  eval        Evaluate a keypad expression
  convert     Convert a value between two units
  units       List conversion categories and units
  repl        Interactive keypad

Examples:
  ganit eval '200+10%'                  # 200.1
  ganit eval '√(2)×π' --lang hi         # native digits
  ganit convert 100 C F                 # 212
  ganit units data                      # B KB MB GB
  ganit repl                            # keypad session")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (toml, yaml or json); default: config/ganit.{toml,yaml}
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Display language: en od hi bn mr gu te ta kn ml pa
    #[arg(short, long, global = true)]
    lang: Option<Language>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a keypad expression
    Eval {
        /// Expression, e.g. '12×(3+4)' or 'sin(π÷2)'
        expression: String,

        /// Trigonometric functions take degrees
        #[arg(short, long)]
        degrees: bool,
    },

    /// Convert a value; the category is inferred from the units
    Convert {
        /// Value to convert (native digits accepted)
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Source unit symbol (m km cm mm ft in kg g mg lb oz C F K B KB MB GB)
        from: String,

        /// Target unit symbol
        to: String,
    },

    /// List categories, or the units of one category
    Units {
        /// length, weight, temperature or data
        category: Option<String>,
    },

    /// Interactive keypad session
    Repl,
}

fn load_config(cli: &Cli) -> Result<GanitConfig> {
    let mut config = match &cli.config {
        Some(path) => GanitConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GanitConfig::load().context("Failed to load configuration")?,
    };

    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    if cli.verbose {
        config.log.level = "debug".to_string();
    }
    if cli.no_color {
        config.log.ansi = false;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(&cli)?;

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = ganit_common::init_logging(&config.log).context("Failed to initialize logging")?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Eval {
            expression,
            degrees,
        } => commands::eval(&config, &expression, degrees),
        Commands::Convert { value, from, to } => commands::convert(&config, &value, &from, &to),
        Commands::Units { category } => commands::units(&config, category.as_deref()),
        Commands::Repl => repl::run(&config),
    }
}
