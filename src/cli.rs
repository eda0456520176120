//! Command-line interface for richtext-theme.
//!
//! Resolves theme files the same way the view does and prints the result,
//! which is handy for checking what a host payload will look like on screen.

use crate::debug::LogLevel;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use richtext_config::{RichTextTheme, ThemeOptions};
use std::path::PathBuf;

/// richtext-theme - inspect rich-text themes
#[derive(Parser)]
#[command(name = "richtext-theme")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log verbosity (overrides RUST_LOG)
    #[arg(long, value_enum, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the default theme as JSON
    Default,
    /// Load a JSON or YAML theme file and print the resolved theme as JSON
    Resolve {
        /// Theme file (.json, .yaml or .yml)
        path: PathBuf,

        /// Fail on invalid values instead of falling back to defaults
        #[arg(long)]
        strict: bool,
    },
}

/// Run a parsed command, returning the text to print.
pub fn run(command: &Commands) -> Result<String> {
    let theme = match command {
        Commands::Default => RichTextTheme::default_theme(),
        Commands::Resolve { path, strict } => {
            let options = ThemeOptions::load(path)
                .with_context(|| format!("failed to load theme from {}", path.display()))?;
            if *strict {
                options.resolve_strict()?
            } else {
                options.resolve()
            }
        }
    };
    Ok(serde_json::to_string_pretty(&theme)?)
}
