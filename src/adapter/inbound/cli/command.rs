//! Command-line interface definitions.
//!
//! Defines the CLI structure for the namenest application using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Baby name suggestions from hosted language models
#[derive(Parser, Debug)]
#[command(name = "namenest")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (defaults to ./namenest.toml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the namenest CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate name suggestions
    Generate(GenerateArgs),

    /// List accepted genders, styles and origins
    Vocabulary,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `namenest generate`.
///
/// Values are passed through as text and validated by the request parser,
/// so the CLI reports the same errors as any other caller.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// boy, girl, neutral or surprise
    #[arg(short, long, default_value = "surprise")]
    pub gender: String,

    /// classic, modern, unique, nature-inspired or vintage
    #[arg(short, long, default_value = "classic")]
    pub style: String,

    /// A cultural origin, or "any"
    #[arg(short, long, default_value = "any")]
    pub origin: String,

    /// How many names to ask for (1-10)
    #[arg(short = 'n', long)]
    pub count: Option<String>,

    /// Names to leave out (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,
}

/// Subcommands for `namenest config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file for correctness.
    Validate,
}
