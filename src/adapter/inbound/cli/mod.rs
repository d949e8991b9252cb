//! CLI module graph and dispatch.

pub mod command;
pub mod config;
pub mod generate;
pub mod output;
pub mod vocabulary;

use std::path::{Path, PathBuf};

use self::command::{Cli, ColorChoice, Commands, ConfigCommand};
use self::output::OutputConfig;
use crate::domain::vocabulary::Vocabulary;
use crate::error::Result;
use crate::infrastructure::config::{Config, DEFAULT_CONFIG_PATH};

/// Apply the global flags that shape terminal output.
pub fn configure_output(cli: &Cli) {
    match cli.color {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
}

/// Log level implied by `-q`/`-v`, if any.
#[must_use]
pub fn log_level_override(cli: &Cli) -> Option<&'static str> {
    match (cli.quiet, cli.verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("debug"),
        (false, _) => Some("trace"),
    }
}

/// The file the configuration was read from, if any.
fn config_source(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(|| {
        let default = Path::new(DEFAULT_CONFIG_PATH);
        default.is_file().then(|| default.to_path_buf())
    })
}

/// Load configuration, initialize logging, and run the selected command.
pub async fn run(cli: &Cli) -> Result<()> {
    let source = config_source(cli);
    let mut config = Config::resolve(source.as_deref())?;
    if let Some(level) = log_level_override(cli) {
        config.logging.level = level.to_string();
    }
    config.init_logging();

    match &cli.command {
        Commands::Generate(args) => generate::execute(args, &config).await,
        Commands::Vocabulary => vocabulary::execute(&Vocabulary::standard()),
        Commands::Config(ConfigCommand::Show) => config::execute_show(&config),
        Commands::Config(ConfigCommand::Validate) => {
            config::execute_validate(&config, source.as_deref())
        }
    }
}
