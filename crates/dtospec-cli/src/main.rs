//! dtospec CLI - Command-line interface for declarative DTO fields
//!
//! This is the main entry point for the dtospec CLI application, providing
//! commands for checking declaration files, emitting schema documents and
//! running payloads through the validation and serialization interfaces.

mod cli;
mod config;
mod declarations;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::{Config, LoadedConfig};
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Configuration drives color and logging defaults, so it loads first
    let loaded = match Config::load_with_file(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}", error::format_error(&e, !cli.no_color));
            process::exit(e.exit_code());
        }
    };

    let use_color = cli.use_color(loaded.config.output.color);
    control::set_override(use_color);

    if let Err(e) = init_logging(&cli, &loaded.config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli, loaded, use_color).await {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(exit_code = e.exit_code(), error = %e, "Command failed");
            eprintln!("{}", error::format_error(&e, use_color));

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, loaded), fields(command = ?cli.command))]
async fn run(cli: Cli, loaded: LoadedConfig, use_color: bool) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = cli.output_format(loaded.config.output.format);
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        config = ?loaded.source,
        "Executing command"
    );

    match cli.command {
        Commands::Check(args) => handlers::handle_check(args, &mut output).await,
        Commands::Schema(args) => handlers::handle_schema(args, &mut output).await,
        Commands::Input(args) => handlers::handle_input(args, &mut output).await,
        Commands::Output(args) => handlers::handle_output(args, &mut output).await,
        Commands::Config(args) => handlers::handle_config(args, &loaded, &mut output).await,
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config = LoggingConfig::from_settings(cli.verbosity_level(), &config.logging);

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["dtospec", "-vv", "check", "dtos.yaml"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["dtospec", "--quiet", "schema", "dtos.yaml"]);
        assert_eq!(cli.verbosity_level(), 0);
        assert!(matches!(cli.command, Commands::Schema(_)));
    }
}
