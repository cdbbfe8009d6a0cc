//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// dtospec - declare DTO fields once, validate, serialize and document them
///
/// Loads DTO declarations from JSON, YAML or TOML files, checks them, emits their
/// JSON Schema documents and runs payloads through the validation and
/// serialization interfaces.
#[derive(Parser, Debug)]
#[command(
    name = "dtospec",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DTOSPEC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a declaration file and report declaration errors
    Check(CheckArgs),

    /// Emit the JSON Schema document for declared DTOs
    Schema(SchemaArgs),

    /// Validate a payload against a declared DTO
    Input(PayloadArgs),

    /// Validate a payload, then serialize it back to its wire form
    Output(PayloadArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the declaration file (JSON, YAML or TOML)
    #[arg(value_name = "DECLARATIONS")]
    pub declarations: PathBuf,
}

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Path to the declaration file (JSON, YAML or TOML)
    #[arg(value_name = "DECLARATIONS")]
    pub declarations: PathBuf,

    /// Only emit schemas for these DTOs (repeatable)
    #[arg(long = "dto", value_name = "NAME")]
    pub dtos: Vec<String>,
}

/// Arguments for the input and output commands
#[derive(Parser, Debug)]
pub struct PayloadArgs {
    /// Path to the declaration file (JSON, YAML or TOML)
    #[arg(value_name = "DECLARATIONS")]
    pub declarations: PathBuf,

    /// Name of the declared DTO to validate against
    #[arg(short, long, value_name = "NAME")]
    pub dto: String,

    /// Payload file (JSON, YAML or TOML), or `-` for stdin
    #[arg(value_name = "PAYLOAD", default_value = "-")]
    pub payload: String,

    /// Treat the payload as an array and validate every element concurrently
    #[arg(long)]
    pub batch: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a configuration file with default values
    Init(ConfigInitArgs),

    /// Show the effective configuration
    Show(ConfigShowArgs),
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file (defaults to the user config directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Force overwrite of an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Output format from the flag, falling back to the configured one
    pub fn output_format(&self, configured: OutputFormat) -> OutputFormat {
        self.output.unwrap_or(configured)
    }

    /// Check if colored output should be used
    pub fn use_color(&self, configured: bool) -> bool {
        !self.no_color && configured && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
