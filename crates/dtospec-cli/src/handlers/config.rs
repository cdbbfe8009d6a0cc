//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigInitArgs, ConfigShowArgs};
use crate::config::{Config, LoadedConfig};
use crate::error::{Error, Result};
use crate::output::OutputWriter;

/// Handle the config command
pub async fn handle_config(
    args: ConfigArgs,
    loaded: &LoadedConfig,
    output: &mut OutputWriter,
) -> Result<()> {
    match args.action {
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Show(show_args) => handle_config_show(show_args, loaded, output),
    }
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => Config::user_config_path()
            .ok_or_else(|| Error::config("Unable to determine user config directory"))?,
    };

    if path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ))?;
        return Ok(());
    }

    Config::default().save(&path)?;
    tracing::info!(path = %path.display(), "Wrote default configuration");
    output.success(&format!("✓ Created config at {}", path.display()))
}

/// Handle config show subcommand
fn handle_config_show(
    args: ConfigShowArgs,
    loaded: &LoadedConfig,
    output: &mut OutputWriter,
) -> Result<()> {
    match &loaded.source {
        Some(source) => output.info(&format!("Loaded from {}", source.display()))?,
        None => output.info("No config file found; showing defaults")?,
    }

    let content = match args.format {
        ConfigFormat::Toml => loaded.config.to_toml()?,
        ConfigFormat::Json => serde_json::to_string_pretty(&loaded.config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(&loaded.config)?,
    };

    output.write(&content)?;
    if !content.ends_with('\n') {
        output.writeln("")?;
    }
    Ok(())
}
