use std::path::PathBuf;

use tutorlink_core::config::normalize_base_url;
use tutorlink_core::util::normalize_text_option;

use crate::cli::{ConfigCommands, ConfigKey};
use crate::config_file::{default_config_path, CliConfig};
use crate::error::CliError;

pub fn run_config(command: ConfigCommands) -> Result<(), CliError> {
    let mut config = CliConfig::load().map_err(CliError::Config)?;

    match command {
        ConfigCommands::Set { key, value } => {
            apply_config_set(&mut config, key, &value)?;
            let path = config.save().map_err(CliError::Config)?;
            println!("Saved {} to {}", config_key_name(key), path.display());
        }
        ConfigCommands::Unset { key } => {
            apply_config_unset(&mut config, key);
            let path = config.save().map_err(CliError::Config)?;
            println!("Removed {} from {}", config_key_name(key), path.display());
        }
        ConfigCommands::Show => {
            let path = default_config_path().map_err(CliError::Config)?;
            for line in format_config_lines(&config, &path.display().to_string()) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

pub fn apply_config_set(config: &mut CliConfig, key: ConfigKey, value: &str) -> Result<(), CliError> {
    let value = normalize_text_option(Some(value.to_string()))
        .ok_or_else(|| CliError::Config(format!("{} cannot be empty", config_key_name(key))))?;

    match key {
        ConfigKey::ApiUrl => {
            config.api_base_url = Some(normalize_base_url(&value, "api-url")?);
        }
        ConfigKey::CatalogPath => {
            config.catalog_path = Some(PathBuf::from(value));
        }
    }
    Ok(())
}

pub fn apply_config_unset(config: &mut CliConfig, key: ConfigKey) {
    match key {
        ConfigKey::ApiUrl => config.api_base_url = None,
        ConfigKey::CatalogPath => config.catalog_path = None,
    }
}

pub const fn config_key_name(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::ApiUrl => "api-url",
        ConfigKey::CatalogPath => "catalog-path",
    }
}

pub fn format_config_lines(config: &CliConfig, location: &str) -> Vec<String> {
    let api_url = config.api_base_url.as_deref().unwrap_or("(not set)");
    let catalog_path = config
        .catalog_path
        .as_ref()
        .map_or_else(|| "(not set)".to_string(), |path| path.display().to_string());

    vec![
        format!("Config file:   {location}"),
        format!("api-url:       {api_url}"),
        format!("catalog-path:  {catalog_path}"),
    ]
}
