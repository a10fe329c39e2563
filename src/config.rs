//! Configuration file support for cache-inventory.
//!
//! Provides YAML-based configuration through `cache-inventory.config.yml`
//! files, and the merge of command-line flags over file values over built-in
//! defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::ArtifactoryClient;
use crate::application::dto::OutputFormat;
use crate::cli::Args;
use crate::inventory::policies::ComparatorStrategy;
use crate::shared::error::InventoryError;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cache-inventory.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub username: Option<String>,
    pub format: Option<String>,
    pub all_versions: Option<bool>,
    pub since_days: Option<u32>,
    pub comparator: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn invalid(message: impl Into<String>, hint: impl Into<String>) -> anyhow::Error {
    InventoryError::InvalidConfig {
        message: message.into(),
        hint: hint.into(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(url) = &config.url {
        if url.trim().is_empty() {
            return Err(invalid(
                "url must not be empty",
                "Remove the field or set it to a repository URL such as https://host/artifactory/repo",
            ));
        }
    }
    if config.since_days == Some(0) {
        return Err(invalid(
            "since_days must be at least 1",
            "Remove the field to disable the download-date filter",
        ));
    }
    if config.timeout_secs == Some(0) {
        return Err(invalid(
            "timeout_secs must be at least 1",
            format!(
                "The default timeout is {} seconds",
                ArtifactoryClient::DEFAULT_TIMEOUT_SECONDS
            ),
        ));
    }
    if let Some(comparator) = &config.comparator {
        comparator
            .parse::<ComparatorStrategy>()
            .map_err(|e| invalid(e, "Use 'precise' or 'heuristic'"))?;
    }
    if let Some(format) = &config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| invalid(e, "See --help for the formats of each ecosystem"))?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective run settings after merging flags, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub format: OutputFormat,
    pub all_versions: bool,
    pub since_days: Option<u32>,
    pub comparator: ComparatorStrategy,
    pub timeout: Duration,
}

impl Settings {
    /// Merges command-line flags over the (already validated) config file
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(raw)) => raw
                .parse()
                .map_err(|e: String| invalid(e, "See --help for the formats of each ecosystem"))?,
            (None, None) => OutputFormat::Simple,
        };
        let comparator = match (args.comparator, config.comparator.as_deref()) {
            (Some(comparator), _) => comparator,
            (None, Some(raw)) => raw
                .parse()
                .map_err(|e: String| invalid(e, "Use 'precise' or 'heuristic'"))?,
            (None, None) => ComparatorStrategy::default(),
        };
        let timeout_secs = args
            .timeout_secs
            .or(config.timeout_secs)
            .unwrap_or(ArtifactoryClient::DEFAULT_TIMEOUT_SECONDS);

        Ok(Self {
            url: args.url.clone().or(config.url),
            username: args.username.clone().or(config.username),
            password: args.password_or_env(),
            format,
            all_versions: args.all_versions || config.all_versions.unwrap_or(false),
            since_days: args.since_days.or(config.since_days),
            comparator,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Loads the config named by `--config`, else the one in the working directory
pub fn load_for(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine working directory")?;
            discover_config(&cwd)
        }
    }
}
