//! Config command implementation.
//!
//! View configuration settings. The config file lives at
//! ~/.config/tick/config.toml; `TICK_CONFIG` overrides the path.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Minimum token length to apply masking (show first and last N characters).
const TOKEN_MASK_MIN_LENGTH: usize = 8;

/// Number of characters to show at start/end of a masked token.
const TOKEN_MASK_VISIBLE_CHARS: usize = 4;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// API access token (optional, can use TICKTICK_ACCESS_TOKEN instead).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            token: None,
            output: OutputConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config file path.
/// Uses XDG-style paths: ~/.config/tick/config.toml on all platforms.
pub fn get_config_path() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("TICK_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("tick").join("config.toml"));
    }

    BaseDirs::new()
        .map(|dirs| {
            dirs.home_dir()
                .join(".config")
                .join("tick")
                .join("config.toml")
        })
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Loads the configuration from disk.
///
/// A missing file is not an error; it yields the defaults.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    Ok(config)
}

/// Masks a token for display, keeping only the first and last characters.
fn mask_token(token: &str) -> String {
    if token.len() >= TOKEN_MASK_MIN_LENGTH {
        format!(
            "{}...{}",
            &token[..TOKEN_MASK_VISIBLE_CHARS],
            &token[token.len() - TOKEN_MASK_VISIBLE_CHARS..]
        )
    } else {
        "****".to_string()
    }
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;

    if ctx.quiet {
        return Ok(());
    }

    println!("version = {}", config.version);
    match &config.token {
        Some(token) => println!("token = \"{}\"", mask_token(token)),
        None => println!("token = (not set)"),
    }
    if let Some(color) = config.output.color {
        println!("output.color = {color}");
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;
    if !ctx.quiet {
        println!("{}", path.display());
    }
    Ok(())
}
