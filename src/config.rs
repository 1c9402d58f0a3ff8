use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{JsrKitError, Result};

/// File name looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "jsrkit.toml";

/// Represents the complete configuration for jsr-kit.
///
/// Both tools share one file; each reads only its own table.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub bump: BumpConfig,

    #[serde(default)]
    pub scaffold: ScaffoldConfig,
}

fn default_manifest() -> PathBuf {
    PathBuf::from("deno.json")
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_true() -> bool {
    true
}

fn default_license() -> String {
    "ISC".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

/// Settings for `jsr-bump`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BumpConfig {
    /// Manifest path, relative to the working directory
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Tag name template; `{version}` is replaced by the new version
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    /// Commit and tag when a `.git` directory is present
    #[serde(default = "default_true")]
    pub git: bool,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            manifest: default_manifest(),
            tag_pattern: default_tag_pattern(),
            git: true,
        }
    }
}

/// Settings for `jsr-new`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScaffoldConfig {
    #[serde(default = "default_license")]
    pub license: String,

    /// Branch whose pushes trigger the publish workflow
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        ScaffoldConfig {
            license: default_license(),
            branch: default_branch(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `jsrkit.toml` in current directory
/// 3. `.jsrkit.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if !user_path.exists() {
            return Ok(Config::default());
        }
        user_path
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| JsrKitError::io(&path, e))?;
    parse_config(&config_str)
        .map_err(|e| JsrKitError::config(format!("{}: {}", path.display(), e)))
}

/// Parses configuration text, filling absent keys with defaults.
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}
