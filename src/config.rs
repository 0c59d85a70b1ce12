use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use dateonly_calendar::DATE_ONLY;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "dateonly.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateonlyConfig {
    /// How `<DATE>` arguments are read.
    #[serde(default)]
    pub input: InputConfig,

    /// How dates are printed and encoded.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    #[serde(default = "default_layout")]
    pub layout: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_layout")]
    pub layout: String,
    /// Default for `encode --as` / `decode --as`.
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            encoding: default_encoding(),
        }
    }
}

fn default_layout() -> String {
    DATE_ONLY.to_string()
}
fn default_encoding() -> String {
    "text".to_string()
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, `dateonly.toml` in the
/// working directory is read if present, and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<DateonlyConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Path::new(DEFAULT_CONFIG_PATH),
        None => {
            debug!("no config file, using defaults");
            return Ok(DateonlyConfig::default());
        }
    };

    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: DateonlyConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
