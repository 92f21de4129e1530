use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_ENV, DEFAULT_BUS_NAME, DEFAULT_HELPER_PREFIX, DEFAULT_INTERFACE, DEFAULT_OBJECT_PATH,
};
use crate::paths::expand_tilde;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub daemon: DaemonConfig,
    pub helpers: HelperConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    pub bus_name: String,
    pub object_path: String,
    pub interface: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    pub bus_prefix: String,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            bus_name: DEFAULT_BUS_NAME.to_string(),
            object_path: DEFAULT_OBJECT_PATH.to_string(),
            interface: DEFAULT_INTERFACE.to_string(),
        }
    }
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            bus_prefix: DEFAULT_HELPER_PREFIX.to_string(),
        }
    }
}

impl HelperConfig {
    /// Well-known bus name of a helper application, e.g. `org.gnome.GPaste.Settings`.
    pub fn bus_name(&self, app: &str) -> String {
        format!("{}.{}", self.bus_prefix, app)
    }

    /// Object path of a helper application, e.g. `/org/gnome/GPaste/Settings`.
    pub fn object_path(&self, app: &str) -> String {
        format!("/{}/{}", self.bus_prefix.replace('.', "/"), app)
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Ok(expand_tilde(&path));
        }
    }
    let proj = directories::ProjectDirs::from("", "", "gpaste-cli")
        .context("could not determine config directory")?;
    Ok(proj.config_dir().join("config.toml"))
}

/// Loads the config file if there is one. A missing file means defaults.
pub fn load_default_config() -> Result<Config> {
    let path = default_config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    load_config(&path)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).context("failed to parse config TOML")?;

    for (key, value) in [
        ("daemon.bus_name", &config.daemon.bus_name),
        ("daemon.object_path", &config.daemon.object_path),
        ("daemon.interface", &config.daemon.interface),
        ("helpers.bus_prefix", &config.helpers.bus_prefix),
    ] {
        if value.trim().is_empty() {
            bail!("{} must not be empty", key);
        }
    }

    if !config.daemon.object_path.starts_with('/') {
        bail!(
            "daemon.object_path must start with '/' (got {:?})",
            config.daemon.object_path
        );
    }

    Ok(config)
}
