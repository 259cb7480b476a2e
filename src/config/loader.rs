// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::model::Config;
use crate::config::paths;
use crate::config::validate::validate_config;

/// Configuration written on first run when no config file exists yet.
const DEFAULT_CONFIG: &str = include_str!("default.toml");

/// Load a configuration file from a given path and return the raw
/// [`Config`].
///
/// This only performs TOML deserialization; it does **not** bootstrap a
/// missing file or perform semantic validation. Use [`load_or_init`] for
/// that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {:?}", path))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML config from {:?}", path))?;

    Ok(config)
}

/// Load the config at `path`, writing the embedded default configuration
/// first if the file does not exist yet.
///
/// This is the entry point used both at startup and on every reload, so
/// deleting the config file while watchrun is running recreates it with
/// defaults on the next reload.
pub fn load_or_init(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !path.exists() {
        write_default_config(path)
            .with_context(|| format!("creating default config at {:?}", path))?;
        info!(path = ?path, "created default config");
    }

    let config = load_from_path(path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load-or-bootstrap from the default location (`~/.config/watchrun.toml`).
pub fn load_default() -> Result<Config> {
    let path = paths::default_config_path()?;
    load_or_init(path)
}

fn write_default_config(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}
