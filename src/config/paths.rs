// src/config/paths.rs

use std::path::PathBuf;

use crate::errors::{Result, WatchrunError};

/// Default config location, before `~` expansion.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/watchrun.toml";

/// Expand a leading `~` against the user's home directory.
///
/// Paths without a leading `~` pass through unchanged. Failing to
/// determine the home directory is an error the caller must propagate;
/// an unexpanded `~` path must never be watched literally.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };

    let home = dirs::home_dir()
        .ok_or_else(|| WatchrunError::HomeDirUnavailable(path.to_string()))?;

    // `PathBuf::join` would discard `home` if given an absolute path.
    Ok(home.join(rest.trim_start_matches(['/', '\\'])))
}

/// Resolved default config path (`~/.config/watchrun.toml`).
pub fn default_config_path() -> Result<PathBuf> {
    expand_home(DEFAULT_CONFIG_PATH)
}
