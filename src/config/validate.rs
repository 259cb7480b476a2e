// src/config/validate.rs

use anyhow::{anyhow, Result};

use crate::config::model::Config;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - every `[[files]]` entry has a non-empty `path`
/// - every command has a non-empty `program`
///
/// An empty `files` list is fine; the watcher then only tracks its own
/// config file. Duplicate paths are also allowed; the last entry wins.
pub fn validate_config(cfg: &Config) -> Result<()> {
    validate_entry_paths(cfg)?;
    validate_commands(cfg)?;
    Ok(())
}

fn validate_entry_paths(cfg: &Config) -> Result<()> {
    for (idx, entry) in cfg.files.iter().enumerate() {
        if entry.path.trim().is_empty() {
            return Err(anyhow!(
                "[[files]] entry #{} has an empty `path`",
                idx + 1
            ));
        }
    }
    Ok(())
}

fn validate_commands(cfg: &Config) -> Result<()> {
    for entry in cfg.files.iter() {
        for cmd in entry.commands.iter() {
            if cmd.program.trim().is_empty() {
                return Err(anyhow!(
                    "command for '{}' has an empty `program`",
                    entry.path
                ));
            }
        }
    }
    Ok(())
}
