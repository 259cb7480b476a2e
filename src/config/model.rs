// src/config/model.rs

use std::time::Duration;

use serde::Deserialize;

/// Polling interval applied when `interval_secs` is unset or zero.
pub const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// interval_secs = 5
/// directory = "~"
///
/// [[files]]
/// path = "~/.config/example.conf"
///
///   [[files.commands]]
///   program = "echo"
///   args = ["example.conf changed"]
/// ```
///
/// All fields are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Watched file entries from `[[files]]`.
    #[serde(default)]
    pub files: Vec<FileEntry>,

    /// Base directory for relative `path` entries. May start with `~`.
    ///
    /// If `None`, relative paths resolve against the working directory.
    #[serde(default)]
    pub directory: Option<String>,

    /// Polling interval in seconds. Zero or absent means the default.
    #[serde(default)]
    pub interval_secs: u64,
}

impl Config {
    /// Effective polling interval, with zero normalised to the default.
    pub fn interval(&self) -> Duration {
        let secs = if self.interval_secs == 0 {
            DEFAULT_INTERVAL_SECS
        } else {
            self.interval_secs
        };
        Duration::from_secs(secs)
    }
}

/// A single watched file from `[[files]]`.
///
/// An entry with no commands is valid; its changes are logged and
/// otherwise ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    /// Path to watch, before `~` expansion.
    pub path: String,

    /// Commands to run, in order, whenever the file changes.
    #[serde(default)]
    pub commands: Vec<CommandSpec>,
}

/// One command from `[[files.commands]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandSpec {
    /// Executable to run.
    pub program: String,

    /// Arguments passed to the executable.
    #[serde(default)]
    pub args: Vec<String>,

    /// If true, the command is fire-and-forget: spawned with its output
    /// discarded, not waited on. Otherwise the worker blocks until it
    /// exits, with output inherited from the watchrun process.
    #[serde(default)]
    pub background: bool,
}
