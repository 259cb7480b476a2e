// src/watch/state.rs

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, SystemTime};

use tracing::debug;

use crate::config::model::{Config, FileEntry};
use crate::config::paths::expand_home;
use crate::errors::Result;

/// Stat a path down to the two values the change predicate cares about.
pub(crate) fn stat(path: &Path) -> io::Result<(SystemTime, u64)> {
    let meta = std::fs::metadata(path)?;
    Ok((meta.modified()?, meta.len()))
}

/// Last-observed metadata for one watched path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileState {
    pub path: PathBuf,
    pub modified: SystemTime,
    pub size: u64,
}

impl FileState {
    /// Stat `path` and record its current (mtime, size).
    pub fn probe(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let (modified, size) = stat(&path)?;
        Ok(Self {
            path,
            modified,
            size,
        })
    }

    /// The sole change predicate: a file whose (mtime, size) both match
    /// the last-observed values counts as unchanged.
    pub fn matches(&self, modified: SystemTime, size: u64) -> bool {
        self.modified == modified && self.size == size
    }

    /// Record new (mtime, size) in place.
    pub fn update(&mut self, modified: SystemTime, size: u64) {
        self.modified = modified;
        self.size = size;
    }
}

/// The watch state store: everything the poller compares against and the
/// reloader replaces.
///
/// Invariant: `states` and `entries` always share the same key set,
/// except while a reload swaps both wholesale. The config file's own
/// state never appears here: it has no commands and must not be treated
/// as a normal watched file.
#[derive(Debug)]
pub struct WatchSet {
    states: HashMap<PathBuf, FileState>,
    entries: HashMap<PathBuf, FileEntry>,
    interval: Duration,
}

impl WatchSet {
    /// Build a watch set from a loaded config.
    ///
    /// Configured paths that cannot be stated (missing, inaccessible) are
    /// skipped rather than reported: they are simply not watched until a
    /// later reload finds them. Home-expansion failures do propagate.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let base = match cfg.directory.as_deref() {
            Some(dir) => expand_home(dir)?,
            None => PathBuf::from("."),
        };

        let mut set = Self {
            states: HashMap::new(),
            entries: HashMap::new(),
            interval: cfg.interval(),
        };

        for entry in cfg.files.iter() {
            let path = resolve_entry_path(&base, &entry.path)?;

            let state = match FileState::probe(&path) {
                Ok(state) => state,
                Err(err) => {
                    debug!(path = ?path, error = %err, "skipping unwatchable path");
                    continue;
                }
            };

            set.states.insert(path.clone(), state);
            set.entries.insert(path, entry.clone());
        }

        Ok(set)
    }

    /// Effective polling interval for this set.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of tracked paths.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn is_watched(&self, path: &Path) -> bool {
        self.states.contains_key(path)
    }

    pub fn state(&self, path: &Path) -> Option<&FileState> {
        self.states.get(path)
    }

    pub fn entry(&self, path: &Path) -> Option<&FileEntry> {
        self.entries.get(path)
    }

    /// Iterate over tracked paths, pairing each mutable state with its
    /// configured entry.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&FileEntry, &mut FileState)> {
        let entries = &self.entries;
        self.states
            .iter_mut()
            .filter_map(move |(path, state)| entries.get(path).map(|entry| (entry, state)))
    }

    /// Replace this set's maps and interval with a freshly built one.
    ///
    /// Callers take the shared lock around this, which makes the swap
    /// atomic with respect to any in-flight poll pass.
    pub fn replace_with(&mut self, fresh: WatchSet) {
        *self = fresh;
    }
}

/// Lock the shared watch set, recovering the guard if a previous holder
/// panicked.
pub fn lock_set(set: &Mutex<WatchSet>) -> MutexGuard<'_, WatchSet> {
    set.lock().unwrap_or_else(PoisonError::into_inner)
}

fn resolve_entry_path(base: &Path, raw: &str) -> Result<PathBuf> {
    let expanded = expand_home(raw)?;
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(base.join(expanded))
    }
}
