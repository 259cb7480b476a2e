// src/watch/poller.rs

use std::path::Path;
use std::time::SystemTime;

use tracing::trace;

use crate::watch::event::ChangeEvent;
use crate::watch::state::{stat, FileState, WatchSet};

/// One normal-file pass: stat every tracked path, update diverging states
/// in place and collect an event per divergence.
///
/// Stat failures here are treated as "no change this tick"; the path
/// stays tracked with its last-known state.
pub fn scan_watched(set: &mut WatchSet, now: SystemTime) -> Vec<ChangeEvent> {
    let mut events = Vec::new();

    for (entry, state) in set.iter_mut() {
        let (modified, size) = match stat(&state.path) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                trace!(path = ?state.path, error = %err, "stat failed during poll, assuming unchanged");
                continue;
            }
        };

        if state.matches(modified, size) {
            continue;
        }

        state.update(modified, size);
        events.push(ChangeEvent::FileChanged {
            path: state.path.clone(),
            entry: entry.clone(),
            at: now,
        });
    }

    events
}

/// The config-file half of a pass, against the dedicated config state.
pub fn scan_config(
    config_path: &Path,
    state: &mut FileState,
    now: SystemTime,
) -> Option<ChangeEvent> {
    let (modified, size) = match stat(config_path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            trace!(path = ?config_path, error = %err, "stat failed for config file, assuming unchanged");
            return None;
        }
    };

    if state.matches(modified, size) {
        return None;
    }

    state.update(modified, size);
    Some(ChangeEvent::ConfigChanged {
        path: config_path.to_path_buf(),
        at: now,
    })
}
