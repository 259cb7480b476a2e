// src/watch/event.rs

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::model::FileEntry;

/// Capacity of the poller → worker channel.
///
/// The channel is bounded on purpose: a full channel blocks the poll
/// loop (backpressure) instead of dropping events.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// A detected divergence between a path's current and last-recorded
/// (mtime, size), produced by the poller and consumed exactly once by
/// the worker.
///
/// The config file gets its own variant so that a watched entry with an
/// empty command list stays distinguishable from a reload trigger.
#[derive(Debug, Clone)]
pub enum ChangeEvent {
    /// A watched file changed; `entry` carries the commands to run.
    FileChanged {
        path: PathBuf,
        entry: FileEntry,
        at: SystemTime,
    },

    /// The config file itself changed; the worker reloads.
    ConfigChanged { path: PathBuf, at: SystemTime },
}

impl ChangeEvent {
    /// The path whose change this event reports.
    pub fn path(&self) -> &Path {
        match self {
            ChangeEvent::FileChanged { path, .. } => path,
            ChangeEvent::ConfigChanged { path, .. } => path,
        }
    }

    /// Detection timestamp.
    pub fn detected_at(&self) -> SystemTime {
        match self {
            ChangeEvent::FileChanged { at, .. } => *at,
            ChangeEvent::ConfigChanged { at, .. } => *at,
        }
    }
}
