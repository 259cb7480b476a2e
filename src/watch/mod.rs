// src/watch/mod.rs

//! Watch state and poll-based change detection.
//!
//! This module is responsible for:
//! - Tracking last-observed (mtime, size) per watched path (`state`).
//! - Detecting divergence once per tick and turning it into
//!   [`ChangeEvent`]s (`poller`).
//! - The [`FileWatcher`] aggregate that owns the state, the event
//!   channel and the poll loop (`watcher`).
//!
//! It does **not** run commands or reload config; it only turns
//! filesystem changes into events for the worker.

pub mod event;
pub mod poller;
pub mod state;
pub mod watcher;

pub use event::{ChangeEvent, EVENT_CHANNEL_CAPACITY};
pub use state::{lock_set, FileState, WatchSet};
pub use watcher::FileWatcher;
