// src/watch/watcher.rs

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use anyhow::{anyhow, Context, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::model::Config;
use crate::engine::worker::spawn_worker;
use crate::errors::WatchrunError;
use crate::watch::event::{ChangeEvent, EVENT_CHANNEL_CAPACITY};
use crate::watch::poller;
use crate::watch::state::{lock_set, FileState, WatchSet};

/// Aggregate root for the watching process: owns the shared watch set,
/// the config file's own state and the poller → worker channel.
///
/// Exactly one live instance per process. The shared watch set is
/// mutated in place by the poll loop and wholesale-replaced by reloads
/// on the worker task; both go through the same lock. The config file's
/// state is confined to the poll loop; reloads never rebuild it.
pub struct FileWatcher {
    shared: Arc<Mutex<WatchSet>>,
    config_path: PathBuf,
    config_state: FileState,
    events_tx: mpsc::Sender<ChangeEvent>,
    events_rx: Option<mpsc::Receiver<ChangeEvent>>,
}

impl FileWatcher {
    /// Build a watcher from a loaded config.
    ///
    /// Configured files that cannot be stated are skipped, but the config
    /// file itself must be statable or construction fails: the watcher
    /// cannot hot-reload without a baseline for its own config.
    pub fn new(config_path: impl Into<PathBuf>, cfg: &Config) -> Result<Self> {
        let config_path = config_path.into();

        let config_state =
            FileState::probe(&config_path).map_err(|source| WatchrunError::ConfigStat {
                path: config_path.clone(),
                source,
            })?;

        let set = WatchSet::from_config(cfg)?;
        info!(
            watched = set.len(),
            interval = ?set.interval(),
            "watch set built"
        );

        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            shared: Arc::new(Mutex::new(set)),
            config_path,
            config_state,
            events_tx,
            events_rx: Some(events_rx),
        })
    }

    /// Shared handle to the watch state, as used by the worker's reloads.
    pub fn watch_set(&self) -> Arc<Mutex<WatchSet>> {
        Arc::clone(&self.shared)
    }

    /// Resolved path of the config file being watched for reloads.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Spawn the event consumer. Returns immediately; may only be called
    /// once per watcher.
    pub fn spawn_worker(&mut self) -> Result<JoinHandle<()>> {
        let events_rx = self
            .events_rx
            .take()
            .ok_or_else(|| anyhow!("worker already started"))?;

        Ok(spawn_worker(
            Arc::clone(&self.shared),
            self.config_path.clone(),
            events_rx,
        ))
    }

    /// Run the polling loop. Never returns in normal operation.
    ///
    /// The interval is re-read from the shared set on every iteration so
    /// a reload's new interval takes effect on the next tick.
    pub async fn run(mut self) -> Result<()> {
        loop {
            let interval = lock_set(&self.shared).interval();
            tokio::time::sleep(interval).await;
            self.poll_once().await?;
        }
    }

    /// One full poll pass: watched files first, then the config file,
    /// then deliver everything in order. An awaited `send` on a full
    /// channel is the backpressure point: a slow worker stalls the poll
    /// loop rather than losing events.
    async fn poll_once(&mut self) -> Result<()> {
        let now = SystemTime::now();

        let mut events = {
            let mut set = lock_set(&self.shared);
            poller::scan_watched(&mut set, now)
        };

        if let Some(event) =
            poller::scan_config(&self.config_path, &mut self.config_state, now)
        {
            events.push(event);
        }

        for event in events {
            debug!(path = ?event.path(), "change detected");
            self.events_tx
                .send(event)
                .await
                .context("event channel closed while delivering change event")?;
        }

        Ok(())
    }
}
