// src/engine/worker.rs

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::engine::reload;
use crate::exec;
use crate::watch::event::ChangeEvent;
use crate::watch::state::WatchSet;

/// Spawn the single event consumer.
///
/// Events are handled strictly in channel order, one at a time: a reload
/// or a foreground command delays everything queued behind it. Errors at
/// this layer are logged and swallowed; the loop only ends when the
/// channel closes.
pub fn spawn_worker(
    shared: Arc<Mutex<WatchSet>>,
    config_path: PathBuf,
    mut events_rx: mpsc::Receiver<ChangeEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("worker started");

        while let Some(event) = events_rx.recv().await {
            handle_event(&shared, &config_path, event).await;
        }

        info!("worker finished (event channel closed)");
    })
}

async fn handle_event(shared: &Mutex<WatchSet>, config_path: &Path, event: ChangeEvent) {
    match event {
        ChangeEvent::ConfigChanged { .. } => {
            info!("config file changed, reloading");
            match reload::reload(shared, config_path) {
                Ok(()) => info!("reload done"),
                Err(err) => error!(error = %err, "failed to reload config"),
            }
        }
        ChangeEvent::FileChanged { path, entry, .. } => {
            if entry.commands.is_empty() {
                info!(path = ?path, "change detected (no commands)");
                return;
            }
            exec::run_commands(&path, &entry.commands).await;
        }
    }
}
