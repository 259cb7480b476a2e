// src/engine/reload.rs

use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;

use crate::config;
use crate::watch::state::{lock_set, WatchSet};

/// Re-read the config (bootstrapping it if it vanished) and swap a
/// freshly built watch set into place.
///
/// The new set is built before the lock is taken, so the swap itself is
/// atomic with respect to any poll pass. On any failure the previous
/// maps and interval stay entirely untouched. The config file's own
/// state is owned by the poll loop and deliberately not rebuilt here;
/// it was already brought up to date by the tick that produced the
/// reload event.
pub fn reload(shared: &Mutex<WatchSet>, config_path: &Path) -> Result<()> {
    let cfg = config::load_or_init(config_path)
        .with_context(|| format!("reloading config from {:?}", config_path))?;

    let fresh = WatchSet::from_config(&cfg)?;
    info!(
        watched = fresh.len(),
        interval = ?fresh.interval(),
        "watch set rebuilt"
    );

    lock_set(shared).replace_with(fresh);
    Ok(())
}
