// src/errors.rs

//! Crate-wide error types.
//!
//! These cover the startup-fatal failures; everything past startup is
//! reported through `tracing` and absorbed where it happens.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchrunError {
    #[error("could not determine home directory while expanding {0:?}")]
    HomeDirUnavailable(String),

    #[error("cannot stat config file {path:?}")]
    ConfigStat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, WatchrunError>;
