// src/config/mod.rs

//! Configuration loading for watchrun.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk, bootstrapping a default one on first
//!   run (`loader.rs`).
//! - Resolve `~`-prefixed paths and the default config location
//!   (`paths.rs`).
//! - Validate basic invariants (`validate.rs`).

pub mod loader;
pub mod model;
pub mod paths;
pub mod validate;

pub use loader::{load_default, load_from_path, load_or_init};
pub use model::{CommandSpec, Config, FileEntry, DEFAULT_INTERVAL_SECS};
pub use paths::{default_config_path, expand_home};
pub use validate::validate_config;
