// src/exec/mod.rs

//! Process execution layer.
//!
//! Runs the commands configured for a changed file using
//! `tokio::process::Command`: foreground commands block the worker until
//! they exit, background commands are spawned and forgotten.

pub mod command;

pub use command::run_commands;
