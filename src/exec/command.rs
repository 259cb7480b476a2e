// src/exec/command.rs

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{error, info, warn};

use crate::config::model::CommandSpec;

/// Run every command configured for a changed file, strictly in order.
///
/// A background command is spawned with its output discarded and not
/// waited on; its spawn completing is all that orders it against the
/// next command. A foreground command inherits watchrun's stdout/stderr
/// and blocks until it exits. Failures of either kind are logged and
/// swallowed; a broken command never stops the worker.
pub async fn run_commands(path: &Path, commands: &[CommandSpec]) {
    for spec in commands {
        if spec.background {
            spawn_background(path, spec);
        } else {
            run_foreground(path, spec).await;
        }
    }
}

fn spawn_background(path: &Path, spec: &CommandSpec) {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match cmd.spawn() {
        Ok(child) => {
            info!(
                program = %spec.program,
                pid = ?child.id(),
                changed = ?path,
                "started background command"
            );
            // No kill_on_drop: the child outlives this handle.
            drop(child);
        }
        Err(err) => {
            error!(
                program = %spec.program,
                error = %err,
                "failed to start background command"
            );
        }
    }
}

async fn run_foreground(path: &Path, spec: &CommandSpec) {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    match cmd.status().await {
        Ok(status) if status.success() => {
            info!(program = %spec.program, changed = ?path, "command finished");
        }
        Ok(status) => {
            warn!(
                program = %spec.program,
                exit_code = status.code().unwrap_or(-1),
                "command exited with failure"
            );
        }
        Err(err) => {
            error!(program = %spec.program, error = %err, "failed to run command");
        }
    }
}
