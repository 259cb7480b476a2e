// tests/watch_state.rs

mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::fs;
use std::time::Duration;

use watchrun::config::{CommandSpec, Config, FileEntry};
use watchrun::watch::{FileState, WatchSet};

type TestResult = Result<(), Box<dyn Error>>;

fn entry(path: &str) -> FileEntry {
    FileEntry {
        path: path.to_string(),
        commands: vec![CommandSpec {
            program: "echo".to_string(),
            args: vec!["changed".to_string()],
            background: false,
        }],
    }
}

#[test]
fn initial_state_matches_the_file_on_disk() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let file = dir.path().join("watched.conf");
    fs::write(&file, "contents")?;

    let cfg = Config {
        files: vec![entry(file.to_str().ok_or("non-utf8 temp path")?)],
        directory: None,
        interval_secs: 3,
    };

    let set = WatchSet::from_config(&cfg)?;

    assert_eq!(set.len(), 1);
    assert_eq!(set.interval(), Duration::from_secs(3));
    assert!(set.is_watched(&file));

    let expected = FileState::probe(&file)?;
    let recorded = set.state(&file).ok_or("state missing")?;
    assert_eq!(recorded, &expected);
    assert_eq!(recorded.size, "contents".len() as u64);

    // Both maps carry the same key set.
    let tracked = set.entry(&file).ok_or("entry missing")?;
    assert_eq!(tracked.commands.len(), 1);

    Ok(())
}

#[test]
fn missing_files_are_skipped_not_fatal() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let present = dir.path().join("present.conf");
    let absent = dir.path().join("absent.conf");
    fs::write(&present, "x")?;

    let cfg = Config {
        files: vec![
            entry(present.to_str().ok_or("non-utf8 temp path")?),
            entry(absent.to_str().ok_or("non-utf8 temp path")?),
        ],
        directory: None,
        interval_secs: 1,
    };

    let set = WatchSet::from_config(&cfg)?;

    assert_eq!(set.len(), 1);
    assert!(set.is_watched(&present));
    assert!(!set.is_watched(&absent));
    assert!(set.entry(&absent).is_none());

    Ok(())
}

#[test]
fn relative_paths_resolve_against_the_configured_directory() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let file = dir.path().join("rel.conf");
    fs::write(&file, "x")?;

    let cfg = Config {
        files: vec![entry("rel.conf")],
        directory: Some(dir.path().to_str().ok_or("non-utf8 temp path")?.to_string()),
        interval_secs: 1,
    };

    let set = WatchSet::from_config(&cfg)?;

    assert!(set.is_watched(&file));

    Ok(())
}

#[test]
fn replace_with_swaps_maps_and_interval() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let old_file = dir.path().join("old.conf");
    let new_file = dir.path().join("new.conf");
    fs::write(&old_file, "old")?;
    fs::write(&new_file, "new")?;

    let old_cfg = Config {
        files: vec![entry(old_file.to_str().ok_or("non-utf8 temp path")?)],
        directory: None,
        interval_secs: 2,
    };
    let new_cfg = Config {
        files: vec![entry(new_file.to_str().ok_or("non-utf8 temp path")?)],
        directory: None,
        interval_secs: 9,
    };

    let mut set = WatchSet::from_config(&old_cfg)?;
    let fresh = WatchSet::from_config(&new_cfg)?;
    set.replace_with(fresh);

    assert!(!set.is_watched(&old_file), "old path must no longer be tracked");
    assert!(set.is_watched(&new_file));
    assert_eq!(set.interval(), Duration::from_secs(9));

    Ok(())
}
