// tests/config_loading.rs

mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::fs;
use std::time::Duration;

use watchrun::config::{
    load_from_path, load_or_init, validate_config, CommandSpec, Config, FileEntry,
    DEFAULT_INTERVAL_SECS,
};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn full_config_is_parsed() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("watchrun.toml");
    fs::write(
        &path,
        r#"
interval_secs = 2
directory = "/tmp"

[[files]]
path = "a.conf"

  [[files.commands]]
  program = "echo"
  args = ["a changed"]

  [[files.commands]]
  program = "notify-send"
  args = ["watchrun", "a changed"]
  background = true

[[files]]
path = "b.conf"
"#,
    )?;

    let cfg = load_from_path(&path)?;

    assert_eq!(cfg.interval(), Duration::from_secs(2));
    assert_eq!(cfg.directory.as_deref(), Some("/tmp"));
    assert_eq!(cfg.files.len(), 2);

    let a = &cfg.files[0];
    assert_eq!(a.path, "a.conf");
    assert_eq!(a.commands.len(), 2);
    assert_eq!(a.commands[0].program, "echo");
    assert_eq!(a.commands[0].args, vec!["a changed".to_string()]);
    assert!(!a.commands[0].background);
    assert_eq!(a.commands[1].program, "notify-send");
    assert!(a.commands[1].background);

    let b = &cfg.files[1];
    assert_eq!(b.path, "b.conf");
    assert!(b.commands.is_empty(), "entry without commands is valid");

    Ok(())
}

#[test]
fn missing_and_zero_interval_normalise_to_default() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("watchrun.toml");

    fs::write(&path, "[[files]]\npath = \"a.conf\"\n")?;
    let cfg = load_from_path(&path)?;
    assert_eq!(cfg.interval(), Duration::from_secs(DEFAULT_INTERVAL_SECS));

    fs::write(&path, "interval_secs = 0\n")?;
    let cfg = load_from_path(&path)?;
    assert_eq!(cfg.interval(), Duration::from_secs(DEFAULT_INTERVAL_SECS));

    Ok(())
}

#[test]
fn load_or_init_bootstraps_a_default_config() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("watchrun.toml");
    assert!(!path.exists());

    let cfg = load_or_init(&path)?;

    assert!(path.exists(), "default config should be written on first run");
    assert!(cfg.files.is_empty());
    assert_eq!(cfg.interval(), Duration::from_secs(DEFAULT_INTERVAL_SECS));

    let written = fs::read_to_string(&path)?;
    assert!(written.contains("interval_secs"));

    Ok(())
}

#[test]
fn load_or_init_keeps_an_existing_config() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("watchrun.toml");
    fs::write(&path, "interval_secs = 7\n")?;

    let cfg = load_or_init(&path)?;

    assert_eq!(cfg.interval(), Duration::from_secs(7));
    assert_eq!(fs::read_to_string(&path)?, "interval_secs = 7\n");

    Ok(())
}

#[test]
fn invalid_toml_is_an_error() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("watchrun.toml");
    fs::write(&path, "interval_secs = [not toml")?;

    assert!(load_from_path(&path).is_err());
    assert!(load_or_init(&path).is_err());

    Ok(())
}

#[test]
fn validation_rejects_empty_path_and_program() -> TestResult {
    init_tracing();

    let empty_path = Config {
        files: vec![FileEntry {
            path: "  ".to_string(),
            commands: vec![],
        }],
        directory: None,
        interval_secs: 0,
    };
    assert!(validate_config(&empty_path).is_err());

    let empty_program = Config {
        files: vec![FileEntry {
            path: "a.conf".to_string(),
            commands: vec![CommandSpec {
                program: "".to_string(),
                args: vec![],
                background: false,
            }],
        }],
        directory: None,
        interval_secs: 0,
    };
    assert!(validate_config(&empty_program).is_err());

    let empty_files = Config::default();
    assert!(validate_config(&empty_files).is_ok(), "no files is valid");

    Ok(())
}
