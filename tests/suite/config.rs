//! Config file to workload settings

use profdemo_config::{ConfigError, ProfdemoConfig, Settings};
use profdemo_core::{SystemBench, run_with};
use profdemo_types::WorkloadArg;

use crate::common::{CountingBench, profdemo_command, write_config};

#[test]
fn configured_size_reaches_the_workload() {
    let (_dir, path) = write_config("[workload]\nsize = 12\nsleepy_seconds = 0.5\n");
    let config = ProfdemoConfig::load_from(&path).unwrap();
    let settings = Settings::resolve(config.as_ref(), None);

    let mut bench = CountingBench::default();
    run_with(&mut bench, &settings).unwrap();

    assert_eq!(bench.randmatmul, vec![12]);
    assert_eq!(bench.sleepy, vec![0.5]);
    assert_eq!(bench.supersleepy, vec![2.0]);
    assert_eq!(bench.lines, vec!["Done"]);
}

#[test]
fn text_size_in_config_is_a_silent_no_op() {
    let (_dir, path) = write_config("[workload]\nsize = \"x\"\n");
    let config = ProfdemoConfig::load_from(&path).unwrap();
    let settings = Settings::resolve(config.as_ref(), None);
    assert_eq!(settings.size, WorkloadArg::Text("x".to_string()));

    let mut bench = SystemBench::new(Vec::new());
    run_with(&mut bench, &settings).unwrap();
    assert!(bench.into_inner().is_empty());
}

#[test]
fn env_style_override_replaces_file_size() {
    let (_dir, path) = write_config("[workload]\nsize = 12\n");
    let config = ProfdemoConfig::load_from(&path).unwrap();
    let settings = Settings::resolve(config.as_ref(), Some("1.5"));

    let mut bench = CountingBench::default();
    run_with(&mut bench, &settings).unwrap();
    assert_eq!(bench.total_calls(), 0);
}

#[test]
fn broken_config_is_a_typed_error() {
    let (_dir, path) = write_config("workload = [");
    let err = ProfdemoConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn missing_config_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ProfdemoConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert!(config.is_none());
    assert_eq!(Settings::resolve(config.as_ref(), None), Settings::default());
}

const QUICK: &str = "sleepy_seconds = 0.0\nsupersleepy_seconds = 0.0\n";

#[test]
fn config_path_env_selects_the_file() {
    let (dir, path) = write_config("[workload]\nsize = \"x\"\n");

    let output = profdemo_command(&path).output().unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(dir.path().join("logs").join("profdemo.log").exists());
}

#[test]
fn config_path_env_runs_configured_workload() {
    let (_dir, path) = write_config(&format!("[workload]\nsize = 3\n{QUICK}"));

    let output = profdemo_command(&path).output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Done\n");
}

#[test]
fn size_env_overrides_config_size() {
    let (_dir, path) = write_config(&format!("[workload]\nsize = 3\n{QUICK}"));
    let output = profdemo_command(&path)
        .env("PROFDEMO_SIZE", "x")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let (_dir, path) = write_config(&format!("[workload]\nsize = \"x\"\n{QUICK}"));
    let output = profdemo_command(&path)
        .env("PROFDEMO_SIZE", "4")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Done\n");
}

#[test]
fn negative_size_env_fails_the_process() {
    let (_dir, path) = write_config(&format!("[workload]\n{QUICK}"));

    let output = profdemo_command(&path)
        .env("PROFDEMO_SIZE", "-2")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("workload failed"));
    assert!(stderr.contains("negative dimensions are not allowed: -2"));
}
