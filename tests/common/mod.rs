//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use profdemo_core::{Matrix, Workbench, WorkloadError};
use tempfile::TempDir;

/// Counts collaborator calls and forwards nothing to the system.
#[derive(Debug, Default)]
pub struct CountingBench {
    pub randmatmul: Vec<i64>,
    pub sleepy: Vec<f64>,
    pub supersleepy: Vec<f64>,
    pub lines: Vec<String>,
}

impl CountingBench {
    pub fn total_calls(&self) -> usize {
        self.randmatmul.len() + self.sleepy.len() + self.supersleepy.len() + self.lines.len()
    }

    pub fn requested_sleep(&self) -> f64 {
        self.sleepy.iter().chain(&self.supersleepy).sum()
    }
}

impl Workbench for CountingBench {
    fn randmatmul(&mut self, n: i64) -> Result<Matrix, WorkloadError> {
        self.randmatmul.push(n);
        Ok(Matrix::identity(0)?)
    }

    fn sleepy(&mut self, seconds: f64) -> Result<(), WorkloadError> {
        self.sleepy.push(seconds);
        Ok(())
    }

    fn supersleepy(&mut self, seconds: f64) -> Result<(), WorkloadError> {
        self.supersleepy.push(seconds);
        Ok(())
    }

    fn announce(&mut self, line: &str) -> Result<(), WorkloadError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Write `contents` to `config.toml` in a fresh temp dir.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

/// The built `profdemo` binary, pointed at `config` and isolated from the
/// caller's home directory and environment overrides.
pub fn profdemo_command(config: &Path) -> Command {
    let dir = config.parent().expect("config has a parent dir");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_profdemo"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("PROFDEMO_CONFIG", config)
        .env_remove("PROFDEMO_SIZE")
        .env_remove("RUST_LOG");
    cmd
}
