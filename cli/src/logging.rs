//! Tracing setup.
//!
//! Logs go to the first writable file among [`candidates`], else stderr.
//! Never stdout: the workload's `Done` line must be the only thing there.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, stderr},
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use profdemo_config::ProfdemoConfig;

const LOG_FILE_NAME: &str = "profdemo.log";

#[derive(Debug)]
pub(crate) enum LogSink {
    File { path: PathBuf, file: File },
    Stderr,
}

impl LogSink {
    /// Open the first candidate that works. Returns one warning per
    /// candidate that was skipped.
    pub(crate) fn open(candidates: &[PathBuf]) -> (Self, Vec<String>) {
        let mut skipped = Vec::new();
        for path in candidates {
            match open_append(path) {
                Ok(file) => {
                    let sink = Self::File {
                        path: path.clone(),
                        file,
                    };
                    return (sink, skipped);
                }
                Err(e) => skipped.push(format!("Cannot log to {}: {e}", path.display())),
            }
        }
        (Self::Stderr, skipped)
    }

    fn describe(&self) -> String {
        match self {
            Self::File { path, .. } => path.display().to_string(),
            Self::Stderr => "stderr".to_string(),
        }
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// `<config dir>/logs/profdemo.log` when a config path is known, then
/// `./.profdemo/logs/profdemo.log`.
pub(crate) fn candidates(config_path: Option<&Path>) -> Vec<PathBuf> {
    let beside_config = config_path
        .and_then(Path::parent)
        .map(|dir| dir.join("logs").join(LOG_FILE_NAME));
    let local = PathBuf::from(".profdemo").join("logs").join(LOG_FILE_NAME);
    beside_config.into_iter().chain([local]).collect()
}

/// Install the global subscriber. `RUST_LOG` wins; otherwise `info`.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let config_path = ProfdemoConfig::path();
    let (sink, skipped) = LogSink::open(&candidates(config_path.as_deref()));
    let target = sink.describe();

    match sink {
        LogSink::File { file, .. } => tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(filter)
            .init(),
        LogSink::Stderr => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(stderr))
            .with(filter)
            .init(),
    }

    tracing::info!(sink = %target, "Logging initialized");
    for warning in skipped {
        tracing::warn!("{warning}");
    }
}
