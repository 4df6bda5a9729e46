//! Core domain types for profdemo.
//!
//! This crate contains pure domain types with no IO and no randomness.
//! Everything here can be used from any layer of the workspace.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod matrix;
pub use matrix::{Matrix, ShapeError};

use std::fmt;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Workload Defaults
// ============================================================================

/// Matrix size used by `randmatmul` when none is given, and the argument the
/// driver passes to `useless`.
pub const DEFAULT_MATRIX_SIZE: i64 = 1000;
pub const DEFAULT_SLEEPY_SECONDS: f64 = 1.0;
pub const DEFAULT_SUPERSLEEPY_SECONDS: f64 = 2.0;

// ============================================================================
// Workload Argument
// ============================================================================

/// A loosely-typed workload argument, as it arrives from a config file or
/// the environment.
///
/// [`WorkloadArg::Int`] and [`WorkloadArg::Bool`] pass the integer guard in
/// `useless` (a bool counts as `0` or `1`). Every other variant turns the
/// workload into a silent no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkloadArg {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    /// Anything structured (arrays, tables, datetimes). Holds a rendering of
    /// the value for logs.
    Other(String),
}

impl WorkloadArg {
    /// Parse a raw string the way an environment override is read:
    /// integer first, then float, then `true`/`false`, else plain text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Int(value);
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            return Self::Float(value);
        }
        match trimmed {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// The integer value, if this argument is an integer. Bools are integers
    /// here: `true` is `1`, `false` is `0`.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Bool(value) => Some(*value as i64),
            _ => None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
            Self::Other(_) => "other",
        }
    }
}

impl From<&str> for WorkloadArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for WorkloadArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
            Self::Other(value) => f.write_str(value),
        }
    }
}

// ============================================================================
// Sleep Duration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid sleep length: {seconds} seconds")]
pub struct InvalidDuration {
    pub seconds: f64,
}

/// A sleep length in seconds, guaranteed finite, non-negative and
/// representable as a [`Duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SleepSeconds(Duration);

impl SleepSeconds {
    pub const ZERO: Self = Self(Duration::ZERO);

    pub fn new(seconds: f64) -> Result<Self, InvalidDuration> {
        Duration::try_from_secs_f64(seconds)
            .map(Self)
            .map_err(|_| InvalidDuration { seconds })
    }

    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }
}
