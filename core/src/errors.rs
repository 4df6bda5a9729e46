//! Workload failures.
//!
//! The integer guard in `useless` is not an error. Everything here comes from
//! a collaborator and propagates to the caller unchanged.

use std::io;

use thiserror::Error;

use profdemo_types::{InvalidDuration, ShapeError};

#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("negative dimensions are not allowed: {0}")]
    NegativeDimension(i64),
    #[error(transparent)]
    InvalidDuration(#[from] InvalidDuration),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("failed to write workload output")]
    Output(#[source] io::Error),
}
