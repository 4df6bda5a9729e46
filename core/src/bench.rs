//! Collaborators used by `useless`.

use std::io::{self, Stdout, Write};

use profdemo_types::Matrix;

use crate::errors::WorkloadError;
use crate::workload::{randmatmul, sleepy, supersleepy};

/// Everything `useless` calls out to.
///
/// [`SystemBench`] does the real work. Tests substitute a recorder to observe
/// which collaborators ran and with what arguments.
pub trait Workbench {
    fn randmatmul(&mut self, n: i64) -> Result<Matrix, WorkloadError>;
    fn sleepy(&mut self, seconds: f64) -> Result<(), WorkloadError>;
    fn supersleepy(&mut self, seconds: f64) -> Result<(), WorkloadError>;
    /// Emit one line of user-facing output.
    fn announce(&mut self, line: &str) -> Result<(), WorkloadError>;
}

/// Real sleeps, real matrices, output to `W`.
#[derive(Debug)]
pub struct SystemBench<W = Stdout> {
    out: W,
}

impl SystemBench<Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for SystemBench<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> SystemBench<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Workbench for SystemBench<W> {
    fn randmatmul(&mut self, n: i64) -> Result<Matrix, WorkloadError> {
        randmatmul(n)
    }

    fn sleepy(&mut self, seconds: f64) -> Result<(), WorkloadError> {
        sleepy(seconds)
    }

    fn supersleepy(&mut self, seconds: f64) -> Result<(), WorkloadError> {
        supersleepy(seconds)
    }

    fn announce(&mut self, line: &str) -> Result<(), WorkloadError> {
        writeln!(self.out, "{line}").map_err(WorkloadError::Output)?;
        self.out.flush().map_err(WorkloadError::Output)
    }
}
