use std::thread;
use std::time::Instant;

use profdemo_config::Settings;
use profdemo_types::{
    DEFAULT_SLEEPY_SECONDS, DEFAULT_SUPERSLEEPY_SECONDS, Matrix, ShapeError, SleepSeconds,
    WorkloadArg,
};

use crate::bench::{SystemBench, Workbench};
use crate::errors::WorkloadError;

/// Printed by `useless` once the work is done.
pub const DONE_LINE: &str = "Done";

/// Block the calling thread for `seconds`.
#[inline(never)]
pub fn sleepy(seconds: f64) -> Result<(), WorkloadError> {
    let duration = SleepSeconds::new(seconds)?;
    thread::sleep(duration.as_duration());
    Ok(())
}

/// Block the calling thread for `seconds`. Same as [`sleepy`] under another name.
#[inline(never)]
pub fn supersleepy(seconds: f64) -> Result<(), WorkloadError> {
    let duration = SleepSeconds::new(seconds)?;
    thread::sleep(duration.as_duration());
    Ok(())
}

/// `n x n` matrix of independent uniform draws in `[0, 1)`.
pub fn random_matrix(n: usize) -> Result<Matrix, ShapeError> {
    Matrix::from_fn(n, n, |_, _| rand::random::<f64>())
}

/// Square a random `n x n` matrix. `n = 0` yields an empty `0x0` product.
#[inline(never)]
pub fn randmatmul(n: i64) -> Result<Matrix, WorkloadError> {
    if n < 0 {
        return Err(WorkloadError::NegativeDimension(n));
    }
    let size = usize::try_from(n).map_err(|_| ShapeError::TooLarge {
        rows: usize::MAX,
        cols: usize::MAX,
    })?;

    let a = random_matrix(size)?;
    Ok(a.matmul(&a)?)
}

/// Sleep lengths used by [`Workload::useless`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workload {
    pub sleepy_seconds: f64,
    pub supersleepy_seconds: f64,
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            sleepy_seconds: DEFAULT_SLEEPY_SECONDS,
            supersleepy_seconds: DEFAULT_SUPERSLEEPY_SECONDS,
        }
    }
}

impl From<&Settings> for Workload {
    fn from(settings: &Settings) -> Self {
        Self {
            sleepy_seconds: settings.sleepy_seconds,
            supersleepy_seconds: settings.supersleepy_seconds,
        }
    }
}

impl Workload {
    /// Burn CPU and wall-clock time, then report `sum(0..a)`.
    ///
    /// Returns `Ok(None)` without touching `bench` when `a` is not an integer.
    pub fn useless<B>(&self, bench: &mut B, a: &WorkloadArg) -> Result<Option<i64>, WorkloadError>
    where
        B: Workbench + ?Sized,
    {
        let Some(a) = a.as_int() else {
            tracing::debug!(kind = a.kind(), arg = %a, "Skipping workload for non-integer argument");
            return Ok(None);
        };

        let _span = tracing::info_span!("useless", a).entered();

        let started = Instant::now();
        bench.randmatmul(a)?;
        tracing::debug!(elapsed = ?started.elapsed(), "randmatmul finished");

        let ans: i64 = (0..a).sum();

        let started = Instant::now();
        bench.sleepy(self.sleepy_seconds)?;
        tracing::debug!(elapsed = ?started.elapsed(), "sleepy finished");

        let started = Instant::now();
        bench.supersleepy(self.supersleepy_seconds)?;
        tracing::debug!(elapsed = ?started.elapsed(), "supersleepy finished");

        bench.announce(DONE_LINE)?;
        Ok(Some(ans))
    }
}

/// [`Workload::useless`] with the default 1.0s and 2.0s sleeps.
pub fn useless<B>(bench: &mut B, a: &WorkloadArg) -> Result<Option<i64>, WorkloadError>
where
    B: Workbench + ?Sized,
{
    Workload::default().useless(bench, a)
}

/// Run the workload once with `settings`, discarding the result.
pub fn run_with<B>(bench: &mut B, settings: &Settings) -> Result<(), WorkloadError>
where
    B: Workbench + ?Sized,
{
    let started = Instant::now();
    let ans = Workload::from(settings).useless(bench, &settings.size)?;
    tracing::info!(size = %settings.size, ?ans, elapsed = ?started.elapsed(), "Workload finished");
    Ok(())
}

/// `useless(1000)` against the real system, output on stdout.
pub fn runner() -> Result<(), WorkloadError> {
    run_with(&mut SystemBench::stdout(), &Settings::default())
}
