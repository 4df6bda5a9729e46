//! The profiling workload.
//!
//! A deliberately wasteful sequence of calls meant to be run under a profiler:
//!
//! ```text
//! runner() -> useless(1000) -> randmatmul(1000)   CPU: 1000x1000 self-product
//!                           -> sum(0..1000)       CPU: trivial loop
//!                           -> sleepy(1.0)        wall clock only
//!                           -> supersleepy(2.0)   wall clock only
//!                           -> "Done" on stdout
//! ```
//!
//! `sleepy` and `supersleepy` behave identically. They are separate
//! non-inlined functions so a profiler reports them as separate frames.

mod bench;
pub mod errors;
mod workload;

pub use bench::{SystemBench, Workbench};
pub use errors::WorkloadError;
pub use workload::{
    DONE_LINE, Workload, random_matrix, randmatmul, run_with, runner, sleepy, supersleepy,
    useless,
};

pub use profdemo_config::Settings;
pub use profdemo_types::{DEFAULT_MATRIX_SIZE, Matrix, SleepSeconds, WorkloadArg};
