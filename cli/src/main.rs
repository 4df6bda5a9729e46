//! profdemo - run the toy workload once, for a profiler to watch.
//!
//! ```text
//! main() -> logging::init() -> ProfdemoConfig::load() -> Settings -> run_with(SystemBench)
//! ```

mod logging;

use anyhow::{Context, Result};

use profdemo_config::{ProfdemoConfig, Settings};
use profdemo_core::{SystemBench, run_with};

fn main() -> Result<()> {
    logging::init();

    // A broken config is logged by the loader; run with defaults instead.
    let config = ProfdemoConfig::load().ok().flatten();
    let settings = Settings::from_env(config.as_ref());
    tracing::debug!(?settings, "Resolved workload settings");

    run_with(&mut SystemBench::stdout(), &settings).context("workload failed")?;
    Ok(())
}
