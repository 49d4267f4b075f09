//! Tracing setup for the binary
//!
//! Log lines go to stderr so they never mix with command output. The filter
//! comes from `WEDDING_LOG` (e.g. `debug`, `wedding_planner=trace`).

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "WEDDING_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber; `verbose` raises the default level to debug
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
