//! Logging setup
//!
//! Diagnostics go to stderr through `env_logger`, keeping stdout for the
//! confirmation line.

use env_logger::{Builder, Env};

/// Environment variable holding an `env_logger` filter, e.g. `debug`
pub const LOG_ENV: &str = "PY_TYPED_LOG";

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global logger
///
/// `PY_TYPED_LOG` wins over `--verbose` when set.
pub fn init(verbose: bool) {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, default_filter(verbose)));
    builder.format_timestamp(None).format_target(false);

    if let Err(e) = builder.try_init() {
        eprintln!("Failed to initialize logging: {e}");
    }
}
