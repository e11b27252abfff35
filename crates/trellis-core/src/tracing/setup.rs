//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::ENV_LOG;

static INIT: Once = Once::new();

/// Default filter when `TRELLIS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "trellis=warn";

/// Initialize the Trellis tracing/logging system.
///
/// Reads `TRELLIS_LOG` for per-module log levels, e.g.
/// `TRELLIS_LOG=trellis_analysis::scanner=debug,trellis_core=info`.
///
/// Falls back to [`DEFAULT_FILTER`] if the variable is not set or is invalid.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // try_init: a host process may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
