//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::DEFAULT_LOG_LEVEL;
use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Kith tracing/logging system.
///
/// Reads the `KITH_LOG` environment variable for per-crate log levels.
/// Format: `KITH_LOG=kith_decay=debug,kith_nudge=info`
///
/// Falls back to `kith=info` if `KITH_LOG` is not set or is invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize tracing from config. `KITH_LOG` still wins when set and valid.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        // try_init: an embedding host may already own the global subscriber.
        let result = if config.json_logs {
            tracing_subscriber::registry()
                .with(layer.json())
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(layer)
                .with(filter)
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("global tracing subscriber already installed");
        }
    });
}
