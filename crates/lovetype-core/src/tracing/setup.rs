//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the Lovetype tracing/logging system.
///
/// Reads the `LOVETYPE_LOG` environment variable for per-target log levels.
/// Format: `LOVETYPE_LOG=lovetype_data=debug,tower_http=info`
///
/// Falls back to the configured filter (default `lovetype=info`) if
/// `LOVETYPE_LOG` is not set or is invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("LOVETYPE_LOG")
            .unwrap_or_else(|_| EnvFilter::new(config.effective_log_filter()));

        if config.effective_json_logs() {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_target(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_line_number(true))
                .with(filter)
                .init();
        }
    });
}
