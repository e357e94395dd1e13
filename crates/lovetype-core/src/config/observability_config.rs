//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_FILTER;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `LOVETYPE_LOG` is unset. Default: `lovetype=info`.
    pub log_filter: Option<String>,
    /// Emit JSON log lines instead of the human format. Default: false.
    pub json_logs: Option<bool>,
}

impl ObservabilityConfig {
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn effective_json_logs(&self) -> bool {
        self.json_logs.unwrap_or(false)
    }
}
