//! Scoring constants: compiled defaults plus an optional partial override file.

use std::path::Path;

use lovetype_core::models::{ScoringConstants, ScoringOverrides};

/// Resolve the constants bundle.
///
/// Without a file the defaults apply. A file that cannot be read, parsed, or
/// validated is discarded as a whole; the defaults apply and the reason is
/// logged at `warn`.
pub fn load_constants(path: Option<&Path>) -> ScoringConstants {
    let defaults = ScoringConstants::default();
    let Some(path) = path else {
        tracing::debug!("no constants file, using defaults");
        return defaults;
    };

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "constants file unreadable, using defaults");
            return defaults;
        }
    };

    let overrides = match ScoringOverrides::from_json(&text) {
        Ok(o) => o,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "constants file is not valid JSON, using defaults");
            return defaults;
        }
    };

    match defaults.merged(&overrides) {
        Ok(merged) => {
            tracing::info!(
                path = %path.display(),
                trust_high = merged.trust_high,
                margin_hybrid = merged.margin_hybrid,
                trust_divisor = merged.trust_divisor,
                "constants override applied"
            );
            merged
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "constants override rejected, using defaults");
            defaults
        }
    }
}
