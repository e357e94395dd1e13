//! Tunable scoring constants and their partial-override document.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MARGIN_HYBRID, DEFAULT_TRUST_DIVISOR, DEFAULT_TRUST_HIGH, DEFAULT_W_BOND,
    DEFAULT_W_DYN, DEFAULT_W_STA, DEFAULT_W_TRUST,
};
use crate::errors::ConfigError;

/// Per-axis weights of the centroid distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub w_dyn: f64,
    pub w_sta: f64,
    pub w_bond: f64,
    pub w_trust: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            w_dyn: DEFAULT_W_DYN,
            w_sta: DEFAULT_W_STA,
            w_bond: DEFAULT_W_BOND,
            w_trust: DEFAULT_W_TRUST,
        }
    }
}

impl Weights {
    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("w_dyn", self.w_dyn),
            ("w_sta", self.w_sta),
            ("w_bond", self.w_bond),
            ("w_trust", self.w_trust),
        ]
    }
}

/// Constants bundle consumed by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConstants {
    pub weights: Weights,
    pub trust_high: f64,
    pub margin_hybrid: f64,
    pub trust_divisor: f64,
}

impl Default for ScoringConstants {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            trust_high: DEFAULT_TRUST_HIGH,
            margin_hybrid: DEFAULT_MARGIN_HYBRID,
            trust_divisor: DEFAULT_TRUST_DIVISOR,
        }
    }
}

impl ScoringConstants {
    /// Apply a partial override on top of `self`.
    ///
    /// Weights merge field by field; scalars replace wholesale. The merged
    /// bundle is validated before it is returned.
    pub fn merged(&self, overrides: &ScoringOverrides) -> Result<Self, ConfigError> {
        let mut out = *self;
        if let Some(w) = &overrides.weights {
            if let Some(v) = w.w_dyn {
                out.weights.w_dyn = v;
            }
            if let Some(v) = w.w_sta {
                out.weights.w_sta = v;
            }
            if let Some(v) = w.w_bond {
                out.weights.w_bond = v;
            }
            if let Some(v) = w.w_trust {
                out.weights.w_trust = v;
            }
        }
        if let Some(v) = overrides.trust_high {
            out.trust_high = v;
        }
        if let Some(v) = overrides.margin_hybrid {
            out.margin_hybrid = v;
        }
        if let Some(v) = overrides.trust_divisor {
            out.trust_divisor = v;
        }
        out.validate()?;
        Ok(out)
    }

    /// Check every constant against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.weights.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: format!("weights.{name}"),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.trust_high) {
            return Err(ConfigError::ValidationFailed {
                field: "trust_high".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if !self.margin_hybrid.is_finite() || self.margin_hybrid < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "margin_hybrid".to_string(),
                message: "must be a finite, non-negative number".to_string(),
            });
        }
        if !self.trust_divisor.is_finite() || self.trust_divisor <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "trust_divisor".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Partial weights override. Absent fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightOverrides {
    pub w_dyn: Option<f64>,
    pub w_sta: Option<f64>,
    pub w_bond: Option<f64>,
    pub w_trust: Option<f64>,
}

/// Partial constants document. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOverrides {
    pub weights: Option<WeightOverrides>,
    pub trust_high: Option<f64>,
    pub margin_hybrid: Option<f64>,
    pub trust_divisor: Option<f64>,
}

impl ScoringOverrides {
    /// Parse an override document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
