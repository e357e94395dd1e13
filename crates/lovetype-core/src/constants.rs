//! Shared constants for the Lovetype compatibility engine.

/// Lovetype version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default weight of the dynamic axis.
pub const DEFAULT_W_DYN: f64 = 1.0;

/// Default weight of the static axis.
pub const DEFAULT_W_STA: f64 = 1.0;

/// Default weight of the bond axis.
pub const DEFAULT_W_BOND: f64 = 1.0;

/// Default weight of the trust axis.
pub const DEFAULT_W_TRUST: f64 = 0.4;

/// Default trust ratio at or above which a pair counts as high-trust.
pub const DEFAULT_TRUST_HIGH: f64 = 0.55;

/// Default margin at or below which the top two centroids are a hybrid.
pub const DEFAULT_MARGIN_HYBRID: f64 = 0.06;

/// Default divisor mapping the summed trust score (0-200) onto [0, 1].
pub const DEFAULT_TRUST_DIVISOR: f64 = 200.0;

/// Multiplier from the 1-10 trait scale to the 0-100 scale.
pub const TRAIT_SCALE: u32 = 10;

/// Smallest valid raw trait score.
pub const TRAIT_MIN: u8 = 1;

/// Largest valid raw trait score.
pub const TRAIT_MAX: u8 = 10;

/// Floor for the ratio denominator.
pub const RATIO_EPSILON: f64 = 1e-9;

/// Decimal places kept on the four ratios.
pub const RATIO_DECIMALS: i32 = 4;

/// Decimal places kept on distances and the top-two margin.
pub const DISTANCE_DECIMALS: i32 = 6;

/// Number of ranked candidates reported in a result.
pub const REPORTED_CANDIDATES: usize = 3;

/// Minimum number of centroids needed to compute a margin.
pub const MIN_CENTROIDS: usize = 2;

/// Margin at or below which confidence takes the heavy penalty.
pub const CONFIDENCE_TIGHT_MARGIN: f64 = 0.06;

/// Margin at or below which confidence takes the light penalty.
pub const CONFIDENCE_NARROW_MARGIN: f64 = 0.10;

/// Points removed for a tight margin.
pub const CONFIDENCE_TIGHT_PENALTY: f64 = 15.0;

/// Points removed for a narrow margin.
pub const CONFIDENCE_NARROW_PENALTY: f64 = 7.0;

/// Default HTTP bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default reference-data directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default tracing filter when `LOVETYPE_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "lovetype=info";

/// Project config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "lovetype.toml";
