//! LovetypeErrorCode trait for the transport boundary.

/// Trait mapping Lovetype errors to stable error code strings.
/// Every error enum implements this so the HTTP layer can report a
/// machine-readable code next to the human message.
pub trait LovetypeErrorCode {
    /// Returns the error code string (e.g., "UNKNOWN_TYPE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the transport boundary.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DATA_ERROR: &str = "DATA_ERROR";
pub const DATA_UNAVAILABLE: &str = "DATA_UNAVAILABLE";
pub const UNKNOWN_TYPE: &str = "UNKNOWN_TYPE";
pub const UNMAPPED_CATEGORY: &str = "UNMAPPED_CATEGORY";
pub const INSUFFICIENT_CENTROIDS: &str = "INSUFFICIENT_CENTROIDS";
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const SERVER_ERROR: &str = "SERVER_ERROR";
