//! Error handling for Lovetype.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod classify_error;
pub mod config_error;
pub mod data_error;
pub mod error_code;

pub use classify_error::ClassifyError;
pub use config_error::ConfigError;
pub use data_error::DataError;
pub use error_code::LovetypeErrorCode;
