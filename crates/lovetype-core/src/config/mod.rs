//! Configuration system for Lovetype.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod data_config;
pub mod lovetype_config;
pub mod observability_config;
pub mod server_config;

pub use data_config::DataConfig;
pub use lovetype_config::{CliOverrides, LovetypeConfig};
pub use observability_config::ObservabilityConfig;
pub use server_config::ServerConfig;
