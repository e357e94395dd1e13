//! Observability for Lovetype.
//! `tracing` crate with `EnvFilter`, optional JSON output, and span macros.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
