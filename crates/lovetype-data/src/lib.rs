//! # lovetype-data
//!
//! Loads the reference datasets (trait table, centroids, category mapping,
//! copy text, scoring constants) from a data directory, validates them
//! against their schemas, and serves them as immutable snapshots.
//!
//! A dataset that is missing or malformed does not stop the others from
//! loading; it is recorded as unavailable and reported through
//! [`AvailabilityReport`].

pub mod audit;
pub mod constants_loader;
pub mod dataset;
pub mod discovery;
pub mod reference;
pub mod store;
pub mod tables;

pub use audit::MappingGap;
pub use dataset::{Dataset, DatasetStatus};
pub use discovery::DatasetKind;
pub use reference::{AvailabilityReport, ReferenceData};
pub use store::DataStore;
pub use tables::{CategoryMapping, CentroidSet, CopyBook, TraitTable};
