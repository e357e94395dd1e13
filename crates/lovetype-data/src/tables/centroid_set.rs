//! Centroid set: named macro-category reference points, in file order.

use std::path::Path;

use lovetype_core::errors::DataError;
use lovetype_core::{Centroid, RatioPoint};
use serde::Deserialize;

use super::OrderedEntries;

#[derive(Debug, Deserialize)]
struct CentroidCoords {
    #[serde(rename = "dyn", alias = "dynamic")]
    dynamic: f64,
    #[serde(rename = "sta", alias = "static")]
    stable: f64,
    bond: f64,
    trust: f64,
}

/// Ordered, immutable set of centroids. Iteration order is the tie-break
/// order of the matcher.
#[derive(Debug, Clone, Default)]
pub struct CentroidSet {
    centroids: Vec<Centroid>,
}

impl CentroidSet {
    /// Build from centroids, rejecting duplicate names.
    pub fn from_centroids(centroids: Vec<Centroid>, label: &str) -> Result<Self, DataError> {
        for (i, c) in centroids.iter().enumerate() {
            if centroids[..i].iter().any(|prev| prev.name == c.name) {
                return Err(DataError::schema(
                    label,
                    format!("duplicate centroid '{}'", c.name),
                ));
            }
        }
        Ok(Self { centroids })
    }

    /// Parse `{"name": {"dyn": .., "sta": .., "bond": .., "trust": ..}, ...}`.
    ///
    /// A name that appears twice rejects the document.
    pub fn from_json(text: &str, label: &str) -> Result<Self, DataError> {
        let OrderedEntries(doc) = super::parse_json(text, label)?;
        let mut centroids = Vec::with_capacity(doc.len());
        for (name, value) in doc {
            let coords: CentroidCoords = serde_json::from_value(value)
                .map_err(|e| DataError::schema(label, format!("centroid '{name}': {e}")))?;
            centroids.push(Centroid::new(
                name,
                RatioPoint::new(coords.dynamic, coords.stable, coords.bond, coords.trust),
            ));
        }
        Self::from_centroids(centroids, label)
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = super::read_file(path)?;
        Self::from_json(&text, &path.display().to_string())
    }

    pub fn as_slice(&self) -> &[Centroid] {
        &self.centroids
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.centroids.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.centroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }
}
