//! Coverage audit of the category mapping against the centroid set.

use lovetype_core::Quadrant;
use serde::Serialize;

use crate::tables::{CategoryMapping, CentroidSet};

/// A (macro, quadrant) pair the matcher can produce but the mapping lacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingGap {
    pub macro_category: String,
    pub quadrant: Quadrant,
}

/// Every (centroid, quadrant) pair without a micro type, in centroid order.
pub fn mapping_gaps(centroids: &CentroidSet, mapping: &CategoryMapping) -> Vec<MappingGap> {
    centroids
        .names()
        .flat_map(|name| {
            Quadrant::ALL
                .into_iter()
                .filter(move |&q| mapping.resolve(name, q).is_none())
                .map(move |quadrant| MappingGap {
                    macro_category: name.to_string(),
                    quadrant,
                })
        })
        .collect()
}
