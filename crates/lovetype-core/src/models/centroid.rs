use serde::{Deserialize, Serialize};

use super::RatioPoint;

/// A named reference point. Its name is a macro category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub name: String,
    pub point: RatioPoint,
}

impl Centroid {
    pub fn new(name: impl Into<String>, point: RatioPoint) -> Self {
        Self {
            name: name.into(),
            point,
        }
    }
}
