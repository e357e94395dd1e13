//! Category mapping: (macro category, quadrant) -> micro type.

use std::collections::BTreeMap;
use std::path::Path;

use lovetype_core::errors::DataError;
use lovetype_core::Quadrant;

/// Micro types of one macro category, indexed by [`Quadrant::index`].
type QuadrantRow = [Option<String>; 4];

/// Typed two-level mapping from macro category and quadrant to micro type.
#[derive(Debug, Clone, Default)]
pub struct CategoryMapping {
    rows: BTreeMap<String, QuadrantRow>,
}

impl CategoryMapping {
    /// Insert or replace one entry. Empty micro names count as absent.
    pub fn insert(&mut self, macro_category: impl Into<String>, quadrant: Quadrant, micro: impl Into<String>) {
        let micro = micro.into();
        let row = self.rows.entry(macro_category.into()).or_default();
        row[quadrant.index()] = if micro.is_empty() { None } else { Some(micro) };
    }

    /// Parse `{"macro": {"A": "micro", "B": ..., ...}, ...}`.
    ///
    /// Quadrant keys other than A-D and non-string values are schema
    /// violations; a partial row is accepted and audited separately.
    pub fn from_json(text: &str, label: &str) -> Result<Self, DataError> {
        let doc: BTreeMap<String, BTreeMap<String, serde_json::Value>> =
            super::parse_json(text, label)?;
        let mut mapping = Self::default();
        for (macro_category, entries) in doc {
            mapping.rows.entry(macro_category.clone()).or_default();
            for (key, value) in entries {
                let quadrant: Quadrant = key.parse().map_err(|e| {
                    DataError::schema(label, format!("macro '{macro_category}': {e}"))
                })?;
                let micro = value.as_str().ok_or_else(|| {
                    DataError::schema(
                        label,
                        format!("macro '{macro_category}' quadrant {quadrant}: expected a string"),
                    )
                })?;
                mapping.insert(macro_category.clone(), quadrant, micro.trim());
            }
        }
        Ok(mapping)
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = super::read_file(path)?;
        Self::from_json(&text, &path.display().to_string())
    }

    /// Look up the micro type for a (macro, quadrant) pair.
    pub fn resolve(&self, macro_category: &str, quadrant: Quadrant) -> Option<&str> {
        self.rows
            .get(macro_category)
            .and_then(|row| row[quadrant.index()].as_deref())
    }

    pub fn len(&self) -> usize {
        self.rows.values().flatten().filter(|m| m.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_present_entries() {
        let json = r#"{"Passion": {"A": "Firestarter", "D": "Slow Burn"}}"#;
        let mapping = CategoryMapping::from_json(json, "inline").unwrap();
        assert_eq!(mapping.resolve("Passion", Quadrant::A), Some("Firestarter"));
        assert_eq!(mapping.resolve("Passion", Quadrant::D), Some("Slow Burn"));
        assert_eq!(mapping.resolve("Passion", Quadrant::B), None);
        assert_eq!(mapping.resolve("Comfort", Quadrant::A), None);
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn empty_micro_counts_as_absent() {
        let json = r#"{"Passion": {"A": ""}}"#;
        let mapping = CategoryMapping::from_json(json, "inline").unwrap();
        assert_eq!(mapping.resolve("Passion", Quadrant::A), None);
    }

    #[test]
    fn unknown_quadrant_key_is_rejected() {
        let json = r#"{"Passion": {"E": "Nope"}}"#;
        let err = CategoryMapping::from_json(json, "inline").unwrap_err();
        assert!(matches!(err, DataError::SchemaViolation { .. }));
    }

    #[test]
    fn non_string_micro_is_rejected() {
        let json = r#"{"Passion": {"A": 3}}"#;
        assert!(CategoryMapping::from_json(json, "inline").is_err());
    }
}
