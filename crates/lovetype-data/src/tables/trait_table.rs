//! Trait table: one row of five 1-10 trait scores per type.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use lovetype_core::constants::{TRAIT_MAX, TRAIT_MIN};
use lovetype_core::errors::DataError;
use lovetype_core::{TraitRow, TraitScores};
use serde::Deserialize;

/// One CSV record. Headers may use the English trait names or the
/// original Japanese column titles.
///
/// Scores are read as numbers so spreadsheet exports like `5.0` load; they
/// must still be whole values in 1..=10.
#[derive(Debug, Deserialize)]
struct TraitRecord {
    #[serde(rename = "type", alias = "type_id")]
    type_id: String,
    #[serde(alias = "共感")]
    empathy: f64,
    #[serde(alias = "調和")]
    harmony: f64,
    #[serde(alias = "依存")]
    dependency: f64,
    #[serde(alias = "刺激")]
    stimulation: f64,
    #[serde(alias = "信頼")]
    trust: f64,
}

impl TraitRecord {
    fn into_row(self, label: &str) -> Result<TraitRow, DataError> {
        let type_id = self.type_id.trim().to_string();
        if type_id.is_empty() {
            return Err(DataError::schema(label, "empty type identifier"));
        }
        let score = |trait_name: &str, value: f64| -> Result<u32, DataError> {
            let in_range = (f64::from(TRAIT_MIN)..=f64::from(TRAIT_MAX)).contains(&value);
            if !in_range || value.fract() != 0.0 {
                return Err(DataError::schema(
                    label,
                    format!(
                        "type '{type_id}': {trait_name} = {value} is not a whole number in {TRAIT_MIN}..={TRAIT_MAX}"
                    ),
                ));
            }
            // Whole and within 1..=10, so the cast is exact.
            Ok(value as u32)
        };
        let scores = TraitScores::new(
            score("empathy", self.empathy)?,
            score("harmony", self.harmony)?,
            score("dependency", self.dependency)?,
            score("stimulation", self.stimulation)?,
            score("trust", self.trust)?,
        );
        Ok(TraitRow::new(type_id, scores))
    }
}

/// Immutable trait table, in file order, indexed by type identifier.
#[derive(Debug, Clone, Default)]
pub struct TraitTable {
    rows: Vec<TraitRow>,
    index: HashMap<String, usize>,
}

impl TraitTable {
    /// Build from rows, rejecting duplicate identifiers.
    pub fn from_rows(rows: Vec<TraitRow>, label: &str) -> Result<Self, DataError> {
        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if index.insert(row.type_id.clone(), i).is_some() {
                return Err(DataError::DuplicateType {
                    path: label.to_string(),
                    type_id: row.type_id.clone(),
                });
            }
        }
        Ok(Self { rows, index })
    }

    /// Parse CSV from any reader. `label` names the source in errors.
    pub fn from_csv_reader<R: Read>(reader: R, label: &str) -> Result<Self, DataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize::<TraitRecord>() {
            let record = record.map_err(|e| DataError::Csv {
                path: label.to_string(),
                message: e.to_string(),
            })?;
            rows.push(record.into_row(label)?);
        }
        Self::from_rows(rows, label)
    }

    /// Load a CSV file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = super::read_file(path)?;
        // Spreadsheet exports often lead with a byte-order mark.
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        Self::from_csv_reader(text.as_bytes(), &path.display().to_string())
    }

    pub fn get(&self, type_id: &str) -> Option<&TraitRow> {
        self.index.get(type_id).map(|&i| &self.rows[i])
    }

    /// Identifiers in file order.
    pub fn type_ids(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.type_id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
