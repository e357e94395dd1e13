//! Copy text per micro type.

use std::collections::BTreeMap;
use std::path::Path;

use lovetype_core::errors::DataError;
use lovetype_core::models::CopyText;
use serde::Deserialize;

/// One copy entry. Files carry `catch`/`body`, the older `headline`, or the
/// newer `feature`/`advice`, sometimes several at once.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CopyRecord {
    catch: Option<String>,
    headline: Option<String>,
    feature: Option<String>,
    body: Option<String>,
    advice: Option<String>,
}

impl CopyRecord {
    /// `catch` wins over `headline`, which wins over `feature`; `body` wins
    /// over `advice`.
    fn into_copy(self) -> CopyText {
        CopyText {
            headline: self
                .catch
                .or(self.headline)
                .or(self.feature)
                .unwrap_or_default(),
            body: self.body.or(self.advice).unwrap_or_default(),
        }
    }
}

/// Micro type -> copy text, sorted by micro type.
#[derive(Debug, Clone, Default)]
pub struct CopyBook {
    entries: BTreeMap<String, CopyText>,
}

impl CopyBook {
    pub fn insert(&mut self, micro_type: impl Into<String>, copy: CopyText) {
        self.entries.insert(micro_type.into(), copy);
    }

    /// Parse `{"micro": {"catch": "...", "body": "..."}, ...}`.
    pub fn from_json(text: &str, label: &str) -> Result<Self, DataError> {
        let doc: BTreeMap<String, CopyRecord> = super::parse_json(text, label)?;
        let entries = doc
            .into_iter()
            .map(|(micro, record)| (micro, record.into_copy()))
            .collect();
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = super::read_file(path)?;
        Self::from_json(&text, &path.display().to_string())
    }

    /// Copy for `micro_type`, or empty strings when there is none.
    pub fn lookup(&self, micro_type: &str) -> CopyText {
        self.entries.get(micro_type).cloned().unwrap_or_default()
    }

    /// Sorted micro types that have copy.
    pub fn known_types(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_feature_advice_aliases() {
        let json = r#"{
            "Slow Burn": {"feature": "Warm", "advice": "Take your time"},
            "Firestarter": {"catch": "Bright", "body": "Keep it lit"}
        }"#;
        let book = CopyBook::from_json(json, "inline").unwrap();
        assert_eq!(book.lookup("Slow Burn").headline, "Warm");
        assert_eq!(book.lookup("Slow Burn").body, "Take your time");
        assert_eq!(book.known_types(), vec!["Firestarter", "Slow Burn"]);
    }

    #[test]
    fn mixed_key_families_prefer_catch_and_body() {
        let json = r#"{
            "Open Door": {"catch": "c", "body": "b", "feature": "f", "advice": "a"},
            "Hush": {"headline": "h", "feature": "f", "advice": "a"},
            "Echo": {"feature": "f", "body": "b"}
        }"#;
        let book = CopyBook::from_json(json, "inline").unwrap();
        assert_eq!(book.len(), 3);
        assert_eq!(
            book.lookup("Open Door"),
            CopyText {
                headline: "c".into(),
                body: "b".into()
            }
        );
        assert_eq!(book.lookup("Hush").headline, "h");
        assert_eq!(book.lookup("Hush").body, "a");
        assert_eq!(book.lookup("Echo").headline, "f");
        assert_eq!(book.lookup("Echo").body, "b");
    }

    #[test]
    fn missing_entry_and_fields_default_to_empty() {
        let book = CopyBook::from_json(r#"{"Firestarter": {"catch": "Bright"}}"#, "inline").unwrap();
        assert_eq!(book.lookup("Firestarter").body, "");
        assert_eq!(book.lookup("Unknown"), CopyText::default());
    }
}
