//! Typed, validated forms of the four reference documents.

pub mod category_mapping;
pub mod centroid_set;
pub mod copybook;
pub mod trait_table;

pub use category_mapping::CategoryMapping;
pub use centroid_set::CentroidSet;
pub use copybook::CopyBook;
pub use trait_table::TraitTable;

use std::fmt;
use std::path::Path;

use lovetype_core::errors::DataError;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;

/// Read a whole file, mapping I/O failures to [`DataError::Io`].
pub(crate) fn read_file(path: &Path) -> Result<String, DataError> {
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Parse JSON text, mapping failures to [`DataError::Json`].
pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(
    text: &str,
    label: &str,
) -> Result<T, DataError> {
    serde_json::from_str(text).map_err(|source| DataError::Json {
        path: label.to_string(),
        source,
    })
}

/// A JSON object as its members in document order, repeated keys included.
///
/// `serde_json::Map` keeps only the last value of a repeated key, so
/// documents whose keys must be unique are read through this instead.
pub(crate) struct OrderedEntries(pub(crate) Vec<(String, Value)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
