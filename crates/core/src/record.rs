//! Candidate records submitted for validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::field::FieldName;

/// A snapshot of the form's values, keyed by field.
///
/// Values are raw user input and may be empty. A field that is not in
/// the map has not been entered at all. Deserializing rejects a field
/// that appears more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateRecord {
    values: BTreeMap<FieldName, String>,
}

impl CandidateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the record with `field` set to `value`, replacing any
    /// previous value.
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.values.contains_key(&field)
    }

    /// Iterate entries in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(FieldName, S)> for CandidateRecord {
    fn from_iter<I: IntoIterator<Item = (FieldName, S)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(field, value)| (field, value.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for CandidateRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = CandidateRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut values = BTreeMap::new();
                while let Some((field, value)) = map.next_entry::<FieldName, String>()? {
                    if values.insert(field, value).is_some() {
                        return Err(de::Error::custom(format!("duplicate field `{field}`")));
                    }
                }
                Ok(CandidateRecord { values })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
