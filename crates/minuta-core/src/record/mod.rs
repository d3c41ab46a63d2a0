//! Record lookup
//!
//! A [`RecordSource`] returns the raw field values stored for an identifier.
//! [`normalize_record`] rewrites them into the shape templates expect before
//! they are merged into the session's value mapping.

mod normalize;

pub use normalize::normalize_record;

use crate::error::{MinutaError, Result};
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;

/// Raw field values of one stored record, in storage order
pub type Record = IndexMap<String, String>;

/// Backend answering record lookups by identifier
pub trait RecordSource {
    /// # Errors
    ///
    /// Returns [`MinutaError::RecordNotFound`] for unknown identifiers.
    fn lookup(&self, id: &str) -> Result<Record>;
}

/// In-memory record store
///
/// Loaded from a JSON object keyed by record id:
///
/// ```json
/// { "12345": { "nome_completo_registrado": "Ana Carolina de Souza" } }
/// ```
///
/// Numbers and booleans are stored as their text, `null` as an empty string.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: IndexMap<String, Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, record: Record) {
        self.records.insert(id.into(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)
            .map_err(|e| MinutaError::RecordStoreInvalid(e.to_string()))?;
        let Value::Object(entries) = root else {
            return Err(MinutaError::RecordStoreInvalid(
                "expected a JSON object keyed by record id".to_string(),
            ));
        };

        let mut store = Self::new();
        for (id, fields) in entries {
            let Value::Object(fields) = fields else {
                return Err(MinutaError::RecordStoreInvalid(format!(
                    "record '{}' is not an object",
                    id
                )));
            };
            let mut record = Record::new();
            for (key, value) in fields {
                let text = scalar_text(&value).ok_or_else(|| {
                    MinutaError::RecordStoreInvalid(format!(
                        "record '{}' field '{}' must be a string, number, boolean or null",
                        id, key
                    ))
                })?;
                record.insert(key, text);
            }
            store.insert(id, record);
        }

        tracing::debug!(records = store.len(), "loaded record store");
        Ok(store)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

impl RecordSource for RecordStore {
    fn lookup(&self, id: &str) -> Result<Record> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| MinutaError::RecordNotFound(id.to_string()))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
