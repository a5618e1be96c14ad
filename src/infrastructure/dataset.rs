//! JSON dataset loading
//!
//! List views are fed from JSON arrays exported by the backend
//! (conversations, products, orders, customers).

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::shared::DataError;

/// Read a JSON array of records from `path`.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&raw)?;
    debug!(path = %path.display(), count = records.len(), "dataset loaded");
    Ok(records)
}

/// Parse a JSON array of records.
pub fn parse_records<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, DataError> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_array() {
        return Err(DataError::NotAnArray(kind(&value)));
    }
    Ok(serde_json::from_value(value)?)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
