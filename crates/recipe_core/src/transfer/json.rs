//! JSON array codec for recipe import/export.

use crate::model::recipe::Recipe;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Import container could not be turned into a record sequence.
#[derive(Debug)]
pub enum DecodeError {
    /// Input is not valid JSON.
    Json(serde_json::Error),
    /// Input is valid JSON but not an array.
    NotAnArray { found: &'static str },
    /// Input file could not be read.
    Io(std::io::Error),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid JSON: {err}"),
            Self::NotAnArray { found } => {
                write!(f, "expected a JSON array of recipes, found {found}")
            }
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::NotAnArray { .. } => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<std::io::Error> for DecodeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Decodes an import payload into raw records without validating them.
///
/// # Errors
/// - `Json` when the bytes are not JSON.
/// - `NotAnArray` when the top-level value is not an array.
pub fn decode_import(bytes: &[u8]) -> DecodeResult<Vec<Value>> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Array(records) => Ok(records),
        other => Err(DecodeError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Encodes recipes as a pretty-printed JSON array.
pub fn encode_export(recipes: &[Recipe]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(recipes)
}

/// Reads and decodes an import file.
pub fn read_import_file(path: &Path) -> DecodeResult<Vec<Value>> {
    let bytes = std::fs::read(path)?;
    decode_import(&bytes)
}

/// Writes an export snapshot to `path`, replacing any existing file.
pub fn write_export_file(path: &Path, recipes: &[Recipe]) -> std::io::Result<()> {
    let body = encode_export(recipes).map_err(std::io::Error::other)?;
    std::fs::write(path, body)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
