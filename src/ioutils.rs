use std::path::Path;

use crate::error::{Error, Result};
use crate::renderer::Data;

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating missing parent directories.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Parses render data, which must be a JSON object.
///
/// Blank input is treated as an empty object.
pub fn parse_string_to_json(buf: &str) -> Result<Data> {
    if buf.trim().is_empty() {
        return Ok(Data::new());
    }
    let value: serde_json::Value = serde_json::from_str(buf)?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(Error::InvalidData { kind: json_kind(&other).to_string() }),
    }
}

/// Name of a JSON value's type, as used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
