use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::io::Read;

/// Parsed content of one variables file: string keys in document order, values as
/// nested JSON-like data.
pub type VariableMapping = IndexMap<String, serde_json::Value>;

/// Decodes a JSON or YAML document whose root is a mapping.
///
/// The format is inferred from content. YAML accepts JSON documents, so a single
/// YAML decoder handles both; JSON objects that YAML refuses (tab indentation)
/// are retried with the JSON decoder.
///
/// # Arguments
/// * `reader` - Stream with the document bytes, consumed fully
/// * `source_path` - Name used in error messages
///
/// # Errors
/// * `Error::MalformedContent` if the document is invalid or its root is not a mapping
pub fn parse<R: Read>(mut reader: R, source_path: &str) -> Result<VariableMapping> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse_slice(&buf, source_path)
}

/// [`parse`] over bytes already in memory. A document with no content is rejected.
pub fn parse_slice(buf: &[u8], source_path: &str) -> Result<VariableMapping> {
    let malformed = |reason: String| Error::MalformedContent {
        source_path: source_path.to_string(),
        reason,
    };

    match serde_yaml::from_slice::<serde_yaml::Value>(buf) {
        Ok(serde_yaml::Value::Null) => Err(malformed("document is empty or null".to_string())),
        Ok(document) => serde_yaml::from_value(document).map_err(|e| malformed(e.to_string())),
        Err(yaml_err) => {
            if looks_like_json_object(buf) {
                if let Ok(mapping) = serde_json::from_slice::<VariableMapping>(buf) {
                    return Ok(mapping);
                }
            }
            Err(malformed(yaml_err.to_string()))
        }
    }
}

fn looks_like_json_object(buf: &[u8]) -> bool {
    buf.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'{')
}
