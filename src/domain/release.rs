use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Release metadata read from the schema file.
///
/// Every field is optional in the source document and defaults to an empty
/// string. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReleaseInfo {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tag: String,
}

impl ReleaseInfo {
    /// Create release info from its three fields
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        ReleaseInfo {
            title: title.into(),
            description: description.into(),
            tag: tag.into(),
        }
    }

    /// Decode release info from raw JSON bytes.
    ///
    /// The document must be a JSON object; a present field that is not a
    /// string (including `null`) is rejected. A repeated key keeps its last
    /// value.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let object: Map<String, Value> = serde_json::from_slice(bytes)?;
        Ok(serde_json::from_value(Value::Object(object))?)
    }

    /// Read and decode the schema file at `path`.
    ///
    /// # Returns
    /// * `Ok(ReleaseInfo)` - The decoded, unsanitized release info
    /// * `Err` - If the file cannot be read or is not valid JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_json(&bytes)
    }

    /// Strip surrounding whitespace from `title` and `tag`. The information
    /// separators U+001C..=U+001F count as whitespace here.
    ///
    /// `description` is left untouched; it is base64-encoded verbatim.
    pub fn sanitized(self) -> Self {
        ReleaseInfo {
            title: sanitize(&self.title),
            description: self.description,
            tag: sanitize(&self.tag),
        }
    }

    /// Base64 (standard alphabet, padded) of the description's UTF-8 bytes
    pub fn description_b64(&self) -> String {
        STANDARD.encode(self.description.as_bytes())
    }
}

fn sanitize(value: &str) -> String {
    value
        .trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .to_string()
}
