//! Document module - JSON field documents
//!
//! A document carries the linear symbol encoding as a string, so it stays
//! interoperable with any consumer of the one-byte-per-cell format:
//!
//! ```text
//! {"type":"field","width":10,"height":1,"cells":"T    OOIII","hash":"<16 hex digits>"}
//! ```
//!
//! `hash` is optional on input; when present it must match the cells.

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use tetra_field_core::Field;
use tetra_field_types::{FieldError, FIELD_WIDTH};

use crate::config::WireConfig;
use crate::hash::field_hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "field")]
    Field,
}

impl Default for FieldType {
    fn default() -> Self {
        Self::Field
    }
}

/// Serialized form of a [`Field`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDocument {
    #[serde(rename = "type")]
    #[serde(default)]
    pub doc_type: FieldType,
    pub width: usize,
    pub height: usize,
    /// Linear encoding, `width * height` characters from `" GIJLOSTZ"`
    pub cells: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Errors raised while decoding a document
#[derive(Debug)]
pub enum WireError {
    Json(serde_json::Error),
    Field(FieldError),
    TooTall { height: usize, max: usize },
    HashMismatch { expected: String, actual: String },
}

impl WireError {
    pub fn code(&self) -> &'static str {
        match self {
            WireError::Json(_) => "malformed_json",
            WireError::Field(e) => e.code(),
            WireError::TooTall { .. } => "too_tall",
            WireError::HashMismatch { .. } => "hash_mismatch",
        }
    }
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::Json(e) => write!(f, "{}: {}", self.code(), e),
            WireError::Field(e) => write!(f, "{}", e),
            WireError::TooTall { height, max } => write!(
                f,
                "{}: height {} exceeds limit of {}",
                self.code(),
                height,
                max
            ),
            WireError::HashMismatch { expected, actual } => write!(
                f,
                "{}: document says {}, cells hash to {}",
                self.code(),
                expected,
                actual
            ),
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WireError::Json(e) => Some(e),
            WireError::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for WireError {
    fn from(value: serde_json::Error) -> Self {
        WireError::Json(value)
    }
}

impl From<FieldError> for WireError {
    fn from(value: FieldError) -> Self {
        WireError::Field(value)
    }
}

fn format_hash(hash: u64) -> String {
    format!("{:016x}", hash)
}

impl FieldDocument {
    pub fn from_field(field: &Field, config: &WireConfig) -> Self {
        let cells = field.cells().iter().map(|&s| char::from(s)).collect();
        Self {
            doc_type: FieldType::Field,
            width: field.width(),
            height: field.height(),
            cells,
            hash: config.include_hash.then(|| format_hash(field_hash(field))),
        }
    }

    /// Validate the document and rebuild the field
    pub fn into_field(self, config: &WireConfig) -> Result<Field, WireError> {
        if self.width != FIELD_WIDTH {
            return Err(FieldError::InvalidArgument(format!(
                "width must be {}, got {}",
                FIELD_WIDTH, self.width
            ))
            .into());
        }
        if self.height > config.max_height {
            return Err(WireError::TooTall {
                height: self.height,
                max: config.max_height,
            });
        }

        let expected = self.width.checked_mul(self.height).ok_or_else(|| {
            FieldError::InvalidArgument(format!(
                "height {} overflows the cell count",
                self.height
            ))
        })?;
        if self.cells.len() != expected {
            return Err(FieldError::LengthMismatch {
                expected,
                got: self.cells.len(),
            }
            .into());
        }

        let mut field = Field::with_height(self.height)?;
        field.write_bytes(.., self.cells.as_bytes())?;

        if let Some(expected) = self.hash {
            let actual = format_hash(field_hash(&field));
            if !expected.eq_ignore_ascii_case(&actual) {
                return Err(WireError::HashMismatch { expected, actual });
            }
        }
        Ok(field)
    }
}

/// Serialize a field to a JSON document
pub fn encode_field(field: &Field, config: &WireConfig) -> Result<String, WireError> {
    let doc = FieldDocument::from_field(field, config);
    let json = if config.pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    debug!("encoded field of height {} ({} bytes)", field.height(), json.len());
    Ok(json)
}

/// Parse and validate a JSON document
pub fn decode_field(json: &str, config: &WireConfig) -> Result<Field, WireError> {
    let result = serde_json::from_str::<FieldDocument>(json)
        .map_err(WireError::from)
        .and_then(|doc| doc.into_field(config));
    match &result {
        Ok(field) => debug!("decoded field of height {}", field.height()),
        Err(e) => warn!("rejected field document: {}", e),
    }
    result
}
