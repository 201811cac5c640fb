//! File helpers - read and write field documents on disk

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use tetra_field_core::Field;

use crate::config::WireConfig;
use crate::document::{decode_field, encode_field};

/// Load a field document from `path`
pub fn read_field_file(path: impl AsRef<Path>, config: &WireConfig) -> Result<Field> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read field document {}", path.display()))?;
    let field = decode_field(&json, config)
        .with_context(|| format!("invalid field document {}", path.display()))?;
    debug!("loaded field of height {} from {}", field.height(), path.display());
    Ok(field)
}

/// Write `field` as a document to `path`, replacing any existing file
pub fn write_field_file(path: impl AsRef<Path>, field: &Field, config: &WireConfig) -> Result<()> {
    let path = path.as_ref();
    let mut json = encode_field(field, config)?;
    json.push('\n');
    fs::write(path, json)
        .with_context(|| format!("failed to write field document {}", path.display()))?;
    debug!("saved field of height {} to {}", field.height(), path.display());
    Ok(())
}
