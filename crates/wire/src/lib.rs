//! Wire module - persisting and transmitting fields
//!
//! Fields travel as small JSON documents that embed the linear symbol
//! encoding (one byte per cell, row-major, rows of 10). The encoding is the
//! contract shared with external codecs and solvers, so documents are
//! validated as strictly as direct field writes.
//!
//! # Document Shape
//!
//! ```text
//! {"type":"field","width":10,"height":2,"cells":"T              O    ","hash":"..."}
//! ```
//!
//! - `width` must be 10
//! - `height` must not exceed [`WireConfig::max_height`]
//! - `cells` must hold exactly `width * height` symbols from `" GIJLOSTZ"`
//! - `hash` (optional) is the FNV-1a 64 of `cells` as 16 hex digits
//!
//! # Environment Variables
//!
//! - `TETRA_FIELD_MAX_HEIGHT`: decode height limit (default: 1024)
//! - `TETRA_FIELD_PRETTY`: set to "1" or "true" for indented output
//! - `TETRA_FIELD_HASH`: set to "0" or "false" to omit the hash
//!
//! # Example
//!
//! ```
//! use tetra_field_wire::{decode_field, encode_field, WireConfig};
//! use tetra_field_wire::core::Field;
//!
//! let config = WireConfig::default();
//! let field: Field = "GGGG_GGGGG".parse().unwrap();
//! let json = encode_field(&field, &config).unwrap();
//! assert_eq!(decode_field(&json, &config).unwrap(), field);
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod hash;

pub use tetra_field_core as core;
pub use tetra_field_types as types;

pub use config::WireConfig;
pub use document::{decode_field, encode_field, FieldDocument, FieldType, WireError};
pub use file::{read_field_file, write_field_file};
pub use hash::field_hash;
