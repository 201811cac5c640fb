//! Tetra field (workspace facade crate).
//!
//! Exposes the `tetra_field::{core,types,wire}` API while the implementation
//! lives in dedicated crates under `crates/`.

pub use tetra_field_core as core;
pub use tetra_field_types as types;
pub use tetra_field_wire as wire;

pub use tetra_field_core::{Field, Lines};
pub use tetra_field_types::{FieldError, Symbol, FIELD_WIDTH};
