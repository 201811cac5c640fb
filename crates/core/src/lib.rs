//! Core field module - the playfield buffer, pure and testable
//!
//! This crate contains the board representation that solvers and codecs are
//! built on. It performs no I/O and spawns no threads.
//!
//! - **Owned**: each [`Field`] exclusively owns its buffer; search branches
//!   clone fields instead of sharing one
//! - **Checked**: every index, range and raw byte is validated before the
//!   buffer changes
//! - **Compact**: one byte-sized [`Symbol`](types::Symbol) per cell, row-major
//!
//! # Module Structure
//!
//! - [`field`]: the 10-wide, growable grid with coordinate and range access,
//!   growth and mirroring
//! - [`notation`]: human-readable text notation (`Display` / `FromStr`)
//!
//! # Example
//!
//! ```
//! use tetra_field_core::Field;
//! use tetra_field_core::types::Symbol;
//!
//! let mut field = Field::new(2);
//! field.set_at(0, 0, Symbol::J).unwrap();
//! field.increase_lines(1);
//! assert_eq!(field.height(), 3);
//!
//! field.mirror();
//! assert_eq!(field.get_at(9, 0), Ok(Symbol::L));
//! ```

pub mod field;
pub mod notation;

pub use tetra_field_types as types;

pub use field::{Field, Lines};
