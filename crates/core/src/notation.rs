//! Text notation for fields
//!
//! One line per row, row 0 first, each exactly [`FIELD_WIDTH`] characters.
//! `_` marks an empty cell (a space is accepted too when parsing), and the
//! piece letters `GIJLOSTZ` mark filled cells.
//!
//! ```
//! use tetra_field_core::Field;
//! use tetra_field_core::types::Symbol;
//!
//! let field: Field = "T_________\n_____O____".parse().unwrap();
//! assert_eq!(field.height(), 2);
//! assert_eq!(field.get_at(5, 1), Ok(Symbol::O));
//! assert_eq!(field.to_string(), "T_________\n_____O____");
//! ```

use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::field::Field;
use crate::types::{FieldError, Symbol, FIELD_WIDTH};

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.lines().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for symbol in row {
                write!(f, "{}", symbol.notation_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, FieldError> {
        let body = s.strip_suffix('\n').unwrap_or(s);
        if body.is_empty() {
            return Ok(Field::new(0));
        }

        let mut cells = Vec::with_capacity(body.len());
        for (row_index, line) in body.split('\n').enumerate() {
            let row = parse_row(row_index, line)?;
            cells.extend_from_slice(&row);
        }
        Ok(Field::from_initial(&cells))
    }
}

fn parse_row(row_index: usize, line: &str) -> Result<ArrayVec<Symbol, FIELD_WIDTH>, FieldError> {
    let mut row = ArrayVec::new();
    for c in line.chars() {
        let symbol = Symbol::from_notation_char(c).ok_or_else(|| {
            // First byte of the character's UTF-8 encoding.
            let mut buf = [0u8; 4];
            FieldError::InvalidSymbol {
                value: c.encode_utf8(&mut buf).as_bytes()[0],
            }
        })?;
        if row.try_push(symbol).is_err() {
            return Err(row_width_error(row_index, line.chars().count()));
        }
    }
    if row.len() != FIELD_WIDTH {
        return Err(row_width_error(row_index, row.len()));
    }
    Ok(row)
}

fn row_width_error(row_index: usize, width: usize) -> FieldError {
    FieldError::InvalidArgument(format!(
        "row {} has {} cells, expected {}",
        row_index, width, FIELD_WIDTH
    ))
}
