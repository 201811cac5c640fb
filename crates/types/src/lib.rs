//! Core types module - field symbols, dimensions and errors
//!
//! This module defines the fundamental types shared by every crate in the
//! workspace. All types are pure data structures with no external dependencies,
//! so they can be used by the field buffer, the wire codec, and any external
//! solver alike.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9), fixed
//! - **Height**: variable, grows by whole rows appended after the last row
//!
//! # Symbol Encoding
//!
//! Each cell is one byte from a closed alphabet of nine codes:
//!
//! | Symbol | Byte | Mirror |
//! |--------|------|--------|
//! | `Empty` | `b' '` | `Empty` |
//! | `G` | `b'G'` | `G` |
//! | `I` | `b'I'` | `I` |
//! | `J` | `b'J'` | `L` |
//! | `L` | `b'L'` | `J` |
//! | `O` | `b'O'` | `O` |
//! | `S` | `b'S'` | `Z` |
//! | `T` | `b'T'` | `T` |
//! | `Z` | `b'Z'` | `S` |
//!
//! # Examples
//!
//! ```
//! use tetra_field_types::{FieldError, Symbol, FIELD_WIDTH};
//!
//! assert_eq!(Symbol::try_from(b'J'), Ok(Symbol::J));
//! assert_eq!(Symbol::J.mirror(), Symbol::L);
//! assert_eq!(
//!     Symbol::try_from(b'x'),
//!     Err(FieldError::InvalidSymbol { value: b'x' })
//! );
//! assert_eq!(FIELD_WIDTH, 10);
//! ```

use std::fmt;

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: usize = 10;

/// The nine cell symbols
///
/// Discriminants are the wire bytes, so a `Symbol` converts to its encoding
/// with a plain `as u8` cast.
/// - **Empty**: no mino
/// - **G**: generic / garbage mino
/// - **I, J, L, O, S, T, Z**: mino of the named tetromino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Symbol {
    #[default]
    Empty = b' ',
    G = b'G',
    I = b'I',
    J = b'J',
    L = b'L',
    O = b'O',
    S = b'S',
    T = b'T',
    Z = b'Z',
}

impl Symbol {
    /// Every symbol, in alphabet order
    pub const ALL: [Symbol; 9] = [
        Symbol::Empty,
        Symbol::G,
        Symbol::I,
        Symbol::J,
        Symbol::L,
        Symbol::O,
        Symbol::S,
        Symbol::T,
        Symbol::Z,
    ];

    /// Decode one wire byte
    ///
    /// # Examples
    ///
    /// ```
    /// use tetra_field_types::Symbol;
    ///
    /// assert_eq!(Symbol::from_byte(b' '), Some(Symbol::Empty));
    /// assert_eq!(Symbol::from_byte(b'T'), Some(Symbol::T));
    /// assert_eq!(Symbol::from_byte(b't'), None);
    /// ```
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            b' ' => Some(Symbol::Empty),
            b'G' => Some(Symbol::G),
            b'I' => Some(Symbol::I),
            b'J' => Some(Symbol::J),
            b'L' => Some(Symbol::L),
            b'O' => Some(Symbol::O),
            b'S' => Some(Symbol::S),
            b'T' => Some(Symbol::T),
            b'Z' => Some(Symbol::Z),
            _ => None,
        }
    }

    /// Wire byte of this symbol
    #[inline(always)]
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Character used by the text notation (`_` for empty)
    pub fn notation_char(self) -> char {
        match self {
            Symbol::Empty => '_',
            other => other.as_byte() as char,
        }
    }

    /// Parse a text notation character; accepts `_` and `' '` for empty
    pub fn from_notation_char(c: char) -> Option<Self> {
        match c {
            '_' => Some(Symbol::Empty),
            c if c.is_ascii() => Self::from_byte(c as u8),
            _ => None,
        }
    }

    /// Horizontal reflection of this symbol
    ///
    /// J and L swap, S and Z swap, everything else is symmetric.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetra_field_types::Symbol;
    ///
    /// assert_eq!(Symbol::S.mirror(), Symbol::Z);
    /// assert_eq!(Symbol::T.mirror(), Symbol::T);
    /// ```
    pub fn mirror(self) -> Self {
        match self {
            Symbol::Empty => Symbol::Empty,
            Symbol::G => Symbol::G,
            Symbol::I => Symbol::I,
            Symbol::J => Symbol::L,
            Symbol::L => Symbol::J,
            Symbol::O => Symbol::O,
            Symbol::S => Symbol::Z,
            Symbol::T => Symbol::T,
            Symbol::Z => Symbol::S,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Symbol::Empty
    }
}

impl TryFrom<u8> for Symbol {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, FieldError> {
        Symbol::from_byte(value).ok_or(FieldError::InvalidSymbol { value })
    }
}

impl From<Symbol> for u8 {
    fn from(value: Symbol) -> Self {
        value.as_byte()
    }
}

impl From<Symbol> for char {
    fn from(value: Symbol) -> Self {
        value.as_byte() as char
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Errors raised by field construction, access and mutation
///
/// Every failure is reported before the field is touched, so an `Err` never
/// leaves a partially written buffer behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A byte outside the nine-symbol alphabet
    InvalidSymbol { value: u8 },
    /// Index, coordinate or range `start..end` outside a buffer of `len` cells
    OutOfRange { start: usize, end: usize, len: usize },
    /// Range write whose source length differs from the target range
    LengthMismatch { expected: usize, got: usize },
    /// Negative height, length that is not a whole number of rows, and the like
    InvalidArgument(String),
}

impl FieldError {
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::InvalidSymbol { .. } => "invalid_symbol",
            FieldError::OutOfRange { .. } => "out_of_range",
            FieldError::LengthMismatch { .. } => "length_mismatch",
            FieldError::InvalidArgument(_) => "invalid_argument",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidSymbol { value } => {
                write!(f, "{}: byte {:#04x} is not a field symbol", self.code(), value)
            }
            FieldError::OutOfRange { start, end, len } => write!(
                f,
                "{}: range {}..{} exceeds field of {} cells",
                self.code(),
                start,
                end,
                len
            ),
            FieldError::LengthMismatch { expected, got } => write!(
                f,
                "{}: expected {} cells, got {}",
                self.code(),
                expected,
                got
            ),
            FieldError::InvalidArgument(reason) => write!(f, "{}: {}", self.code(), reason),
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_decoding_matches_discriminants() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_byte(symbol as u8), Some(symbol));
        }
        for value in 0..=u8::MAX {
            let decoded = Symbol::from_byte(value);
            assert_eq!(decoded.is_some(), b" GIJLOSTZ".contains(&value));
        }
    }

    #[test]
    fn mirror_table_is_an_involution() {
        for symbol in Symbol::ALL {
            assert_eq!(symbol.mirror().mirror(), symbol);
        }
        assert_eq!(Symbol::J.mirror(), Symbol::L);
        assert_eq!(Symbol::L.mirror(), Symbol::J);
        assert_eq!(Symbol::S.mirror(), Symbol::Z);
        assert_eq!(Symbol::Z.mirror(), Symbol::S);
        for fixed in [Symbol::Empty, Symbol::G, Symbol::I, Symbol::O, Symbol::T] {
            assert_eq!(fixed.mirror(), fixed);
        }
    }

    #[test]
    fn notation_chars() {
        assert_eq!(Symbol::Empty.notation_char(), '_');
        assert_eq!(Symbol::Z.notation_char(), 'Z');
        assert_eq!(Symbol::from_notation_char('_'), Some(Symbol::Empty));
        assert_eq!(Symbol::from_notation_char(' '), Some(Symbol::Empty));
        assert_eq!(Symbol::from_notation_char('é'), None);
        assert_eq!(Symbol::from_notation_char('g'), None);
    }

    #[test]
    fn error_display_includes_code() {
        let err = FieldError::LengthMismatch { expected: 3, got: 2 };
        assert_eq!(err.to_string(), "length_mismatch: expected 3 cells, got 2");
        let err = FieldError::InvalidSymbol { value: b'x' };
        assert_eq!(err.to_string(), "invalid_symbol: byte 0x78 is not a field symbol");
    }
}
