//! Field module - the growable playfield buffer
//!
//! The field is a 10-wide grid of [`Symbol`]s with a variable height.
//! Uses a flat vector for cache locality; rows are stored row-major.
//! Coordinates: (col, row) where col ranges 0..9 (left to right) and row starts
//! at 0 and grows as rows are appended. The linear index is `col + 10 * row`.
//!
//! Every accessor funnels through `Field::resolve`, and every raw byte write
//! through `validate_bytes`, so bounds and alphabet checks are done once and
//! always before the buffer is mutated.

use std::ops::{Bound, Range, RangeBounds};
use std::slice::ChunksExact;

use arrayvec::ArrayVec;
use log::trace;

use crate::types::{FieldError, Symbol, FIELD_WIDTH};

/// Resizable playfield - fixed 10 columns, height grows by whole rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Field {
    /// Flat vector of cells, row-major order (row * WIDTH + col)
    cells: Vec<Symbol>,
}

impl Field {
    pub const WIDTH: usize = FIELD_WIDTH;

    /// Create a field of `height` empty rows
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if `height * WIDTH` overflows `usize`.
    pub fn new(height: usize) -> Self {
        match Self::with_height(height) {
            Ok(field) => field,
            Err(_) => panic!("capacity overflow"),
        }
    }

    /// Create a field of `height` empty rows, rejecting heights whose cell
    /// count overflows `usize`
    pub fn with_height(height: usize) -> Result<Self, FieldError> {
        let len = cell_count(height)?;
        Ok(Self {
            cells: vec![Symbol::Empty; len],
        })
    }

    /// Create a field from a signed height, rejecting negative values
    pub fn try_new(height: isize) -> Result<Self, FieldError> {
        let height = usize::try_from(height).map_err(|_| {
            FieldError::InvalidArgument(format!("height must not be negative, got {}", height))
        })?;
        Self::with_height(height)
    }

    /// Create a field holding `initial` from index 0
    ///
    /// The height is the smallest number of rows that fits `initial`; the rest
    /// of the last row stays empty.
    pub fn from_initial(initial: &[Symbol]) -> Self {
        let mut field = Self::new(initial.len().div_ceil(Self::WIDTH));
        field.cells[..initial.len()].copy_from_slice(initial);
        field
    }

    /// Like [`Field::from_initial`], decoding raw wire bytes
    pub fn from_initial_bytes(initial: &[u8]) -> Result<Self, FieldError> {
        let symbols = validate_bytes(initial)?;
        Ok(Self::from_initial(&symbols))
    }

    pub fn width(&self) -> usize {
        Self::WIDTH
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.len() / Self::WIDTH
    }

    /// Number of cells, always a multiple of the width
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Resolve any range of linear indices against the current buffer
    fn resolve<R: RangeBounds<usize>>(&self, range: R) -> Result<Range<usize>, FieldError> {
        let len = self.cells.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => Some(s),
            Bound::Excluded(&s) => s.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.checked_add(1),
            Bound::Excluded(&e) => Some(e),
            Bound::Unbounded => Some(len),
        };

        match (start, end) {
            (Some(start), Some(end)) if start <= end && end <= len => Ok(start..end),
            (start, end) => Err(FieldError::OutOfRange {
                start: start.unwrap_or(usize::MAX),
                end: end.unwrap_or(usize::MAX),
                len,
            }),
        }
    }

    /// Linear index of (col, row)
    fn coord_index(&self, col: usize, row: usize) -> Result<usize, FieldError> {
        let index = row
            .checked_mul(Self::WIDTH)
            .and_then(|base| base.checked_add(col));
        match index {
            Some(index) if col < Self::WIDTH && index < self.cells.len() => Ok(index),
            _ => Err(FieldError::OutOfRange {
                start: index.unwrap_or(usize::MAX),
                end: index.map_or(usize::MAX, |i| i.saturating_add(1)),
                len: self.cells.len(),
            }),
        }
    }

    /// Get the symbol at a linear index
    pub fn get(&self, index: usize) -> Result<Symbol, FieldError> {
        let range = self.resolve(index..index.saturating_add(1))?;
        Ok(self.cells[range.start])
    }

    /// Get the symbol at (col, row)
    pub fn get_at(&self, col: usize, row: usize) -> Result<Symbol, FieldError> {
        let index = self.coord_index(col, row)?;
        self.get(index)
    }

    /// Contiguous cells in `range`, in buffer order
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<&[Symbol], FieldError> {
        let range = self.resolve(range)?;
        Ok(&self.cells[range])
    }

    /// The cells of one row
    pub fn row(&self, row: usize) -> Result<&[Symbol], FieldError> {
        let start = row.saturating_mul(Self::WIDTH);
        self.slice(start..start.saturating_add(Self::WIDTH))
    }

    /// Iterate over rows in increasing order
    ///
    /// Each call walks the buffer as it is now.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            rows: self.cells.chunks_exact(Self::WIDTH),
        }
    }

    /// Set the symbol at a linear index
    pub fn set(&mut self, index: usize, symbol: Symbol) -> Result<(), FieldError> {
        self.write(index..index.saturating_add(1), &[symbol])
    }

    /// Set the symbol at (col, row)
    pub fn set_at(&mut self, col: usize, row: usize, symbol: Symbol) -> Result<(), FieldError> {
        let index = self.coord_index(col, row)?;
        self.set(index, symbol)
    }

    /// Set a raw wire byte at a linear index
    pub fn set_byte(&mut self, index: usize, value: u8) -> Result<(), FieldError> {
        self.write_bytes(index..index.saturating_add(1), &[value])
    }

    /// Overwrite `range` with `symbols`
    ///
    /// The lengths must match exactly; on error nothing is written.
    pub fn write<R: RangeBounds<usize>>(
        &mut self,
        range: R,
        symbols: &[Symbol],
    ) -> Result<(), FieldError> {
        let range = self.resolve(range)?;
        if range.len() != symbols.len() {
            return Err(FieldError::LengthMismatch {
                expected: range.len(),
                got: symbols.len(),
            });
        }
        self.cells[range].copy_from_slice(symbols);
        Ok(())
    }

    /// Overwrite `range` with raw wire bytes
    ///
    /// Range, length and alphabet are all checked before the first cell changes.
    pub fn write_bytes<R: RangeBounds<usize>>(
        &mut self,
        range: R,
        bytes: &[u8],
    ) -> Result<(), FieldError> {
        let range = self.resolve(range)?;
        if range.len() != bytes.len() {
            return Err(FieldError::LengthMismatch {
                expected: range.len(),
                got: bytes.len(),
            });
        }
        let symbols = validate_bytes(bytes)?;
        self.cells[range].copy_from_slice(&symbols);
        Ok(())
    }

    /// Append `count` empty rows
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if the new cell count overflows `usize`;
    /// the field is left untouched in that case.
    pub fn increase_lines(&mut self, count: usize) {
        if self.try_increase_lines(count).is_err() {
            panic!("capacity overflow");
        }
    }

    /// Append `count` empty rows, rejecting growth whose cell count overflows
    /// `usize`
    pub fn try_increase_lines(&mut self, count: usize) -> Result<(), FieldError> {
        if count == 0 {
            return Ok(());
        }
        let new_len = cell_count(count)?
            .checked_add(self.cells.len())
            .ok_or_else(|| {
                FieldError::InvalidArgument(format!(
                    "adding {} rows to height {} overflows the cell count",
                    count,
                    self.height()
                ))
            })?;
        self.cells.resize(new_len, Symbol::Empty);
        trace!("field grew by {} rows to height {}", count, self.height());
        Ok(())
    }

    /// Append whole rows whose cells are exactly `rows`
    pub fn extend(&mut self, rows: &[Symbol]) -> Result<(), FieldError> {
        if rows.len() % Self::WIDTH != 0 {
            return Err(FieldError::InvalidArgument(format!(
                "extension of {} cells is not a whole number of {}-wide rows",
                rows.len(),
                Self::WIDTH
            )));
        }
        let start = self.cells.len();
        self.try_increase_lines(rows.len() / Self::WIDTH)?;
        self.write(start.., rows)
    }

    /// Like [`Field::extend`], decoding raw wire bytes
    pub fn extend_bytes(&mut self, bytes: &[u8]) -> Result<(), FieldError> {
        if bytes.len() % Self::WIDTH != 0 {
            return Err(FieldError::InvalidArgument(format!(
                "extension of {} cells is not a whole number of {}-wide rows",
                bytes.len(),
                Self::WIDTH
            )));
        }
        let symbols = validate_bytes(bytes)?;
        self.extend(&symbols)
    }

    /// Reflect every row left-to-right, swapping J/L and S/Z
    pub fn mirror(&mut self) {
        for row in self.cells.chunks_exact_mut(Self::WIDTH) {
            let reflected: ArrayVec<Symbol, FIELD_WIDTH> =
                row.iter().rev().map(|symbol| symbol.mirror()).collect();
            row.copy_from_slice(&reflected);
        }
        trace!("mirrored field of height {}", self.height());
    }

    /// Mirrored copy of this field
    pub fn mirrored(&self) -> Self {
        let mut field = self.clone();
        field.mirror();
        field
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Linear wire encoding, one byte per cell
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|symbol| symbol.as_byte()).collect()
    }
}

/// Number of cells in `rows` whole rows
fn cell_count(rows: usize) -> Result<usize, FieldError> {
    rows.checked_mul(FIELD_WIDTH).ok_or_else(|| {
        FieldError::InvalidArgument(format!("{} rows overflow the cell count", rows))
    })
}

/// Decode a whole byte slice, failing on the first byte outside the alphabet
fn validate_bytes(bytes: &[u8]) -> Result<Vec<Symbol>, FieldError> {
    bytes.iter().map(|&b| Symbol::try_from(b)).collect()
}

/// Iterator over the rows of a [`Field`], see [`Field::lines`]
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rows: ChunksExact<'a, Symbol>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [Symbol];

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl DoubleEndedIterator for Lines<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.rows.next_back()
    }
}

impl ExactSizeIterator for Lines<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bounds() {
        let field = Field::new(2);
        assert_eq!(field.resolve(..), Ok(0..20));
        assert_eq!(field.resolve(5..), Ok(5..20));
        assert_eq!(field.resolve(..=9), Ok(0..10));
        assert_eq!(field.resolve(20..20), Ok(20..20));
        assert_eq!(
            field.resolve(15..21),
            Err(FieldError::OutOfRange {
                start: 15,
                end: 21,
                len: 20
            })
        );
        assert!(field.resolve(..=usize::MAX).is_err());
    }

    #[test]
    fn test_reversed_range_rejected() {
        let field = Field::new(1);
        #[allow(clippy::reversed_empty_ranges)]
        let err = field.resolve(6..3).unwrap_err();
        assert_eq!(err.code(), "out_of_range");
    }

    #[test]
    fn test_coord_index_calculation() {
        let field = Field::new(20);
        assert_eq!(field.coord_index(0, 0), Ok(0));
        assert_eq!(field.coord_index(9, 0), Ok(9));
        assert_eq!(field.coord_index(0, 1), Ok(10));
        assert_eq!(field.coord_index(9, 19), Ok(199));
        assert!(field.coord_index(10, 0).is_err());
        assert!(field.coord_index(0, 20).is_err());
        assert!(field.coord_index(0, usize::MAX).is_err());
    }

    #[test]
    fn test_flat_layout() {
        let mut field = Field::new(11);
        field.set_at(0, 0, Symbol::I).unwrap();
        field.set_at(5, 10, Symbol::T).unwrap();

        assert_eq!(field.cells[0], Symbol::I);
        assert_eq!(field.cells[10 * 10 + 5], Symbol::T);
    }

    #[test]
    fn test_cell_count_overflow() {
        assert_eq!(cell_count(3), Ok(30));
        assert!(matches!(
            cell_count(usize::MAX / 10 + 1),
            Err(FieldError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_bytes_reports_first_bad_byte() {
        assert_eq!(
            validate_bytes(b"GG?x"),
            Err(FieldError::InvalidSymbol { value: b'?' })
        );
        assert_eq!(validate_bytes(b" J"), Ok(vec![Symbol::Empty, Symbol::J]));
    }
}
