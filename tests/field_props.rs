use proptest::prelude::*;
use tetra_field::types::{FieldError, Symbol, FIELD_WIDTH};
use tetra_field::Field;

fn arb_symbol() -> impl Strategy<Value = Symbol> {
    prop::sample::select(Symbol::ALL.to_vec())
}

fn arb_field() -> impl Strategy<Value = Field> {
    prop::collection::vec(arb_symbol(), 0..120).prop_map(|cells| Field::from_initial(&cells))
}

fn arb_rows() -> impl Strategy<Value = Vec<Symbol>> {
    (0usize..6).prop_flat_map(|n| prop::collection::vec(arb_symbol(), n * FIELD_WIDTH))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn new_field_is_empty(height in 0usize..64) {
        let field = Field::new(height);
        prop_assert_eq!(field.height(), height);
        prop_assert!(field.cells().iter().all(|s| s.is_empty()));
    }

    #[test]
    fn from_initial_height_is_ceiling(cells in prop::collection::vec(arb_symbol(), 0..120)) {
        let field = Field::from_initial(&cells);
        prop_assert_eq!(field.height(), cells.len().div_ceil(FIELD_WIDTH));
        prop_assert_eq!(field.slice(..cells.len()).unwrap(), cells.as_slice());
        prop_assert!(field.slice(cells.len()..).unwrap().iter().all(|s| s.is_empty()));
    }

    #[test]
    fn extend_appends_exact_rows(mut field in arb_field(), rows in arb_rows()) {
        let before = field.clone();
        field.extend(&rows).unwrap();
        prop_assert_eq!(field.height(), before.height() + rows.len() / FIELD_WIDTH);
        prop_assert_eq!(field.slice(field.len() - rows.len()..).unwrap(), rows.as_slice());
        prop_assert_eq!(field.slice(..before.len()).unwrap(), before.cells());
    }

    #[test]
    fn mirror_is_involution(field in arb_field()) {
        let mut mirrored = field.clone();
        mirrored.mirror();
        mirrored.mirror();
        prop_assert_eq!(mirrored, field);
    }

    #[test]
    fn mirror_reflects_and_remaps_each_row(field in arb_field()) {
        let mirrored = field.mirrored();
        prop_assert_eq!(mirrored.height(), field.height());
        for (row, reflected) in field.lines().zip(mirrored.lines()) {
            let expected: Vec<Symbol> = row.iter().rev().map(|s| s.mirror()).collect();
            prop_assert_eq!(reflected, expected.as_slice());
        }
    }

    #[test]
    fn mismatched_write_leaves_buffer(
        mut field in arb_field(),
        start in 0usize..60,
        len in 0usize..20,
        extra in 1usize..5,
    ) {
        prop_assume!(start + len <= field.len());
        let before = field.to_bytes();
        let source = vec![Symbol::G; len + extra];
        let err = field.write(start..start + len, &source).unwrap_err();
        prop_assert_eq!(err, FieldError::LengthMismatch { expected: len, got: len + extra });
        prop_assert_eq!(field.to_bytes(), before);
    }

    #[test]
    fn invalid_byte_leaves_buffer(mut field in arb_field(), index in 0usize..120, value in any::<u8>()) {
        prop_assume!(Symbol::from_byte(value).is_none());
        prop_assume!(index < field.len());
        let before = field.to_bytes();
        prop_assert_eq!(field.set_byte(index, value), Err(FieldError::InvalidSymbol { value }));

        let mut source = vec![b'G'; field.len() - index];
        source[0] = value;
        prop_assert!(field.write_bytes(index.., &source).is_err());
        prop_assert_eq!(field.to_bytes(), before);
    }

    #[test]
    fn text_notation_roundtrip(field in arb_field()) {
        let parsed: Field = field.to_string().parse().unwrap();
        prop_assert_eq!(parsed, field);
    }
}
