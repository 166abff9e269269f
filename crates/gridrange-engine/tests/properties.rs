//! Round-trip, idempotence and containment properties of the addressing engine.

use gridrange_engine::engine::{
    Coordinate, CoordinateRect, MAX_COLUMN, MAX_ROW, NotationKind, RangeError, ReferenceNotation,
    ReferenceStyle, column_index_to_name, column_name_to_index, format_reference,
    parse_range_reference, parse_reference,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn any_coord() -> impl Strategy<Value = Coordinate> {
    (1u32..=MAX_ROW, 1u32..=MAX_COLUMN).prop_map(|(row, col)| Coordinate::new(row, col).unwrap())
}

fn any_rect() -> impl Strategy<Value = CoordinateRect> {
    (any_coord(), any_coord()).prop_map(|(a, b)| CoordinateRect::from_corners(a, b))
}

fn any_style() -> impl Strategy<Value = ReferenceStyle> {
    (any::<bool>(), any::<bool>()).prop_map(|(row, col)| ReferenceStyle::new(row, col))
}

proptest! {
    #[test]
    fn column_name_roundtrip(col in 1u32..=MAX_COLUMN) {
        let name = column_index_to_name(col).unwrap();
        prop_assert_eq!(column_name_to_index(&name).unwrap(), col);
        prop_assert_eq!(column_name_to_index(&name.to_ascii_lowercase()).unwrap(), col);
    }

    #[test]
    fn a1_format_parse_roundtrip(rect in any_rect(), style in any_style()) {
        let text = format_reference(&rect, ReferenceNotation::A1(style), None).unwrap();
        prop_assert_eq!(parse_range_reference(&text).unwrap(), rect);
    }

    #[test]
    fn a1_parse_format_normalizes(a in any_coord(), b in any_coord()) {
        // Written in arbitrary corner order and lowercase, formatting yields
        // the normalized uppercase top-left:bottom-right form.
        let text = format!("{}:{}", a, b).to_ascii_lowercase();
        let rect = parse_range_reference(&text).unwrap();
        let formatted = format_reference(&rect, ReferenceNotation::A1(ReferenceStyle::RELATIVE), None).unwrap();
        let expected = if rect.is_single_cell() {
            rect.top_left().to_string()
        } else {
            format!("{}:{}", rect.top_left(), rect.bottom_right())
        };
        prop_assert_eq!(formatted, expected);
    }

    #[test]
    fn r1c1_roundtrip(rect in any_rect(), style in any_style(), origin in any_coord()) {
        let text = format_reference(&rect, ReferenceNotation::R1C1(style), Some(origin)).unwrap();
        prop_assert_eq!(NotationKind::detect(&text), NotationKind::R1C1);
        let parsed = parse_reference(&text, NotationKind::R1C1, Some(origin)).unwrap();
        prop_assert_eq!(parsed.rect, rect);
    }

    #[test]
    fn union_and_intersect_are_idempotent(r in any_rect()) {
        prop_assert_eq!(r.union(&r), r);
        prop_assert_eq!(r.intersect(&r), Some(r));
        prop_assert!(r.contains(&r));
    }

    #[test]
    fn intersection_is_contained_in_both(a in any_rect(), b in any_rect()) {
        match a.intersect(&b) {
            Some(i) => {
                prop_assert!(a.intersects(&b));
                prop_assert!(a.contains(&i));
                prop_assert!(b.contains(&i));
            }
            None => prop_assert!(!a.intersects(&b)),
        }
        let u = a.union(&b);
        prop_assert!(u.contains(&a));
        prop_assert!(u.contains(&b));
    }

    #[test]
    fn offset_never_clamps(r in any_rect(), dr in -2_000_000i64..2_000_000, dc in -20_000i64..20_000) {
        match r.offset(dr, dc) {
            Ok(moved) => {
                prop_assert_eq!(moved.row_count(), r.row_count());
                prop_assert_eq!(moved.column_count(), r.column_count());
                prop_assert_eq!(moved.first_row() as i64, r.first_row() as i64 + dr);
                prop_assert_eq!(moved.first_col() as i64, r.first_col() as i64 + dc);
            }
            Err(err) => {
                let is_out_of_range = matches!(err, RangeError::OutOfRange { .. });
                prop_assert!(is_out_of_range);
            }
        }
    }
}

#[test]
fn scenario_contains_after_parse() {
    let rect = parse_range_reference("B2:D10").unwrap();
    assert_eq!(rect, CoordinateRect::new(2, 2, 10, 4).unwrap());
    assert!(rect.contains(&CoordinateRect::new(3, 3, 3, 3).unwrap()));
}

#[test]
fn scenario_reversed_corners() {
    assert_eq!(
        parse_range_reference("D10:B2").unwrap(),
        parse_range_reference("B2:D10").unwrap()
    );
}

#[test]
fn scenario_offset() {
    let r = CoordinateRect::new(1, 1, 3, 3).unwrap();
    assert_eq!(r.offset(10, 0).unwrap(), CoordinateRect::new(11, 1, 13, 3).unwrap());
    assert!(matches!(r.offset(-1, 0), Err(RangeError::OutOfRange { .. })));
}
