use gridrange_core::{CellContent, GridError, GridSnapshot, SparseGrid, Worksheet};
use gridrange_engine::{Coordinate, CoordinateRect, RangeError};
use pretty_assertions::assert_eq;

fn rect(r1: u32, c1: u32, r2: u32, c2: u32) -> CoordinateRect {
    CoordinateRect::new(r1, c1, r2, c2).unwrap()
}

#[test]
fn range_lookup_and_containment() {
    let sheet = Worksheet::new("Sheet1");
    let range = sheet.get_range("B2:D10").unwrap();
    assert_eq!(range.rect(), rect(2, 2, 10, 4));
    assert_eq!(range.contains(rect(3, 3, 3, 3)), Ok(true));

    let reversed = sheet.get_range("D10:B2").unwrap();
    assert_eq!(reversed.rect(), range.rect());
}

#[test]
fn used_range_widens_then_recomputes() {
    let sheet = Worksheet::new("Sheet1");
    sheet.get_cell(1, 1).unwrap().set(CellContent::Number(1.0)).unwrap();
    sheet.get_cell(5, 5).unwrap().set(CellContent::Number(2.0)).unwrap();
    assert_eq!(sheet.grid().used_rect(), Some(rect(1, 1, 5, 5)));

    sheet.get_cell(5, 5).unwrap().clear().unwrap();
    assert_eq!(sheet.grid().used_rect(), Some(rect(1, 1, 5, 5)));

    let recomputed = sheet.grid_mut().recompute_used_rect();
    assert_eq!(recomputed, Some(rect(1, 1, 1, 1)));
    assert_eq!(sheet.grid_mut().recompute_used_rect(), recomputed);
}

#[test]
fn merged_regions_guard_hidden_cells() {
    let sheet = Worksheet::new("Sheet1");
    sheet.get_range(rect(2, 2, 4, 4)).unwrap().merge().unwrap();
    assert!(matches!(
        sheet.get_range(rect(3, 3, 5, 5)).unwrap().merge(),
        Err(GridError::MergeConflict { .. })
    ));
    sheet.get_cell(2, 2).unwrap().set_input("anchor").unwrap();
    assert!(matches!(
        sheet.get_cell(3, 3).unwrap().set_input("hidden"),
        Err(GridError::MergedCellWrite { .. })
    ));
}

#[test]
fn offset_rejects_instead_of_clamping() {
    let sheet = Worksheet::new("Sheet1");
    let range = sheet.get_range(rect(1, 1, 3, 3)).unwrap();
    assert_eq!(range.offset(10, 0).unwrap().rect(), rect(11, 1, 13, 3));
    assert!(matches!(
        range.offset(-1, 0),
        Err(GridError::Range(RangeError::OutOfRange { .. }))
    ));
}

#[test]
fn views_follow_structure_edits() {
    let sheet = Worksheet::new("Sheet1");
    let a3 = sheet.get_cell(3, 1).unwrap();
    a3.set_input("moves").unwrap();
    sheet.get_range("A5:B6").unwrap().merge().unwrap();

    sheet.grid_mut().insert_rows(1, 2).unwrap();
    // Views address coordinates, not content.
    assert_eq!(a3.content(), Ok(CellContent::Empty));
    assert_eq!(
        sheet.get_cell(5, 1).unwrap().content(),
        Ok(CellContent::text("moves"))
    );
    assert_eq!(sheet.grid().merged_regions(), &[rect(7, 1, 8, 2)]);

    sheet.grid_mut().delete_columns(1, 1).unwrap();
    assert_eq!(sheet.grid().merged_regions(), &[rect(7, 1, 8, 1)]);
    assert_eq!(sheet.grid().used_rect(), None);
}

#[test]
fn snapshot_stream_round_trips_through_json() {
    let sheet = Worksheet::new("Sheet1");
    sheet.get_range("A1:C1").unwrap().fill(CellContent::Number(7.0)).unwrap();
    sheet.get_cell(2, 2).unwrap().set_input("'=not a formula").unwrap();
    sheet.get_range("E1:F2").unwrap().merge().unwrap();

    let json = serde_json::to_string_pretty(&sheet.snapshot().unwrap()).unwrap();
    let snapshot: GridSnapshot = serde_json::from_str(&json).unwrap();
    let copy = Worksheet::from_snapshot("Copy", snapshot).unwrap();

    let original: Vec<(Coordinate, CellContent)> =
        sheet.grid().entries().map(|(c, v)| (c, v.clone())).collect();
    let restored: Vec<(Coordinate, CellContent)> =
        copy.grid().entries().map(|(c, v)| (c, v.clone())).collect();
    assert_eq!(restored, original);
    assert_eq!(copy.grid().merged_regions(), sheet.grid().merged_regions());
}

#[test]
fn load_stream_into_fresh_grid() {
    let mut grid = SparseGrid::new();
    let entries = "A1 B7 C3"
        .split_whitespace()
        .map(|s| (s.parse::<Coordinate>().unwrap(), CellContent::text(s)));
    assert_eq!(grid.load(entries), Ok(3));
    assert_eq!(grid.used_rect(), Some(rect(1, 1, 7, 3)));
}
