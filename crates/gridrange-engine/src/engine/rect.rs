//! Normalized rectangles of coordinates.
//!
//! A [`CoordinateRect`] always satisfies `first_row <= last_row` and
//! `first_col <= last_col`, with every bound inside the engine limits.
//! Construction swaps reversed corners, so `D10:B2` and `B2:D10` build the
//! same rect.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::codec;
use super::coord::{Axis, Coordinate};
use super::error::{RangeError, Result};
use super::limits::{MAX_COLUMN, MAX_ROW, check_axis};
use super::notation::{ReferenceNotation, ReferenceStyle};

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[u32; 4]", into = "[u32; 4]")]
pub struct CoordinateRect {
    first_row: u32,
    first_col: u32,
    last_row: u32,
    last_col: u32,
}

impl CoordinateRect {
    /// Build a rect from two corners given as raw indices, in any order.
    pub fn new(first_row: u32, first_col: u32, last_row: u32, last_col: u32) -> Result<Self> {
        let a = Coordinate::new(first_row, first_col)?;
        let b = Coordinate::new(last_row, last_col)?;
        Ok(Self::from_corners(a, b))
    }

    /// Build a rect from signed bounds, rejecting any bound outside `[1, MAX]`.
    pub fn from_signed(first_row: i64, first_col: i64, last_row: i64, last_col: i64) -> Result<Self> {
        let first_row = check_axis(Axis::Row, first_row)?;
        let first_col = check_axis(Axis::Column, first_col)?;
        let last_row = check_axis(Axis::Row, last_row)?;
        let last_col = check_axis(Axis::Column, last_col)?;
        Ok(Self::normalized(first_row, first_col, last_row, last_col))
    }

    /// Rect spanning two coordinates (either corner order).
    pub fn from_corners(a: Coordinate, b: Coordinate) -> Self {
        Self::normalized(a.row(), a.col(), b.row(), b.col())
    }

    /// Degenerate 1x1 rect.
    pub fn single(coord: Coordinate) -> Self {
        Self::from_corners(coord, coord)
    }

    /// Every cell on the sheet.
    pub fn whole_sheet() -> Self {
        Self::normalized(1, 1, MAX_ROW, MAX_COLUMN)
    }

    pub(crate) fn normalized(r1: u32, c1: u32, r2: u32, c2: u32) -> Self {
        CoordinateRect {
            first_row: r1.min(r2),
            first_col: c1.min(c2),
            last_row: r1.max(r2),
            last_col: c1.max(c2),
        }
    }

    pub fn first_row(&self) -> u32 {
        self.first_row
    }

    pub fn first_col(&self) -> u32 {
        self.first_col
    }

    pub fn last_row(&self) -> u32 {
        self.last_row
    }

    pub fn last_col(&self) -> u32 {
        self.last_col
    }

    pub fn top_left(&self) -> Coordinate {
        Coordinate::new_unchecked(self.first_row, self.first_col)
    }

    pub fn bottom_right(&self) -> Coordinate {
        Coordinate::new_unchecked(self.last_row, self.last_col)
    }

    pub fn row_count(&self) -> u32 {
        self.last_row - self.first_row + 1
    }

    pub fn column_count(&self) -> u32 {
        self.last_col - self.first_col + 1
    }

    /// Number of cells; at most 2^34, so it always fits in `u64`.
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.column_count() as u64
    }

    pub fn is_single_cell(&self) -> bool {
        self.first_row == self.last_row && self.first_col == self.last_col
    }

    /// Spans every column (`1..=MAX_COLUMN`).
    pub fn is_full_row(&self) -> bool {
        self.first_col == 1 && self.last_col == MAX_COLUMN
    }

    /// Spans every row (`1..=MAX_ROW`).
    pub fn is_full_column(&self) -> bool {
        self.first_row == 1 && self.last_row == MAX_ROW
    }

    pub fn contains_coord(&self, coord: Coordinate) -> bool {
        (self.first_row..=self.last_row).contains(&coord.row())
            && (self.first_col..=self.last_col).contains(&coord.col())
    }

    /// The coordinate at absolute `(row, col)` if it lies inside this rect.
    pub fn coordinate_at(&self, row: u32, col: u32) -> Option<Coordinate> {
        let inside = (self.first_row..=self.last_row).contains(&row)
            && (self.first_col..=self.last_col).contains(&col);
        inside.then(|| Coordinate::new_unchecked(row, col))
    }

    /// Lazily enumerate every coordinate, row-major.
    ///
    /// Each call starts a fresh iterator; nothing is allocated up front.
    pub fn coordinates(&self) -> RectCoordinates {
        RectCoordinates {
            rect: *self,
            next: Some(self.top_left()),
        }
    }

    /// Format as A1 text without absolute markers.
    pub fn to_a1(&self) -> String {
        codec::format_a1(self, ReferenceStyle::RELATIVE, ReferenceStyle::RELATIVE)
    }

    /// Format in `notation`; see [`codec::format_reference`].
    pub fn format(&self, notation: ReferenceNotation, current_cell: Option<Coordinate>) -> Result<String> {
        codec::format_reference(self, notation, current_cell)
    }
}

impl From<Coordinate> for CoordinateRect {
    fn from(coord: Coordinate) -> Self {
        CoordinateRect::single(coord)
    }
}

impl TryFrom<[u32; 4]> for CoordinateRect {
    type Error = RangeError;

    fn try_from(value: [u32; 4]) -> Result<Self> {
        let [r1, c1, r2, c2] = value;
        CoordinateRect::new(r1, c1, r2, c2)
    }
}

impl From<CoordinateRect> for [u32; 4] {
    fn from(rect: CoordinateRect) -> Self {
        [rect.first_row, rect.first_col, rect.last_row, rect.last_col]
    }
}

impl std::str::FromStr for CoordinateRect {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self> {
        codec::parse_range_reference(s)
    }
}

impl fmt::Display for CoordinateRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// Row-major iterator over the coordinates of a rect.
#[derive(Clone, Debug)]
pub struct RectCoordinates {
    rect: CoordinateRect,
    next: Option<Coordinate>,
}

impl RectCoordinates {
    fn remaining(&self) -> u64 {
        match self.next {
            None => 0,
            Some(at) => {
                let full_rows_below = (self.rect.last_row - at.row()) as u64;
                let left_in_row = (self.rect.last_col - at.col() + 1) as u64;
                full_rows_below * self.rect.column_count() as u64 + left_in_row
            }
        }
    }
}

impl Iterator for RectCoordinates {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        let current = self.next?;
        self.next = if current.col() < self.rect.last_col {
            Some(Coordinate::new_unchecked(current.row(), current.col() + 1))
        } else if current.row() < self.rect.last_row {
            Some(Coordinate::new_unchecked(current.row() + 1, self.rect.first_col))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for RectCoordinates {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rect(r1: u32, c1: u32, r2: u32, c2: u32) -> CoordinateRect {
        CoordinateRect::new(r1, c1, r2, c2).unwrap()
    }

    #[test]
    fn test_new_normalizes_reversed_corners() {
        let r = rect(10, 4, 2, 2);
        assert_eq!(
            (r.first_row(), r.first_col(), r.last_row(), r.last_col()),
            (2, 2, 10, 4)
        );
        assert_eq!(r, rect(2, 2, 10, 4));
        // Mixed corners (top-right / bottom-left) normalize too.
        assert_eq!(rect(2, 4, 10, 2), r);
    }

    #[test]
    fn test_new_rejects_out_of_bounds() {
        assert!(CoordinateRect::new(0, 1, 1, 1).is_err());
        assert!(CoordinateRect::new(1, 1, MAX_ROW + 1, 1).is_err());
        assert!(CoordinateRect::from_signed(-1, 1, 1, 1).is_err());
    }

    #[test]
    fn test_shape_queries() {
        let r = rect(2, 2, 10, 4);
        assert_eq!(r.row_count(), 9);
        assert_eq!(r.column_count(), 3);
        assert_eq!(r.cell_count(), 27);
        assert!(!r.is_single_cell());
        assert!(rect(3, 3, 3, 3).is_single_cell());
        assert!(CoordinateRect::whole_sheet().is_full_row());
        assert!(CoordinateRect::whole_sheet().is_full_column());
        assert_eq!(CoordinateRect::whole_sheet().cell_count(), 17_179_869_184);
    }

    #[test]
    fn test_coordinates_row_major_and_restartable() {
        let r = rect(1, 1, 2, 3);
        let expected = vec!["A1", "B1", "C1", "A2", "B2", "C2"];
        let first: Vec<String> = r.coordinates().map(|c| c.to_string()).collect();
        let second: Vec<String> = r.coordinates().map(|c| c.to_string()).collect();
        assert_eq!(first, expected);
        assert_eq!(second, expected);
    }

    #[test]
    fn test_coordinates_size_hint_tracks_progress() {
        let mut iter = rect(1, 1, 3, 3).coordinates();
        assert_eq!(iter.size_hint(), (9, Some(9)));
        iter.next();
        iter.next();
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (5, Some(5)));
        assert_eq!(iter.by_ref().count(), 5);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_coordinates_on_huge_rect_is_lazy() {
        let first_three: Vec<String> = CoordinateRect::whole_sheet()
            .coordinates()
            .take(3)
            .map(|c| c.to_string())
            .collect();
        assert_eq!(first_three, vec!["A1", "B1", "C1"]);
    }

    #[test]
    fn test_coordinate_at() {
        let r = rect(2, 2, 4, 4);
        assert_eq!(r.coordinate_at(3, 4).map(|c| c.to_string()), Some("D3".to_string()));
        assert_eq!(r.coordinate_at(1, 3), None);
        assert_eq!(r.coordinate_at(3, 5), None);
    }

    #[test]
    fn test_display_and_parse() {
        let r: CoordinateRect = "d10:b2".parse().unwrap();
        assert_eq!(r.to_string(), "B2:D10");
        assert_eq!(rect(3, 3, 3, 3).to_string(), "C3");
    }
}
