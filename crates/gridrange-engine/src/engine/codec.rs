//! Reference parsing and formatting.
//!
//! Converts between reference text and structured coordinates in both
//! notations:
//!
//! - A1: `C7`, `$B$2:D10`, and the entire-row/column shorthands `3:5`, `C:D`
//! - R1C1: `R2C3`, `R[-1]C[2]:R5C5`, where bracketed numbers are offsets from
//!   a current cell
//!
//! Column names use bijective base-26 (A=1 .. Z=26, AA=27): there is no zero
//! digit, so a carry happens one position early compared to plain base-26.
//!
//! # Examples
//!
//! ```
//! use gridrange_engine::engine::{parse_range_reference, column_index_to_name};
//!
//! let rect = parse_range_reference("D10:B2").unwrap();
//! assert_eq!((rect.first_row(), rect.first_col()), (2, 2));
//! assert_eq!(rect.to_string(), "B2:D10");
//! assert_eq!(column_index_to_name(703).unwrap(), "AAA");
//! ```

use regex::Regex;
use std::fmt::Write as _;
use std::sync::OnceLock;

use super::coord::{Axis, Coordinate};
use super::error::{RangeError, Result};
use super::limits::{MAX_COLUMN, MAX_COLUMN_NAME_LEN, MAX_ROW, check_axis};
use super::notation::{NotationKind, RangeReference, ReferenceNotation, ReferenceStyle, Shorthand};
use super::rect::CoordinateRect;

/// A single parsed A1 cell reference.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct CellReference {
    pub coord: Coordinate,
    pub style: ReferenceStyle,
}

impl CellReference {
    pub fn absolute_row(&self) -> bool {
        self.style.absolute_row
    }

    pub fn absolute_column(&self) -> bool {
        self.style.absolute_column
    }
}

/// Letters for a column index with no bounds check (1 -> A, 26 -> Z, 27 -> AA).
pub(crate) fn column_letters(col: u32) -> String {
    let mut buf = Vec::with_capacity(MAX_COLUMN_NAME_LEN);
    let mut n = col;
    while n > 0 {
        n -= 1;
        buf.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    buf.reverse();
    buf.into_iter().map(char::from).collect()
}

/// Convert a 1-based column index to its letter name.
pub fn column_index_to_name(index: u32) -> Result<String> {
    let col = check_axis(Axis::Column, index as i64)?;
    Ok(column_letters(col))
}

/// Convert a column name (case-insensitive) to its 1-based index.
pub fn column_name_to_index(name: &str) -> Result<u32> {
    if name.is_empty() {
        return Err(RangeError::invalid_reference(name, "column name is empty"));
    }
    if !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(RangeError::invalid_reference(
            name,
            "column name must contain only letters",
        ));
    }
    if name.len() > MAX_COLUMN_NAME_LEN {
        return Err(RangeError::invalid_reference(
            name,
            format!("column name longer than {MAX_COLUMN_NAME_LEN} letters"),
        ));
    }

    let mut col_acc = 0i64;
    for c in name.bytes() {
        let digit = (c.to_ascii_uppercase() - b'A') as i64 + 1;
        col_acc = col_acc * 26 + digit;
    }
    check_axis(Axis::Column, col_acc)
}

/// Parse the digits of a row number.
fn parse_row_number(reference: &str, digits: &str) -> Result<u32> {
    let row = digits
        .parse::<u32>()
        .map_err(|_| RangeError::invalid_reference(reference, "row number is too large"))?;
    if row == 0 {
        return Err(RangeError::invalid_reference(reference, "row number must be at least 1"));
    }
    if digits.starts_with('0') {
        return Err(RangeError::invalid_reference(reference, "row number has a leading zero"));
    }
    check_axis(Axis::Row, row as i64)
}

fn a1_cell_re() -> &'static Regex {
    static CELL_RE: OnceLock<Regex> = OnceLock::new();
    CELL_RE.get_or_init(|| {
        Regex::new(r"^(?<col_abs>\$?)(?<letters>[A-Za-z]+)(?<row_abs>\$?)(?<digits>[0-9]+)$")
            .expect("A1 cell regex must compile")
    })
}

fn a1_side_re() -> &'static Regex {
    static SIDE_RE: OnceLock<Regex> = OnceLock::new();
    SIDE_RE.get_or_init(|| {
        Regex::new(r"^(?:(?<col_abs>\$?)(?<letters>[A-Za-z]+))?(?:(?<row_abs>\$?)(?<digits>[0-9]+))?$")
            .expect("A1 range side regex must compile")
    })
}

fn r1c1_side_re() -> &'static Regex {
    static SIDE_RE: OnceLock<Regex> = OnceLock::new();
    SIDE_RE.get_or_init(|| {
        Regex::new(r"^R(?:\[(?<row_rel>-?\d+)\]|(?<row>\d+))C(?:\[(?<col_rel>-?\d+)\]|(?<col>\d+))$")
            .expect("R1C1 side regex must compile")
    })
}

/// Best-effort description of why `text` is not an A1 cell reference.
fn describe_bad_cell(text: &str) -> &'static str {
    let body = text.replace('$', "");
    if text.is_empty() {
        "reference is empty"
    } else if text.chars().any(char::is_whitespace) {
        "reference contains whitespace"
    } else if text.starts_with('-') {
        "row and column must be positive"
    } else if !body.is_empty() && body.bytes().all(|b| b.is_ascii_alphabetic()) {
        "missing row number"
    } else if !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit()) {
        "missing column letters"
    } else {
        "expected column letters followed by a row number"
    }
}

/// Parse an A1 cell reference such as `C7`, `$C7`, `C$7` or `$C$7`.
pub fn parse_cell_reference(text: &str) -> Result<CellReference> {
    let caps = a1_cell_re()
        .captures(text)
        .ok_or_else(|| RangeError::invalid_reference(text, describe_bad_cell(text)))?;

    let col = column_name_to_index(&caps["letters"]).map_err(|err| rebrand(err, text))?;
    let row = parse_row_number(text, &caps["digits"])?;

    Ok(CellReference {
        coord: Coordinate::new_unchecked(row, col),
        style: ReferenceStyle::new(!caps["row_abs"].is_empty(), !caps["col_abs"].is_empty()),
    })
}

/// Report errors against the full reference text rather than a fragment.
fn rebrand(err: RangeError, reference: &str) -> RangeError {
    match err {
        RangeError::InvalidReference { reason, .. } => RangeError::InvalidReference {
            reference: reference.to_string(),
            reason,
        },
        other => other,
    }
}

/// Pair the `$` flags of two written positions with the smaller and the
/// larger position, in that order.
fn order_flags(a: u32, a_abs: bool, b: u32, b_abs: bool) -> (bool, bool) {
    if a <= b { (a_abs, b_abs) } else { (b_abs, a_abs) }
}

/// Styles for the top-left and bottom-right corners of the rect spanned by
/// two written corners. Each axis keeps its marker with its own bound.
fn corner_styles(
    start: Coordinate,
    start_style: ReferenceStyle,
    end: Coordinate,
    end_style: ReferenceStyle,
) -> (ReferenceStyle, ReferenceStyle) {
    let (top, bottom) = order_flags(start.row(), start_style.absolute_row, end.row(), end_style.absolute_row);
    let (left, right) = order_flags(
        start.col(),
        start_style.absolute_column,
        end.col(),
        end_style.absolute_column,
    );
    (ReferenceStyle::new(top, left), ReferenceStyle::new(bottom, right))
}

/// One side of an A1 range.
enum A1Side {
    Cell(CellReference),
    Row { row: u32, absolute: bool },
    Column { col: u32, absolute: bool },
}

fn parse_a1_side(side: &str, reference: &str) -> Result<A1Side> {
    let caps = match a1_side_re().captures(side) {
        Some(caps) if !side.is_empty() => caps,
        _ => {
            return Err(RangeError::invalid_reference(
                reference,
                format!("'{side}' is not a cell, row or column"),
            ));
        }
    };

    let letters = caps.name("letters");
    let digits = caps.name("digits");
    let col_abs = caps.name("col_abs").is_some_and(|m| !m.as_str().is_empty());
    let row_abs = caps.name("row_abs").is_some_and(|m| !m.as_str().is_empty());

    match (letters, digits) {
        (Some(_), Some(_)) => parse_cell_reference(side).map(A1Side::Cell).map_err(|err| rebrand(err, reference)),
        (Some(letters), None) => {
            let col = column_name_to_index(letters.as_str()).map_err(|err| rebrand(err, reference))?;
            Ok(A1Side::Column { col, absolute: col_abs })
        }
        (None, Some(digits)) => {
            let row = parse_row_number(reference, digits.as_str())?;
            Ok(A1Side::Row { row, absolute: row_abs })
        }
        (None, None) => Err(RangeError::invalid_reference(reference, "empty range side")),
    }
}

fn parse_a1(text: &str) -> Result<RangeReference> {
    let Some((left, right)) = text.split_once(':') else {
        let cell = parse_cell_reference(text)?;
        return Ok(RangeReference {
            rect: CoordinateRect::single(cell.coord),
            start_style: cell.style,
            end_style: cell.style,
            shorthand: Shorthand::Cells,
        });
    };
    if right.contains(':') {
        return Err(RangeError::invalid_reference(text, "more than one ':' in range"));
    }

    match (parse_a1_side(left, text)?, parse_a1_side(right, text)?) {
        (A1Side::Cell(start), A1Side::Cell(end)) => {
            let (start_style, end_style) = corner_styles(start.coord, start.style, end.coord, end.style);
            Ok(RangeReference {
                rect: CoordinateRect::from_corners(start.coord, end.coord),
                start_style,
                end_style,
                shorthand: Shorthand::Cells,
            })
        }
        (A1Side::Row { row: r1, absolute: a1 }, A1Side::Row { row: r2, absolute: a2 }) => {
            let (top, bottom) = order_flags(r1, a1, r2, a2);
            Ok(RangeReference {
                rect: CoordinateRect::normalized(r1, 1, r2, MAX_COLUMN),
                start_style: ReferenceStyle::new(top, false),
                end_style: ReferenceStyle::new(bottom, false),
                shorthand: Shorthand::Rows,
            })
        }
        (A1Side::Column { col: c1, absolute: a1 }, A1Side::Column { col: c2, absolute: a2 }) => {
            let (left, right) = order_flags(c1, a1, c2, a2);
            Ok(RangeReference {
                rect: CoordinateRect::normalized(1, c1, MAX_ROW, c2),
                start_style: ReferenceStyle::new(false, left),
                end_style: ReferenceStyle::new(false, right),
                shorthand: Shorthand::Columns,
            })
        }
        _ => Err(RangeError::invalid_reference(
            text,
            "cannot mix cell, row-only and column-only sides",
        )),
    }
}

/// Parse an A1 range such as `B2:D10`, `D10:B2`, `C7`, `3:5` or `C:D`.
///
/// Entire-row and entire-column shorthands fill the missing axis with
/// `1..=MAX`. Both sides must use the same shorthand kind.
pub fn parse_range_reference(text: &str) -> Result<CoordinateRect> {
    parse_a1(text).map(|parsed| parsed.rect)
}

fn parse_r1c1_side(side: &str, reference: &str, origin: Option<Coordinate>) -> Result<(Coordinate, ReferenceStyle)> {
    let caps = r1c1_side_re().captures(side).ok_or_else(|| {
        RangeError::invalid_reference(reference, format!("'{side}' is not an R1C1 cell"))
    })?;

    let resolve = |axis: Axis, absolute: Option<&str>, relative: Option<&str>| -> Result<i64> {
        if let Some(digits) = absolute {
            let value = digits
                .parse::<i64>()
                .map_err(|_| RangeError::invalid_reference(reference, format!("{axis} number is too large")))?;
            if value == 0 {
                return Err(RangeError::invalid_reference(
                    reference,
                    format!("{axis} number must be at least 1"),
                ));
            }
            if digits.starts_with('0') {
                return Err(RangeError::invalid_reference(
                    reference,
                    format!("{axis} number has a leading zero"),
                ));
            }
            return Ok(value);
        }
        let offset = relative
            .unwrap_or_default()
            .parse::<i64>()
            .map_err(|_| RangeError::invalid_reference(reference, format!("{axis} offset is too large")))?;
        let origin = origin.ok_or_else(|| {
            RangeError::InvalidOperation(format!(
                "relative R1C1 reference '{reference}' needs a current cell"
            ))
        })?;
        (origin.along(axis) as i64)
            .checked_add(offset)
            .ok_or_else(|| RangeError::invalid_reference(reference, format!("{axis} offset is too large")))
    };

    let row_abs = caps.name("row").map(|m| m.as_str());
    let col_abs = caps.name("col").map(|m| m.as_str());
    let row = resolve(Axis::Row, row_abs, caps.name("row_rel").map(|m| m.as_str()))?;
    let col = resolve(Axis::Column, col_abs, caps.name("col_rel").map(|m| m.as_str()))?;

    Ok((
        Coordinate::from_signed(row, col)?,
        ReferenceStyle::new(row_abs.is_some(), col_abs.is_some()),
    ))
}

/// Parse an R1C1 reference, resolving relative parts against `origin`.
///
/// Fails with [`RangeError::InvalidOperation`] when a relative part is present
/// and `origin` is `None`.
pub fn parse_r1c1_reference(text: &str, origin: Option<Coordinate>) -> Result<RangeReference> {
    let (start, end) = match text.split_once(':') {
        Some((left, right)) => (left, Some(right)),
        None => (text, None),
    };
    let (start_coord, start_style) = parse_r1c1_side(start, text, origin)?;
    let (end_coord, end_style) = match end {
        Some(end) => parse_r1c1_side(end, text, origin)?,
        None => (start_coord, start_style),
    };
    let (start_style, end_style) = corner_styles(start_coord, start_style, end_coord, end_style);
    Ok(RangeReference {
        rect: CoordinateRect::from_corners(start_coord, end_coord),
        start_style,
        end_style,
        shorthand: Shorthand::Cells,
    })
}

/// Parse `text` in the given notation. `origin` is only consulted for
/// relative R1C1 parts.
pub fn parse_reference(text: &str, kind: NotationKind, origin: Option<Coordinate>) -> Result<RangeReference> {
    match kind {
        NotationKind::A1 => parse_a1(text),
        NotationKind::R1C1 => parse_r1c1_reference(text, origin),
    }
}

fn push_a1_cell(out: &mut String, coord: Coordinate, style: ReferenceStyle) {
    if style.absolute_column {
        out.push('$');
    }
    out.push_str(&column_letters(coord.col()));
    if style.absolute_row {
        out.push('$');
    }
    let _ = write!(out, "{}", coord.row());
}

/// A1 text with explicit corners; single cells have no colon.
pub(crate) fn format_a1(rect: &CoordinateRect, start: ReferenceStyle, end: ReferenceStyle) -> String {
    let mut out = String::new();
    push_a1_cell(&mut out, rect.top_left(), start);
    if !rect.is_single_cell() {
        out.push(':');
        push_a1_cell(&mut out, rect.bottom_right(), end);
    }
    out
}

fn push_r1c1_cell(out: &mut String, coord: Coordinate, style: ReferenceStyle, current: Option<Coordinate>) -> Result<()> {
    let current = match (style.is_fully_absolute(), current) {
        (true, _) => Coordinate::new_unchecked(1, 1),
        (false, Some(current)) => current,
        (false, None) => {
            return Err(RangeError::InvalidOperation(
                "relative R1C1 formatting needs a current cell".to_string(),
            ));
        }
    };
    if style.absolute_row {
        let _ = write!(out, "R{}", coord.row());
    } else {
        let _ = write!(out, "R[{}]", coord.row() as i64 - current.row() as i64);
    }
    if style.absolute_column {
        let _ = write!(out, "C{}", coord.col());
    } else {
        let _ = write!(out, "C[{}]", coord.col() as i64 - current.col() as i64);
    }
    Ok(())
}

/// Format a rect in `notation`.
///
/// A1 output for a single cell has no colon. Relative R1C1 output is the
/// signed offset from `current_cell`, which is then required.
pub fn format_reference(
    rect: &CoordinateRect,
    notation: ReferenceNotation,
    current_cell: Option<Coordinate>,
) -> Result<String> {
    match notation {
        ReferenceNotation::A1(style) => Ok(format_a1(rect, style, style)),
        ReferenceNotation::R1C1(style) => {
            let mut out = String::new();
            push_r1c1_cell(&mut out, rect.top_left(), style, current_cell)?;
            if !rect.is_single_cell() {
                out.push(':');
                push_r1c1_cell(&mut out, rect.bottom_right(), style, current_cell)?;
            }
            Ok(out)
        }
    }
}

impl RangeReference {
    /// A1 text preserving the shorthand kind and per-corner `$` markers.
    pub fn to_a1(&self) -> String {
        match self.shorthand {
            Shorthand::Cells => format_a1(&self.rect, self.start_style, self.end_style),
            Shorthand::Rows => {
                let mark = |abs: bool| if abs { "$" } else { "" };
                format!(
                    "{}{}:{}{}",
                    mark(self.start_style.absolute_row),
                    self.rect.first_row(),
                    mark(self.end_style.absolute_row),
                    self.rect.last_row()
                )
            }
            Shorthand::Columns => {
                let mark = |abs: bool| if abs { "$" } else { "" };
                format!(
                    "{}{}:{}{}",
                    mark(self.start_style.absolute_column),
                    column_letters(self.rect.first_col()),
                    mark(self.end_style.absolute_column),
                    column_letters(self.rect.last_col())
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rect(r1: u32, c1: u32, r2: u32, c2: u32) -> CoordinateRect {
        CoordinateRect::new(r1, c1, r2, c2).unwrap()
    }

    fn coord(row: u32, col: u32) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_column_index_to_name_boundaries() {
        assert_eq!(column_index_to_name(1).unwrap(), "A");
        assert_eq!(column_index_to_name(26).unwrap(), "Z");
        assert_eq!(column_index_to_name(27).unwrap(), "AA");
        assert_eq!(column_index_to_name(52).unwrap(), "AZ");
        assert_eq!(column_index_to_name(53).unwrap(), "BA");
        assert_eq!(column_index_to_name(702).unwrap(), "ZZ");
        assert_eq!(column_index_to_name(703).unwrap(), "AAA");
        assert_eq!(column_index_to_name(MAX_COLUMN).unwrap(), "XFD");
        assert!(matches!(column_index_to_name(0), Err(RangeError::OutOfRange { .. })));
        assert!(matches!(
            column_index_to_name(MAX_COLUMN + 1),
            Err(RangeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_column_name_to_index() {
        assert_eq!(column_name_to_index("A").unwrap(), 1);
        assert_eq!(column_name_to_index("z").unwrap(), 26);
        assert_eq!(column_name_to_index("aA").unwrap(), 27);
        assert_eq!(column_name_to_index("XFD").unwrap(), MAX_COLUMN);
        assert!(matches!(column_name_to_index(""), Err(RangeError::InvalidReference { .. })));
        assert!(matches!(column_name_to_index("A1"), Err(RangeError::InvalidReference { .. })));
        assert!(matches!(column_name_to_index("ABCD"), Err(RangeError::InvalidReference { .. })));
        assert!(matches!(column_name_to_index("XFE"), Err(RangeError::OutOfRange { .. })));
    }

    #[test]
    fn test_parse_cell_reference_absolute_markers() {
        let plain = parse_cell_reference("C7").unwrap();
        assert_eq!(plain.coord, coord(7, 3));
        assert!(!plain.absolute_row() && !plain.absolute_column());

        let col_abs = parse_cell_reference("$C7").unwrap();
        assert!(col_abs.absolute_column() && !col_abs.absolute_row());

        let row_abs = parse_cell_reference("C$7").unwrap();
        assert!(row_abs.absolute_row() && !row_abs.absolute_column());

        let both = parse_cell_reference("$c$7").unwrap();
        assert_eq!(both.coord, coord(7, 3));
        assert_eq!(both.style, ReferenceStyle::ABSOLUTE);
    }

    #[test]
    fn test_parse_cell_reference_rejections() {
        for bad in ["", "ABC", "123", "A0", "1A", "A 1", " A1", "A-1", "-A1", "A1$", "$$A1", "A1.5"] {
            assert!(
                matches!(parse_cell_reference(bad), Err(RangeError::InvalidReference { .. })),
                "expected InvalidReference for {bad:?}"
            );
        }
        assert!(matches!(
            parse_cell_reference("A99999999999"),
            Err(RangeError::InvalidReference { .. })
        ));
        assert!(matches!(
            parse_cell_reference("A1048577"),
            Err(RangeError::OutOfRange { axis: Axis::Row, .. })
        ));
        assert!(matches!(
            parse_cell_reference("XFE1"),
            Err(RangeError::OutOfRange { axis: Axis::Column, .. })
        ));
    }

    #[test]
    fn test_parse_cell_reference_reasons() {
        let reason = |text: &str| match parse_cell_reference(text) {
            Err(RangeError::InvalidReference { reason, .. }) => reason,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(reason("ABC"), "missing row number");
        assert_eq!(reason("123"), "missing column letters");
        assert_eq!(reason("A 1"), "reference contains whitespace");
        assert_eq!(reason("A0"), "row number must be at least 1");
    }

    #[test]
    fn test_parse_range_reference() {
        assert_eq!(parse_range_reference("B2:D10").unwrap(), rect(2, 2, 10, 4));
        assert_eq!(parse_range_reference("D10:B2").unwrap(), rect(2, 2, 10, 4));
        assert_eq!(parse_range_reference("C7").unwrap(), rect(7, 3, 7, 3));
        assert_eq!(parse_range_reference("$B$2:d$10").unwrap(), rect(2, 2, 10, 4));
    }

    #[test]
    fn test_parse_range_shorthands() {
        assert_eq!(parse_range_reference("3:5").unwrap(), rect(3, 1, 5, MAX_COLUMN));
        assert_eq!(parse_range_reference("5:3").unwrap(), rect(3, 1, 5, MAX_COLUMN));
        assert_eq!(parse_range_reference("C:D").unwrap(), rect(1, 3, MAX_ROW, 4));
        assert_eq!(parse_range_reference("$C:$C").unwrap(), rect(1, 3, MAX_ROW, 3));

        let parsed = parse_reference("$3:5", NotationKind::A1, None).unwrap();
        assert_eq!(parsed.shorthand, Shorthand::Rows);
        assert!(parsed.start_style.absolute_row);
        assert!(!parsed.end_style.absolute_row);
    }

    #[test]
    fn test_parse_range_rejections() {
        for bad in ["A:3", "3:A", "A1:3", "C:D5", "A1:", ":A1", "A1:B2:C3", "3", "C", "A1 :B2", "$:A1"] {
            assert!(
                matches!(parse_range_reference(bad), Err(RangeError::InvalidReference { .. })),
                "expected InvalidReference for {bad:?}"
            );
        }
        assert!(matches!(parse_range_reference("0:3"), Err(RangeError::InvalidReference { .. })));
        assert!(matches!(parse_range_reference("A1:A1048577"), Err(RangeError::OutOfRange { .. })));
    }

    #[test]
    fn test_format_a1() {
        let a1 = ReferenceNotation::A1(ReferenceStyle::RELATIVE);
        assert_eq!(format_reference(&rect(2, 2, 10, 4), a1, None).unwrap(), "B2:D10");
        assert_eq!(format_reference(&rect(7, 3, 7, 3), a1, None).unwrap(), "C7");

        let abs = ReferenceNotation::A1(ReferenceStyle::ABSOLUTE);
        assert_eq!(format_reference(&rect(2, 2, 10, 4), abs, None).unwrap(), "$B$2:$D$10");

        let mixed = ReferenceNotation::A1(ReferenceStyle::new(true, false));
        assert_eq!(format_reference(&rect(7, 3, 7, 3), mixed, None).unwrap(), "C$7");
    }

    #[test]
    fn test_format_r1c1_absolute() {
        let abs = ReferenceNotation::R1C1(ReferenceStyle::ABSOLUTE);
        assert_eq!(format_reference(&rect(2, 3, 2, 3), abs, None).unwrap(), "R2C3");
        assert_eq!(format_reference(&rect(2, 2, 10, 4), abs, None).unwrap(), "R2C2:R10C4");
    }

    #[test]
    fn test_format_r1c1_relative_needs_current_cell() {
        let rel = ReferenceNotation::R1C1(ReferenceStyle::RELATIVE);
        assert!(matches!(
            format_reference(&rect(2, 2, 2, 2), rel, None),
            Err(RangeError::InvalidOperation(_))
        ));
        let mixed = ReferenceNotation::R1C1(ReferenceStyle::new(true, false));
        assert!(matches!(
            format_reference(&rect(2, 2, 2, 2), mixed, None),
            Err(RangeError::InvalidOperation(_))
        ));

        let current = Some(coord(3, 3));
        assert_eq!(format_reference(&rect(2, 4, 2, 4), rel, current).unwrap(), "R[-1]C[1]");
        assert_eq!(format_reference(&rect(3, 3, 3, 3), rel, current).unwrap(), "R[0]C[0]");
        assert_eq!(format_reference(&rect(2, 4, 2, 4), mixed, current).unwrap(), "R2C[1]");
        assert_eq!(
            format_reference(&rect(1, 1, 5, 5), rel, current).unwrap(),
            "R[-2]C[-2]:R[2]C[2]"
        );
    }

    #[test]
    fn test_parse_r1c1() {
        let parsed = parse_r1c1_reference("R2C3", None).unwrap();
        assert_eq!(parsed.rect, rect(2, 3, 2, 3));
        assert_eq!(parsed.start_style, ReferenceStyle::ABSOLUTE);

        let parsed = parse_r1c1_reference("R[-1]C[1]:R5C5", Some(coord(3, 3))).unwrap();
        assert_eq!(parsed.rect, rect(2, 4, 5, 5));
        assert_eq!(parsed.start_style, ReferenceStyle::RELATIVE);
        assert_eq!(parsed.end_style, ReferenceStyle::ABSOLUTE);

        let reversed = parse_r1c1_reference("R10C4:R2C2", None).unwrap();
        assert_eq!(reversed.rect, rect(2, 2, 10, 4));
    }

    #[test]
    fn test_parse_r1c1_rejections() {
        assert!(matches!(
            parse_r1c1_reference("R[1]C1", None),
            Err(RangeError::InvalidOperation(_))
        ));
        assert!(matches!(
            parse_r1c1_reference("R[-3]C1", Some(coord(3, 3))),
            Err(RangeError::OutOfRange { axis: Axis::Row, value: 0, .. })
        ));
        assert!(matches!(parse_r1c1_reference("R0C1", None), Err(RangeError::InvalidReference { .. })));
        assert!(matches!(parse_r1c1_reference("RC", None), Err(RangeError::InvalidReference { .. })));
        assert!(matches!(parse_r1c1_reference("R1C1:", None), Err(RangeError::InvalidReference { .. })));
        assert!(matches!(parse_r1c1_reference("B2", None), Err(RangeError::InvalidReference { .. })));
        assert!(matches!(
            parse_r1c1_reference("R1C16385", None),
            Err(RangeError::OutOfRange { axis: Axis::Column, .. })
        ));
    }

    #[test]
    fn test_relative_r1c1_roundtrip_through_origin() {
        let origin = Some(coord(10, 10));
        let rel = ReferenceNotation::R1C1(ReferenceStyle::RELATIVE);
        let r = rect(4, 8, 12, 20);
        let text = format_reference(&r, rel, origin).unwrap();
        assert_eq!(text, "R[-6]C[-2]:R[2]C[10]");
        assert_eq!(parse_reference(&text, NotationKind::R1C1, origin).unwrap().rect, r);
    }

    #[test]
    fn test_range_reference_to_a1_preserves_written_form() {
        for text in ["$B$2:D$10", "C7", "$3:5", "C:$D", "$A1"] {
            let parsed = parse_reference(text, NotationKind::A1, None).unwrap();
            assert_eq!(parsed.to_a1(), text);
        }
        let parsed = parse_reference("d10:b2", NotationKind::A1, None).unwrap();
        assert_eq!(parsed.to_a1(), "B2:D10");
    }

    #[test]
    fn test_reversed_corners_keep_markers_with_their_bounds() {
        for (text, expected) in [
            ("D10:$B$2", "$B$2:D10"),
            ("B$10:$D2", "B2:$D$10"),
            ("$5:3", "3:$5"),
            ("D:$B", "$B:D"),
        ] {
            let parsed = parse_reference(text, NotationKind::A1, None).unwrap();
            assert_eq!(parsed.to_a1(), expected, "for {text:?}");
        }

        let parsed = parse_r1c1_reference("R10C4:R2C[-1]", Some(coord(3, 3))).unwrap();
        assert_eq!(parsed.rect, rect(2, 2, 10, 4));
        assert_eq!(parsed.start_style, ReferenceStyle::new(true, false));
        assert_eq!(parsed.end_style, ReferenceStyle::ABSOLUTE);
    }

    #[test]
    fn test_leading_zero_row_is_rejected() {
        for bad in ["A01", "$B$007", "01:3", "A1:B02"] {
            assert!(
                matches!(parse_range_reference(bad), Err(RangeError::InvalidReference { .. })),
                "expected InvalidReference for {bad:?}"
            );
        }
        assert!(matches!(parse_r1c1_reference("R01C1", None), Err(RangeError::InvalidReference { .. })));
        assert!(matches!(parse_r1c1_reference("R1C02", None), Err(RangeError::InvalidReference { .. })));
        assert_eq!(parse_r1c1_reference("R[0]C[-0]", Some(coord(2, 2))).unwrap().rect, rect(2, 2, 2, 2));
    }
}
