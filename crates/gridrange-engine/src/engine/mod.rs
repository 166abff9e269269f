//! Addressing engine API.
//!
//! This module provides the coordinate vocabulary shared by every layer of the
//! spreadsheet:
//!
//! - [`Coordinate`], [`CoordinateRect`] - 1-based cell positions and normalized rectangles
//! - [`column_index_to_name`], [`column_name_to_index`] - bijective base-26 column names
//! - [`parse_cell_reference`], [`parse_range_reference`], [`parse_reference`] - A1/R1C1 parsing
//! - [`format_reference`] - A1/R1C1 formatting with absolute markers or relative offsets
//! - range algebra on [`CoordinateRect`] (containment, intersection, union, offset, resize)

mod algebra;
mod codec;
mod coord;
mod error;
mod limits;
mod notation;
mod rect;

pub use algebra::{entire_column, entire_row};
pub use codec::{
    CellReference, column_index_to_name, column_name_to_index, format_reference,
    parse_cell_reference, parse_r1c1_reference, parse_range_reference, parse_reference,
};
pub use coord::{Axis, Coordinate};
pub use error::{RangeError, Result};
pub use limits::{MAX_COLUMN, MAX_COLUMN_NAME_LEN, MAX_ROW};
pub use notation::{NotationKind, RangeReference, ReferenceNotation, ReferenceStyle, Shorthand};
pub use rect::{CoordinateRect, RectCoordinates};
