//! gridrange_engine - Spreadsheet addressing and range algebra.

pub mod engine;

pub use engine::{
    Coordinate, CoordinateRect, MAX_COLUMN, MAX_COLUMN_NAME_LEN, MAX_ROW, NotationKind,
    RangeError, RangeReference, ReferenceNotation, ReferenceStyle, Result, Shorthand,
};
