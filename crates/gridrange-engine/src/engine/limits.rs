//! Engine-wide addressing limits.

use super::coord::Axis;
use super::error::{RangeError, Result};

/// Last addressable row (1-based), matching the common 2^20 row sheet limit.
pub const MAX_ROW: u32 = 1_048_576;

/// Last addressable column (1-based, "XFD").
pub const MAX_COLUMN: u32 = 16_384;

/// Longest column name accepted by the codec ("XFD" is three letters).
pub const MAX_COLUMN_NAME_LEN: usize = 3;

/// Maximum index on an axis.
pub(crate) const fn axis_max(axis: Axis) -> u32 {
    match axis {
        Axis::Row => MAX_ROW,
        Axis::Column => MAX_COLUMN,
    }
}

/// Check a 1-based index against the engine limit for `axis`.
pub(crate) fn check_axis(axis: Axis, value: i64) -> Result<u32> {
    let max = axis_max(axis);
    if value < 1 || value > max as i64 {
        return Err(RangeError::OutOfRange { axis, value, max });
    }
    Ok(value as u32)
}
