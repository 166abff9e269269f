//! One output line per reference.

use gridrange_core::{GridError, RangeView, Worksheet};
use gridrange_engine::engine::{column_index_to_name, parse_reference};
use gridrange_engine::{Coordinate, NotationKind, ReferenceNotation};

use crate::error::Result;

/// How references are read and written back.
#[derive(Copy, Clone, Debug)]
pub struct Options {
    pub notation: ReferenceNotation,
    /// Current cell for relative R1C1 input and output
    pub origin: Option<Coordinate>,
}

/// Resolve `text` on `sheet` (A1 or R1C1, detected).
pub fn resolve(sheet: &Worksheet, text: &str, options: &Options) -> Result<RangeView> {
    let kind = NotationKind::detect(text);
    let reference = parse_reference(text, kind, options.origin).map_err(GridError::from)?;
    Ok(sheet.get_range(reference)?)
}

/// `<reference>\trows <first>-<last>\tcolumns <first>-<last>\t<rows>x<cols> (<cells> cells)`
pub fn describe(sheet: &Worksheet, text: &str, options: &Options) -> Result<String> {
    let range = resolve(sheet, text, options)?;
    let rect = range.rect();
    let address = range.address(options.notation, options.origin)?;
    let first_col = column_index_to_name(rect.first_col()).map_err(GridError::from)?;
    let last_col = column_index_to_name(rect.last_col()).map_err(GridError::from)?;
    Ok(format!(
        "{address}\trows {}-{}\tcolumns {first_col}-{last_col}\t{}x{} ({} cells)",
        rect.first_row(),
        rect.last_row(),
        range.row_count(),
        range.column_count(),
        range.cell_count()
    ))
}
