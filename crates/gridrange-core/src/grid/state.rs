use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

use gridrange_engine::engine::{Coordinate, CoordinateRect, RectCoordinates};

use super::CellContent;
use crate::config::GridConfig;
use crate::error::Result;

/// Sparse cell storage with used-rect tracking and merged regions.
#[derive(Clone, Debug, Default)]
pub struct SparseGrid {
    /// Addressable space of this grid
    pub(crate) config: GridConfig,
    /// Cell content keyed by [`Coordinate::packed`]
    pub(crate) cells: FxHashMap<u64, CellContent>,
    /// Occupied columns per row, kept in sync with `cells`
    pub(crate) rows: BTreeMap<u32, BTreeSet<u32>>,
    /// Upper bound of every occupied coordinate; `None` until the first write
    pub(crate) used: Option<CoordinateRect>,
    /// Pairwise non-overlapping merged regions
    pub(crate) merges: Vec<CoordinateRect>,
}

impl SparseGrid {
    /// Create an empty grid with the default (Excel-sized) addressable space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty grid with a custom addressable space.
    pub fn with_config(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(SparseGrid {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Stored content, or `None` for an unoccupied coordinate.
    pub fn get(&self, coord: Coordinate) -> Option<&CellContent> {
        self.cells.get(&coord.packed())
    }

    /// Stored content, with unoccupied coordinates reading as `Empty`.
    pub fn content(&self, coord: Coordinate) -> CellContent {
        self.get(coord).cloned().unwrap_or_default()
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.cells.contains_key(&coord.packed())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell is stored anywhere.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The tracked used rect. It may be wider than the occupied cells after
    /// clears until [`SparseGrid::recompute_used_rect`] runs.
    pub fn used_rect(&self) -> Option<CoordinateRect> {
        self.used
    }

    /// Row-major coordinates of `rect`, occupied or not. Lazy and restartable.
    pub fn cell_coordinates_in_rect(&self, rect: &CoordinateRect) -> RectCoordinates {
        rect.coordinates()
    }

    /// Row-major occupied coordinates inside `rect`, via the row index.
    pub fn occupied_in_rect(&self, rect: CoordinateRect) -> impl Iterator<Item = Coordinate> + '_ {
        self.rows
            .range(rect.first_row()..=rect.last_row())
            .flat_map(move |(&row, cols)| {
                cols.range(rect.first_col()..=rect.last_col())
                    .filter_map(move |&col| rect.coordinate_at(row, col))
            })
    }

    /// True iff no occupied coordinate lies within `rect`.
    ///
    /// Cost is proportional to the occupied rows inside the rect's row span,
    /// never to its area.
    pub fn is_rect_empty(&self, rect: &CoordinateRect) -> bool {
        self.occupied_in_rect(*rect).next().is_none()
    }

    /// Every stored cell in row-major order; the save-side content stream.
    pub fn entries(&self) -> impl Iterator<Item = (Coordinate, &CellContent)> + '_ {
        let bounds = self.config.bounds();
        self.occupied_in_rect(bounds)
            .filter_map(move |coord| self.get(coord).map(|content| (coord, content)))
    }

    pub(crate) fn index_insert(&mut self, coord: Coordinate) {
        self.rows.entry(coord.row()).or_default().insert(coord.col());
    }

    pub(crate) fn index_remove(&mut self, coord: Coordinate) {
        if let Some(cols) = self.rows.get_mut(&coord.row()) {
            cols.remove(&coord.col());
            if cols.is_empty() {
                self.rows.remove(&coord.row());
            }
        }
    }
}
