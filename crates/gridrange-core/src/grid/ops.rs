use gridrange_engine::engine::{Coordinate, CoordinateRect};

use super::{CellContent, SparseGrid};
use crate::error::{GridError, Result};

impl SparseGrid {
    /// Store `content` at `coord`, or clear it when `content` is `Empty`.
    ///
    /// A non-empty write widens the used rect to cover `coord`. Clearing never
    /// shrinks it; call [`SparseGrid::recompute_used_rect`] for an exact
    /// bound. Content, index and used rect are updated together before
    /// returning.
    pub fn set_cell_content(&mut self, coord: Coordinate, content: CellContent) -> Result<()> {
        self.config.check_coord(coord)?;
        self.check_writable(coord)?;

        if content.is_empty() {
            if self.cells.remove(&coord.packed()).is_some() {
                self.index_remove(coord);
            }
            return Ok(());
        }

        self.cells.insert(coord.packed(), content);
        self.index_insert(coord);
        self.expand_used_rect(coord);
        Ok(())
    }

    /// Clear `coord`, returning what was stored there.
    pub fn clear_cell(&mut self, coord: Coordinate) -> Result<Option<CellContent>> {
        self.config.check_coord(coord)?;
        self.check_writable(coord)?;
        let previous = self.cells.remove(&coord.packed());
        if previous.is_some() {
            self.index_remove(coord);
        }
        Ok(previous)
    }

    /// Clear every occupied cell in `rect`; returns how many were cleared.
    ///
    /// Merged regions are left registered.
    pub fn clear_rect(&mut self, rect: &CoordinateRect) -> usize {
        let occupied: Vec<Coordinate> = self.occupied_in_rect(*rect).collect();
        for coord in &occupied {
            self.cells.remove(&coord.packed());
            self.index_remove(*coord);
        }
        occupied.len()
    }

    /// Remove every cell and merged region and return the used rect to unset.
    pub fn clear_all(&mut self) {
        self.cells.clear();
        self.rows.clear();
        self.merges.clear();
        self.used = None;
    }

    fn expand_used_rect(&mut self, coord: Coordinate) {
        let cell = CoordinateRect::single(coord);
        self.used = Some(match self.used {
            Some(used) => used.union(&cell),
            None => cell,
        });
    }

    /// Recompute the exact used rect from the occupied cells.
    ///
    /// Runs in time proportional to the number of occupied rows.
    pub fn recompute_used_rect(&mut self) -> Option<CoordinateRect> {
        self.used = self.scan_used_rect();
        tracing::trace!(used = ?self.used, "recomputed used rect");
        self.used
    }

    fn scan_used_rect(&self) -> Option<CoordinateRect> {
        let bounds = self.config.bounds();
        let (&first_row, _) = self.rows.first_key_value()?;
        let (&last_row, _) = self.rows.last_key_value()?;
        let first_col = self.rows.values().filter_map(|cols| cols.first()).min().copied()?;
        let last_col = self.rows.values().filter_map(|cols| cols.last()).max().copied()?;

        let top_left = bounds.coordinate_at(first_row, first_col)?;
        let bottom_right = bounds.coordinate_at(last_row, last_col)?;
        Some(CoordinateRect::from_corners(top_left, bottom_right))
    }

    /// Forget the used rect entirely (back to unset), regardless of content.
    ///
    /// The next write sets it again; [`SparseGrid::recompute_used_rect`]
    /// restores an exact bound.
    pub fn reset_used_rect(&mut self) {
        self.used = None;
    }

    /// Populate from a coordinate -> content stream (document load).
    ///
    /// Entries go through [`SparseGrid::set_cell_content`], so bounds and
    /// merge rules apply. Stops at the first failing entry and reports its
    /// position in the stream.
    pub fn load<I>(&mut self, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = (Coordinate, CellContent)>,
    {
        let mut loaded = 0;
        for (index, (coord, content)) in entries.into_iter().enumerate() {
            self.set_cell_content(coord, content)
                .map_err(|err| GridError::Snapshot {
                    index,
                    message: err.to_string(),
                })?;
            loaded += 1;
        }
        tracing::debug!(loaded, "loaded cells into grid");
        Ok(loaded)
    }
}
