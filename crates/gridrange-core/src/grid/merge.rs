//! Merged-region registry.
//!
//! Regions are pairwise non-overlapping. Only a region's anchor (top-left)
//! accepts writes; every other cell in it rejects them with
//! [`GridError::MergedCellWrite`]. Merge lifecycle is explicit: clearing the
//! anchor never unregisters a region.

use gridrange_engine::engine::{Coordinate, CoordinateRect, RangeError};

use super::SparseGrid;
use crate::error::{GridError, Result};

impl SparseGrid {
    /// Register `rect` as a merged region.
    ///
    /// Fails with [`GridError::MergeConflict`] if it overlaps an existing
    /// region. Content stored in non-anchor cells is discarded.
    pub fn register_merged_region(&mut self, rect: CoordinateRect) -> Result<()> {
        self.config.check_rect(&rect)?;
        if rect.is_single_cell() {
            return Err(RangeError::InvalidArgument(format!(
                "merged region {rect} must span more than one cell"
            ))
            .into());
        }
        if let Some(existing) = self.merges.iter().find(|m| m.intersects(&rect)) {
            return Err(GridError::MergeConflict {
                requested: rect,
                existing: *existing,
            });
        }

        let anchor = rect.top_left();
        let hidden: Vec<Coordinate> = self
            .occupied_in_rect(rect)
            .filter(|coord| *coord != anchor)
            .collect();
        for coord in &hidden {
            self.cells.remove(&coord.packed());
            self.index_remove(*coord);
        }

        tracing::debug!(region = %rect, discarded = hidden.len(), "registered merged region");
        self.merges.push(rect);
        Ok(())
    }

    /// Remove a registered region. Returns false if `rect` was not registered.
    pub fn unregister_merged_region(&mut self, rect: &CoordinateRect) -> bool {
        let before = self.merges.len();
        self.merges.retain(|m| m != rect);
        let removed = self.merges.len() != before;
        if removed {
            tracing::debug!(region = %rect, "unregistered merged region");
        }
        removed
    }

    /// Remove every region intersecting `rect`; returns how many were removed.
    pub fn unregister_merged_regions_in(&mut self, rect: &CoordinateRect) -> usize {
        let before = self.merges.len();
        self.merges.retain(|m| !m.intersects(rect));
        before - self.merges.len()
    }

    /// The merged region covering `coord`, if any.
    pub fn merged_region_at(&self, coord: Coordinate) -> Option<CoordinateRect> {
        self.merges.iter().copied().find(|m| m.contains_coord(coord))
    }

    pub fn merged_regions(&self) -> &[CoordinateRect] {
        &self.merges
    }

    /// The writable cell for `coord`: its region's anchor, or itself.
    pub fn anchor_of(&self, coord: Coordinate) -> Coordinate {
        self.merged_region_at(coord)
            .map(|m| m.top_left())
            .unwrap_or(coord)
    }

    /// Fail if `coord` is a non-anchor cell of a merged region.
    pub(crate) fn check_writable(&self, coord: Coordinate) -> Result<()> {
        let anchor = self.anchor_of(coord);
        if anchor != coord {
            return Err(GridError::MergedCellWrite { coord, anchor });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellContent;

    fn rect(r1: u32, c1: u32, r2: u32, c2: u32) -> CoordinateRect {
        CoordinateRect::new(r1, c1, r2, c2).unwrap()
    }

    fn coord(row: u32, col: u32) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_register_rejects_overlap() {
        let mut grid = SparseGrid::new();
        grid.register_merged_region(rect(2, 2, 4, 4)).unwrap();
        let err = grid.register_merged_region(rect(3, 3, 5, 5)).unwrap_err();
        assert_eq!(
            err,
            GridError::MergeConflict {
                requested: rect(3, 3, 5, 5),
                existing: rect(2, 2, 4, 4),
            }
        );
        // Touching but not overlapping is fine.
        grid.register_merged_region(rect(5, 2, 6, 4)).unwrap();
        assert_eq!(grid.merged_regions().len(), 2);
    }

    #[test]
    fn test_register_rejects_single_cell() {
        let mut grid = SparseGrid::new();
        assert!(matches!(
            grid.register_merged_region(rect(1, 1, 1, 1)),
            Err(GridError::Range(RangeError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_register_discards_hidden_content() {
        let mut grid = SparseGrid::new();
        grid.set_cell_content(coord(1, 1), CellContent::text("keep")).unwrap();
        grid.set_cell_content(coord(1, 2), CellContent::text("drop")).unwrap();
        grid.register_merged_region(rect(1, 1, 1, 2)).unwrap();
        assert_eq!(grid.occupied_count(), 1);
        assert_eq!(grid.content(coord(1, 1)), CellContent::text("keep"));
        assert_eq!(grid.content(coord(1, 2)), CellContent::Empty);
    }

    #[test]
    fn test_anchor_lookup_and_unregister() {
        let mut grid = SparseGrid::new();
        grid.register_merged_region(rect(2, 2, 4, 4)).unwrap();
        assert_eq!(grid.anchor_of(coord(3, 4)), coord(2, 2));
        assert_eq!(grid.anchor_of(coord(5, 5)), coord(5, 5));
        assert_eq!(grid.merged_region_at(coord(4, 4)), Some(rect(2, 2, 4, 4)));

        assert!(!grid.unregister_merged_region(&rect(2, 2, 3, 3)));
        assert!(grid.unregister_merged_region(&rect(2, 2, 4, 4)));
        assert!(grid.merged_regions().is_empty());
        grid.set_cell_content(coord(3, 3), CellContent::Number(1.0)).unwrap();
    }

    #[test]
    fn test_unregister_in_rect() {
        let mut grid = SparseGrid::new();
        grid.register_merged_region(rect(1, 1, 2, 2)).unwrap();
        grid.register_merged_region(rect(5, 5, 6, 6)).unwrap();
        assert_eq!(grid.unregister_merged_regions_in(&rect(2, 2, 3, 3)), 1);
        assert_eq!(grid.merged_regions(), &[rect(5, 5, 6, 6)]);
    }
}
