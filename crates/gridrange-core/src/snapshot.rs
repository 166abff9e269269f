//! Owned, serializable copy of a grid.
//!
//! This is the boundary with whatever persists worksheets: the save side takes
//! [`GridSnapshot::from_grid`], the load side rebuilds with
//! [`SparseGrid::from_snapshot`]. Cells are stored row-major.

use serde::{Deserialize, Serialize};

use gridrange_engine::engine::{Coordinate, CoordinateRect};

use crate::config::GridConfig;
use crate::error::Result;
use crate::grid::{CellContent, SparseGrid};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    #[serde(default)]
    pub config: GridConfig,
    #[serde(default)]
    pub cells: Vec<(Coordinate, CellContent)>,
    #[serde(default)]
    pub merges: Vec<CoordinateRect>,
}

impl GridSnapshot {
    pub fn from_grid(grid: &SparseGrid) -> Self {
        GridSnapshot {
            config: *grid.config(),
            cells: grid
                .entries()
                .map(|(coord, content)| (coord, content.clone()))
                .collect(),
            merges: grid.merged_regions().to_vec(),
        }
    }

    pub fn into_grid(self) -> Result<SparseGrid> {
        SparseGrid::from_snapshot(self)
    }
}

impl SparseGrid {
    /// Rebuild a grid: config first, then merges, then cells.
    ///
    /// A cell stored under a non-anchor merged coordinate fails the load with
    /// [`crate::GridError::Snapshot`] naming its position in `cells`.
    pub fn from_snapshot(snapshot: GridSnapshot) -> Result<SparseGrid> {
        let mut grid = SparseGrid::with_config(snapshot.config)?;
        for merge in snapshot.merges {
            grid.register_merged_region(merge)?;
        }
        grid.load(snapshot.cells)?;
        Ok(grid)
    }
}
