//! gridrange-core - Sparse grid storage and navigational views.

pub mod config;
pub mod error;
pub mod grid;
pub mod snapshot;
pub mod view;

pub use config::GridConfig;
pub use error::{GridError, Result};
pub use grid::{CellContent, SparseGrid};
pub use snapshot::GridSnapshot;
pub use view::{CellView, ColumnView, RangeArg, RangeView, RowView, UsedRange, Worksheet};

pub use gridrange_engine::engine::{Coordinate, CoordinateRect};
