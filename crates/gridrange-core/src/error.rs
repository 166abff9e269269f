//! Error types for Gridrange core.

use thiserror::Error;

use gridrange_engine::engine::{Coordinate, CoordinateRect, RangeError};

/// Errors that can occur while reading or mutating a grid
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("Merged region {requested} overlaps existing merged region {existing}")]
    MergeConflict {
        requested: CoordinateRect,
        existing: CoordinateRect,
    },

    #[error("Cell {coord} is inside merged region anchored at {anchor}; only the anchor is writable")]
    MergedCellWrite { coord: Coordinate, anchor: Coordinate },

    #[error("Worksheet backing this view has been dropped")]
    Detached,

    #[error("Worksheet grid is already borrowed")]
    Borrowed,

    #[error("Invalid grid configuration: {0}")]
    Config(String),

    #[error("Snapshot entry {index}: {message}")]
    Snapshot { index: usize, message: String },
}

impl GridError {
    /// The engine error, if this wraps one.
    pub fn as_range_error(&self) -> Option<&RangeError> {
        match self {
            GridError::Range(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
