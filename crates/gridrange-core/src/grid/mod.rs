//! Sparse grid storage (UI-agnostic).
//!
//! [`SparseGrid`] is the sole owner of cell content. It keeps:
//!
//! - a hash map from packed `(row, col)` keys to [`CellContent`]
//! - a row index (`row -> occupied columns`) for range emptiness checks and
//!   ordered iteration without scanning rect areas
//! - the used rect, widened on every write and only shrunk by
//!   [`SparseGrid::recompute_used_rect`]
//! - the merged-region registry
//!
//! The grid has no internal locking. Callers sharing it across threads must
//! serialize every mutation (one exclusive writer per worksheet).

mod content;
mod merge;
mod ops;
mod state;
mod structure;

pub use content::CellContent;
pub use state::SparseGrid;
