//! Navigational views over a worksheet's grid.
//!
//! A [`Worksheet`] owns its [`SparseGrid`]. Views ([`CellView`], [`RowView`],
//! [`ColumnView`], [`RangeView`]) hold only a weak handle plus coordinates and
//! re-resolve against the grid on every access, so they never see stale
//! content. Once the worksheet is dropped every view operation that touches
//! the grid fails with [`GridError::Detached`]; while a caller holds
//! [`Worksheet::grid_mut`] (or [`Worksheet::grid`] for writes) it fails with
//! [`GridError::Borrowed`].

mod cell;
mod line;
mod range;

use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use gridrange_engine::engine::{Coordinate, CoordinateRect, NotationKind, RangeReference, parse_reference};

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::grid::SparseGrid;
use crate::snapshot::GridSnapshot;

pub use cell::CellView;
pub use line::{ColumnView, RowView};
pub use range::{RangeView, UsedRange};

/// Non-owning handle shared by all views.
#[derive(Clone, Debug)]
pub(crate) struct GridHandle(Weak<RefCell<SparseGrid>>);

impl GridHandle {
    fn upgrade(&self) -> Result<Rc<RefCell<SparseGrid>>> {
        self.0.upgrade().ok_or(GridError::Detached)
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&SparseGrid) -> R) -> Result<R> {
        let grid = self.upgrade()?;
        let guard = grid.try_borrow().map_err(|_| GridError::Borrowed)?;
        Ok(f(&guard))
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut SparseGrid) -> Result<R>) -> Result<R> {
        let grid = self.upgrade()?;
        let mut guard = grid.try_borrow_mut().map_err(|_| GridError::Borrowed)?;
        f(&mut guard)
    }

    pub(crate) fn config(&self) -> Result<GridConfig> {
        self.read(|grid| *grid.config())
    }

    /// Fail unless `rect` lies in the grid's addressable space.
    pub(crate) fn check_rect(&self, rect: &CoordinateRect) -> Result<()> {
        self.config()?.check_rect(rect)
    }

    /// The rect `range` names on this grid; see [`GridConfig::resolve`].
    pub(crate) fn resolve(&self, range: impl RangeArg) -> Result<CoordinateRect> {
        let reference = range.to_reference()?;
        self.config()?.resolve(&reference)
    }
}

/// Anything that names a range on a worksheet.
pub trait RangeArg {
    fn to_reference(self) -> Result<RangeReference>;
}

impl RangeArg for &str {
    /// A1 or absolute R1C1 text; relative R1C1 has no origin here.
    fn to_reference(self) -> Result<RangeReference> {
        let kind = NotationKind::detect(self);
        Ok(parse_reference(self, kind, None)?)
    }
}

impl RangeArg for &String {
    fn to_reference(self) -> Result<RangeReference> {
        self.as_str().to_reference()
    }
}

impl RangeArg for String {
    fn to_reference(self) -> Result<RangeReference> {
        self.as_str().to_reference()
    }
}

impl RangeArg for RangeReference {
    fn to_reference(self) -> Result<RangeReference> {
        Ok(self)
    }
}

impl RangeArg for Coordinate {
    fn to_reference(self) -> Result<RangeReference> {
        Ok(RangeReference::from_rect(CoordinateRect::single(self)))
    }
}

impl RangeArg for CoordinateRect {
    fn to_reference(self) -> Result<RangeReference> {
        Ok(RangeReference::from_rect(self))
    }
}

/// A named sheet owning one grid.
#[derive(Debug)]
pub struct Worksheet {
    name: String,
    grid: Rc<RefCell<SparseGrid>>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Worksheet {
            name: name.into(),
            grid: Rc::new(RefCell::new(SparseGrid::new())),
        }
    }

    pub fn with_config(name: impl Into<String>, config: GridConfig) -> Result<Self> {
        Ok(Worksheet {
            name: name.into(),
            grid: Rc::new(RefCell::new(SparseGrid::with_config(config)?)),
        })
    }

    pub fn from_snapshot(name: impl Into<String>, snapshot: GridSnapshot) -> Result<Self> {
        Ok(Worksheet {
            name: name.into(),
            grid: Rc::new(RefCell::new(SparseGrid::from_snapshot(snapshot)?)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Direct read access to the grid.
    ///
    /// Panics if a mutable borrow from [`Worksheet::grid_mut`] is still alive.
    pub fn grid(&self) -> Ref<'_, SparseGrid> {
        self.grid.borrow()
    }

    /// Direct write access (structure edits, merges, bulk loads).
    ///
    /// Panics if any other borrow of the grid is still alive.
    pub fn grid_mut(&self) -> RefMut<'_, SparseGrid> {
        self.grid.borrow_mut()
    }

    pub fn snapshot(&self) -> Result<GridSnapshot> {
        self.handle().read(GridSnapshot::from_grid)
    }

    fn handle(&self) -> GridHandle {
        GridHandle(Rc::downgrade(&self.grid))
    }

    /// The cell at 1-based `(row, col)`.
    pub fn get_cell(&self, row: u32, col: u32) -> Result<CellView> {
        let coord = Coordinate::new(row, col)?;
        let handle = self.handle();
        handle.config()?.check_coord(coord)?;
        Ok(CellView::new(handle, coord))
    }

    pub fn get_row(&self, row: u32) -> Result<RowView> {
        let coord = Coordinate::new(row, 1)?;
        let handle = self.handle();
        handle.config()?.check_coord(coord)?;
        Ok(RowView::new(handle, row))
    }

    pub fn get_column(&self, col: u32) -> Result<ColumnView> {
        let coord = Coordinate::new(1, col)?;
        let handle = self.handle();
        handle.config()?.check_coord(coord)?;
        Ok(ColumnView::new(handle, col))
    }

    /// A range from a reference string, parsed reference, coordinate or rect.
    ///
    /// `3:5` and `C:D` shorthands span this sheet's columns or rows; explicit
    /// corners outside the sheet fail with `OutOfRange`.
    pub fn get_range(&self, range: impl RangeArg) -> Result<RangeView> {
        let handle = self.handle();
        let rect = handle.resolve(range)?;
        Ok(RangeView::new(handle, rect))
    }

    /// The sheet's used range, or [`UsedRange::Empty`] when nothing is written.
    pub fn used_range(&self) -> Result<UsedRange> {
        let handle = self.handle();
        Ok(match handle.read(|grid| grid.used_rect())? {
            Some(rect) => UsedRange::Range(RangeView::new(handle, rect)),
            None => UsedRange::Empty,
        })
    }
}
