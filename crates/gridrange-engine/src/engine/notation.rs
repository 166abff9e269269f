//! Reference notations and parsed reference metadata.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use regex::Regex;

use super::rect::CoordinateRect;

/// Absolute (`$`) markers for one corner of a reference.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReferenceStyle {
    pub absolute_row: bool,
    pub absolute_column: bool,
}

impl ReferenceStyle {
    pub const RELATIVE: ReferenceStyle = ReferenceStyle {
        absolute_row: false,
        absolute_column: false,
    };
    pub const ABSOLUTE: ReferenceStyle = ReferenceStyle {
        absolute_row: true,
        absolute_column: true,
    };

    pub const fn new(absolute_row: bool, absolute_column: bool) -> Self {
        ReferenceStyle {
            absolute_row,
            absolute_column,
        }
    }

    pub fn is_fully_absolute(&self) -> bool {
        self.absolute_row && self.absolute_column
    }
}

/// Notation to emit, with the reference style applied to every corner.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ReferenceNotation {
    A1(ReferenceStyle),
    R1C1(ReferenceStyle),
}

impl ReferenceNotation {
    pub fn kind(&self) -> NotationKind {
        match self {
            ReferenceNotation::A1(_) => NotationKind::A1,
            ReferenceNotation::R1C1(_) => NotationKind::R1C1,
        }
    }

    pub fn style(&self) -> ReferenceStyle {
        match self {
            ReferenceNotation::A1(style) | ReferenceNotation::R1C1(style) => *style,
        }
    }
}

impl Default for ReferenceNotation {
    fn default() -> Self {
        ReferenceNotation::A1(ReferenceStyle::RELATIVE)
    }
}

/// Notation tag without style flags, used when parsing.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotationKind {
    #[default]
    A1,
    R1C1,
}

impl NotationKind {
    /// R1C1 when the whole text matches the R1C1 grammar, A1 otherwise.
    ///
    /// Text like `R1C1` is never valid A1, so the two grammars do not overlap.
    pub fn detect(text: &str) -> NotationKind {
        if r1c1_shape_re().is_match(text) {
            NotationKind::R1C1
        } else {
            NotationKind::A1
        }
    }

    pub fn with_style(self, style: ReferenceStyle) -> ReferenceNotation {
        match self {
            NotationKind::A1 => ReferenceNotation::A1(style),
            NotationKind::R1C1 => ReferenceNotation::R1C1(style),
        }
    }
}

fn r1c1_shape_re() -> &'static Regex {
    static R1C1_RE: OnceLock<Regex> = OnceLock::new();
    R1C1_RE.get_or_init(|| {
        let side = r"R(?:\[-?\d+\]|\d+)C(?:\[-?\d+\]|\d+)";
        Regex::new(&format!(r"^{side}(?::{side})?$")).expect("R1C1 shape regex must compile")
    })
}

/// What kind of reference was written.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Shorthand {
    /// Explicit cell corners, e.g. `B2:D10`.
    Cells,
    /// Entire-row shorthand, e.g. `3:5`.
    Rows,
    /// Entire-column shorthand, e.g. `C:D`.
    Columns,
}

/// A parsed reference: the rect plus how each corner was written.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RangeReference {
    pub rect: CoordinateRect,
    pub start_style: ReferenceStyle,
    pub end_style: ReferenceStyle,
    pub shorthand: Shorthand,
}

impl RangeReference {
    /// Explicit relative corners for an already-built rect.
    pub fn from_rect(rect: CoordinateRect) -> Self {
        RangeReference {
            rect,
            start_style: ReferenceStyle::RELATIVE,
            end_style: ReferenceStyle::RELATIVE,
            shorthand: Shorthand::Cells,
        }
    }
}
