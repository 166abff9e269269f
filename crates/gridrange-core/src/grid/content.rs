//! Cell content stored in the grid.
//!
//! - [`CellContent::Empty`] is never stored; writing it clears the cell
//! - [`CellContent::Blank`] is a formatted cell with no value; it is stored and
//!   counts toward the used range
//! - Formulas are kept as opaque text without the leading `=`

use serde::{Deserialize, Serialize};

/// The content of a single cell.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum CellContent {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Boolean(bool),
    Formula(String),
    /// Formatting only; `style` is an opaque id owned by the styling layer.
    Blank { style: u32 },
}

impl CellContent {
    pub fn text(text: &str) -> CellContent {
        CellContent::Text(text.to_string())
    }

    pub fn formula(formula: &str) -> CellContent {
        CellContent::Formula(formula.to_string())
    }

    /// True for content that is not stored (a clear).
    pub fn is_empty(&self) -> bool {
        matches!(self, CellContent::Empty)
    }

    /// Parse user input and create appropriate content.
    /// - Empty string or whitespace -> Empty
    /// - Starts with '=' -> Formula (without the '=')
    /// - Quoted string -> Text (without quotes)
    /// - TRUE / FALSE (any case) -> Boolean
    /// - Valid number -> Number
    /// - Otherwise -> Text
    pub fn from_input(input: &str) -> CellContent {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return CellContent::Empty;
        }

        if let Some(formula) = trimmed.strip_prefix('=') {
            return CellContent::formula(formula);
        }

        if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
            return CellContent::text(&trimmed[1..trimmed.len() - 1]);
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return CellContent::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellContent::Boolean(false);
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            return CellContent::Number(n);
        }

        CellContent::text(trimmed)
    }

    /// Inverse of [`CellContent::from_input`] for editing.
    pub fn to_input_string(&self) -> String {
        match self {
            CellContent::Empty | CellContent::Blank { .. } => String::new(),
            CellContent::Text(s) => {
                if CellContent::from_input(s) == CellContent::Text(s.clone()) {
                    s.clone()
                } else {
                    format!("\"{}\"", s)
                }
            }
            CellContent::Number(n) => n.to_string(),
            CellContent::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellContent::Formula(s) => format!("={}", s),
        }
    }
}

impl From<f64> for CellContent {
    fn from(n: f64) -> Self {
        CellContent::Number(n)
    }
}

impl From<bool> for CellContent {
    fn from(b: bool) -> Self {
        CellContent::Boolean(b)
    }
}

impl From<&str> for CellContent {
    fn from(s: &str) -> Self {
        CellContent::text(s)
    }
}

impl From<String> for CellContent {
    fn from(s: String) -> Self {
        CellContent::Text(s)
    }
}
