//! Styled cell grid read from the host spreadsheet

#[cfg(feature = "data-loading")]
use serde::{Deserialize, Serialize};

/// One host cell with the style metadata the classifier looks at
///
/// `None` stands for a value the host reports as mixed or unknown, e.g. a
/// cell whose characters have different font sizes.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "data-loading", serde(default))]
pub struct SheetCell {
    /// Displayed text
    pub text: String,
    /// Font size in points
    pub font_size: Option<f64>,
    /// Bold flag
    pub bold: Option<bool>,
    /// Indent level (0 = not indented)
    pub indent_level: u32,
    /// Host horizontal-alignment code
    pub alignment: Option<i32>,
}

impl SheetCell {
    pub fn new(text: impl Into<String>) -> Self {
        SheetCell {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_indent(mut self, level: u32) -> Self {
        self.indent_level = level;
        self
    }

    pub fn with_alignment(mut self, code: i32) -> Self {
        self.alignment = Some(code);
        self
    }

    /// Whether the text is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A rectangular selection of cells, row-major
///
/// Rows may be ragged; missing trailing cells read as empty.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
pub struct CellGrid {
    pub rows: Vec<Vec<SheetCell>>,
}

impl CellGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<SheetCell>>) -> Self {
        CellGrid { rows }
    }

    /// Build an unstyled grid from plain text
    pub fn from_text_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CellGrid {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(SheetCell::new).collect())
                .collect(),
        }
    }

    pub fn push_row(&mut self, row: Vec<SheetCell>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&SheetCell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.iter().all(SheetCell::is_blank))
    }
}
