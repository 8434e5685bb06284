//! Host spreadsheet and clipboard abstractions
//!
//! The conversion engine never talks to a spreadsheet application directly.
//! These traits are the seams a host integration implements:
//!
//! - `SelectionReader`: supplies the selected cells with style metadata
//! - `SheetWriter`: receives cell values, character formatting and alignment
//! - `ClipboardProvider`: system clipboard text
//!
//! `MemorySheet` and `MemoryClipboard` are in-memory implementations used by
//! the CLI and tests.

use std::collections::BTreeMap;
use std::ops::Range;

#[cfg(feature = "data-loading")]
use serde::Serialize;

use crate::core::grid::{CellGrid, SheetCell};
use crate::core::model::TextStyle;
use crate::utils::error::{ConversionError, ConversionResult};

/// Source of the current selection as a styled grid
pub trait SelectionReader {
    /// Read the selected cells; fails when nothing is selected
    fn read_selection(&self) -> ConversionResult<CellGrid>;
}

/// Destination for converted cells (rows and columns are 0-based)
pub trait SheetWriter {
    /// Set a cell's value, replacing any previous value and formatting
    fn set_value(&mut self, row: usize, column: usize, value: &str) -> ConversionResult<()>;

    /// Apply a character style to `chars` (counted in Unicode scalar values)
    fn apply_style(
        &mut self,
        row: usize,
        column: usize,
        chars: Range<usize>,
        style: TextStyle,
    ) -> ConversionResult<()>;

    /// Set a cell's horizontal-alignment code
    fn set_alignment(&mut self, row: usize, column: usize, code: i32) -> ConversionResult<()>;
}

/// System clipboard text access
pub trait ClipboardProvider {
    /// Current clipboard text (empty when the clipboard holds no text)
    fn read_text(&self) -> ConversionResult<String>;

    fn write_text(&mut self, text: &str) -> ConversionResult<()>;
}

/// A styled character range inside a cell
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "data-loading", derive(Serialize))]
pub struct StyleRun {
    pub start: usize,
    pub len: usize,
    pub style: TextStyle,
}

/// A cell held by `MemorySheet`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "data-loading", derive(Serialize))]
pub struct MemoryCell {
    pub row: usize,
    pub column: usize,
    pub value: String,
    pub font_size: Option<f64>,
    pub indent_level: u32,
    pub alignment: Option<i32>,
    pub runs: Vec<StyleRun>,
}

impl MemoryCell {
    fn new(row: usize, column: usize) -> Self {
        MemoryCell {
            row,
            column,
            ..Default::default()
        }
    }

    /// Whole-cell bold flag: `None` when only part of the text is bold
    ///
    /// Overlapping runs count each character once.
    pub fn bold(&self) -> Option<bool> {
        let len = self.value.chars().count();
        let mut covered = vec![false; len];
        for run in self.runs.iter().filter(|r| r.style.bold) {
            let end = run.start.saturating_add(run.len).min(len);
            for flag in covered.iter_mut().take(end).skip(run.start) {
                *flag = true;
            }
        }
        let bold_chars = covered.iter().filter(|&&b| b).count();

        if bold_chars == 0 {
            Some(false)
        } else if bold_chars >= len {
            Some(true)
        } else {
            None
        }
    }

    fn to_sheet_cell(&self) -> SheetCell {
        SheetCell {
            text: self.value.clone(),
            font_size: self.font_size,
            bold: self.bold(),
            indent_level: self.indent_level,
            alignment: self.alignment,
        }
    }
}

/// In-memory worksheet
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    cells: BTreeMap<(usize, usize), MemoryCell>,
    selection: Option<(Range<usize>, Range<usize>)>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a rectangle of `rows` x `columns` cells starting at (row, column)
    pub fn select(&mut self, row: usize, column: usize, rows: usize, columns: usize) {
        self.selection = Some((row..row + rows, column..column + columns));
    }

    /// Select every used cell, from (0, 0) to the furthest written cell
    pub fn select_used_range(&mut self) {
        let rows = self.cells.keys().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let columns = self.cells.keys().map(|&(_, c)| c + 1).max().unwrap_or(0);
        if rows == 0 {
            self.selection = None;
        } else {
            self.select(0, 0, rows, columns);
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&MemoryCell> {
        self.cells.get(&(row, column))
    }

    /// Value of a cell, empty when never written
    pub fn value(&self, row: usize, column: usize) -> &str {
        self.cell(row, column).map(|c| c.value.as_str()).unwrap_or("")
    }

    /// All written cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &MemoryCell> {
        self.cells.values()
    }

    /// Store a pre-styled cell (for building fixtures)
    pub fn put(&mut self, row: usize, column: usize, cell: SheetCell) {
        let mut stored = MemoryCell::new(row, column);
        stored.value = cell.text;
        stored.font_size = cell.font_size;
        stored.indent_level = cell.indent_level;
        stored.alignment = cell.alignment;
        if cell.bold == Some(true) {
            stored.runs.push(StyleRun {
                start: 0,
                len: stored.value.chars().count(),
                style: TextStyle {
                    bold: true,
                    ..TextStyle::PLAIN
                },
            });
        }
        self.cells.insert((row, column), stored);
    }

    fn entry(&mut self, row: usize, column: usize) -> &mut MemoryCell {
        self.cells
            .entry((row, column))
            .or_insert_with(|| MemoryCell::new(row, column))
    }
}

impl SelectionReader for MemorySheet {
    fn read_selection(&self) -> ConversionResult<CellGrid> {
        let (rows, columns) = self
            .selection
            .clone()
            .ok_or_else(|| ConversionError::host("no cells are selected"))?;

        let grid = rows
            .map(|r| {
                columns
                    .clone()
                    .map(|c| {
                        self.cell(r, c)
                            .map(MemoryCell::to_sheet_cell)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Ok(CellGrid::from_rows(grid))
    }
}

impl SheetWriter for MemorySheet {
    fn set_value(&mut self, row: usize, column: usize, value: &str) -> ConversionResult<()> {
        let cell = self.entry(row, column);
        cell.value = value.to_string();
        cell.runs.clear();
        Ok(())
    }

    fn apply_style(
        &mut self,
        row: usize,
        column: usize,
        chars: Range<usize>,
        style: TextStyle,
    ) -> ConversionResult<()> {
        let cell = self.entry(row, column);
        let len = cell.value.chars().count();
        if chars.start >= chars.end || chars.end > len {
            return Err(ConversionError::host(format!(
                "character range {}..{} outside cell ({}, {}) of length {}",
                chars.start, chars.end, row, column, len
            )));
        }
        cell.runs.push(StyleRun {
            start: chars.start,
            len: chars.end - chars.start,
            style,
        });
        Ok(())
    }

    fn set_alignment(&mut self, row: usize, column: usize, code: i32) -> ConversionResult<()> {
        self.entry(row, column).alignment = Some(code);
        Ok(())
    }
}

/// In-memory clipboard
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        MemoryClipboard {
            text: Some(text.into()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn read_text(&self) -> ConversionResult<String> {
        Ok(self.text.clone().unwrap_or_default())
    }

    fn write_text(&mut self, text: &str) -> ConversionResult<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read_back() {
        let mut sheet = MemorySheet::new();
        sheet.set_value(0, 0, "hello").unwrap();
        sheet.set_alignment(0, 1, -4152).unwrap();
        sheet.select(0, 0, 1, 2);

        let grid = sheet.read_selection().unwrap();
        assert_eq!(grid.rows[0][0].text, "hello");
        assert_eq!(grid.rows[0][1].alignment, Some(-4152));
        assert_eq!(grid.rows[0][1].text, "");
    }

    #[test]
    fn test_no_selection_is_host_error() {
        let sheet = MemorySheet::new();
        let err = sheet.read_selection().unwrap_err();
        assert!(matches!(err, ConversionError::Host { .. }));
    }

    #[test]
    fn test_partial_bold_reads_as_mixed() {
        let mut sheet = MemorySheet::new();
        let bold = TextStyle {
            bold: true,
            ..TextStyle::PLAIN
        };
        sheet.set_value(0, 0, "ab").unwrap();
        sheet.apply_style(0, 0, 0..1, bold).unwrap();
        assert_eq!(sheet.cell(0, 0).unwrap().bold(), None);

        sheet.apply_style(0, 0, 1..2, bold).unwrap();
        assert_eq!(sheet.cell(0, 0).unwrap().bold(), Some(true));
    }

    #[test]
    fn test_overlapping_bold_runs_count_once() {
        let mut sheet = MemorySheet::new();
        let bold = TextStyle {
            bold: true,
            ..TextStyle::PLAIN
        };
        sheet.set_value(0, 0, "ab").unwrap();
        sheet.apply_style(0, 0, 0..1, bold).unwrap();
        sheet.apply_style(0, 0, 0..1, bold).unwrap();
        assert_eq!(sheet.cell(0, 0).unwrap().bold(), None);
    }

    #[test]
    fn test_style_range_checked() {
        let mut sheet = MemorySheet::new();
        sheet.set_value(0, 0, "ab").unwrap();
        assert!(sheet.apply_style(0, 0, 1..5, TextStyle::PLAIN).is_err());
    }

    #[test]
    fn test_select_used_range() {
        let mut sheet = MemorySheet::new();
        sheet.select_used_range();
        assert!(sheet.read_selection().is_err());

        sheet.put(2, 1, SheetCell::new("x").with_bold(true));
        sheet.select_used_range();
        let grid = sheet.read_selection().unwrap();
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.rows[2][1].bold, Some(true));
    }

    #[test]
    fn test_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.read_text().unwrap(), "");
        clipboard.write_text("# hi").unwrap();
        assert_eq!(clipboard.read_text().unwrap(), "# hi");
        assert_eq!(clipboard.text(), Some("# hi"));
    }
}
