//! Block model shared by every parser and serializer
//!
//! A document is an ordered sequence of [`Block`]s. Headings and list items
//! have no node type of their own: a [`TextBlock`] carries the literal
//! Markdown line (`## Title`, `  * item`), so the textual prefix is the
//! representation.

use crate::core::grid2md::table::generate_markdown;
use crate::core::options::MarkdownOptions;
use crate::data::constants::{
    HOST_ALIGN_CENTER, HOST_ALIGN_GENERAL, HOST_ALIGN_LEFT, HOST_ALIGN_RIGHT,
};

#[cfg(feature = "data-loading")]
use serde::{Deserialize, Serialize};

/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
pub enum Alignment {
    #[default]
    Undefined,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Map a host horizontal-alignment code; anything unrecognised is `Undefined`
    pub fn from_host_code(code: Option<i32>) -> Self {
        match code {
            Some(HOST_ALIGN_LEFT) => Alignment::Left,
            Some(HOST_ALIGN_CENTER) => Alignment::Center,
            Some(HOST_ALIGN_RIGHT) => Alignment::Right,
            _ => Alignment::Undefined,
        }
    }

    /// Convert to the host horizontal-alignment code
    pub fn to_host_code(&self) -> i32 {
        match self {
            Alignment::Undefined => HOST_ALIGN_GENERAL,
            Alignment::Left => HOST_ALIGN_LEFT,
            Alignment::Center => HOST_ALIGN_CENTER,
            Alignment::Right => HOST_ALIGN_RIGHT,
        }
    }

    /// Separator-row marker for this alignment
    pub fn separator_marker(&self) -> &'static str {
        match self {
            Alignment::Undefined => "---",
            Alignment::Left => ":---",
            Alignment::Center => ":-:",
            Alignment::Right => "---:",
        }
    }
}

/// Character style flags of a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
}

impl TextStyle {
    pub const PLAIN: TextStyle = TextStyle {
        bold: false,
        italic: false,
        strikethrough: false,
    };

    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && !self.strikethrough
    }
}

/// A contiguous span of text sharing one style combination
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
pub struct StyledSegment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
}

impl StyledSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::with_style(text, TextStyle::PLAIN)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::with_style(
            text,
            TextStyle {
                bold: true,
                ..TextStyle::PLAIN
            },
        )
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::with_style(
            text,
            TextStyle {
                italic: true,
                ..TextStyle::PLAIN
            },
        )
    }

    pub fn strikethrough(text: impl Into<String>) -> Self {
        Self::with_style(
            text,
            TextStyle {
                strikethrough: true,
                ..TextStyle::PLAIN
            },
        )
    }

    pub fn with_style(text: impl Into<String>, style: TextStyle) -> Self {
        StyledSegment {
            text: text.into(),
            bold: style.bold,
            italic: style.italic,
            strikethrough: style.strikethrough,
        }
    }

    pub fn style(&self) -> TextStyle {
        TextStyle {
            bold: self.bold,
            italic: self.italic,
            strikethrough: self.strikethrough,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.style().is_plain()
    }
}

/// A single table cell
///
/// `value` is the logical text: bars and newlines are stored as-is and only
/// escaped (`\|`, `<br>`) when the table is written as Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
pub struct TableCell {
    pub value: String,
    pub alignment: Alignment,
}

impl TableCell {
    pub fn new(value: impl Into<String>, alignment: Alignment) -> Self {
        TableCell {
            value: value.into(),
            alignment,
        }
    }

    /// Create an empty cell with undefined alignment
    pub fn empty() -> Self {
        Self::default()
    }
}

/// An ordered sequence of cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: Vec<TableCell>) -> Self {
        TableRow { cells }
    }

    pub fn push(&mut self, cell: TableCell) {
        self.cells.push(cell);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TableCell> {
        self.cells.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TableCell> {
        self.cells.iter()
    }

    /// Cell values in column order
    pub fn values(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.value.as_str()).collect()
    }
}

/// A table; row 0 is the header row and its alignments govern each column
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<TableRow>) -> Self {
        Table { rows }
    }

    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }

    /// Rows after the header
    pub fn body(&self) -> &[TableRow] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of columns, as defined by the header row
    pub fn column_count(&self) -> usize {
        self.header().map(TableRow::len).unwrap_or(0)
    }

    /// Per-column alignments taken from the header row
    pub fn column_alignments(&self) -> Vec<Alignment> {
        self.header()
            .map(|h| h.iter().map(|c| c.alignment).collect())
            .unwrap_or_default()
    }

    /// Serialize as a pipe table; an empty table yields an empty string
    pub fn to_markdown(&self, options: &MarkdownOptions) -> String {
        generate_markdown(self, options)
    }
}

/// One heading, paragraph or list line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
pub struct TextBlock {
    pub text: String,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        TextBlock { text: text.into() }
    }
}

/// A paragraph-level unit of a document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "data-loading", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Block {
    Text(TextBlock),
    Table(Table),
}

impl Block {
    pub fn text(text: impl Into<String>) -> Self {
        Block::Text(TextBlock::new(text))
    }

    pub fn table(table: Table) -> Self {
        Block::Table(table)
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Block::Text(t) => Some(&t.text),
            Block::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            Block::Text(_) => None,
        }
    }

    /// Markdown text of this block
    pub fn to_markdown(&self, options: &MarkdownOptions) -> String {
        match self {
            Block::Text(t) => t.text.clone(),
            Block::Table(t) => t.to_markdown(options),
        }
    }
}

/// Serialize a block sequence: blocks separated by one blank line, one trailing newline
pub fn blocks_to_markdown(blocks: &[Block], options: &MarkdownOptions) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let parts: Vec<String> = blocks
        .iter()
        .map(|b| b.to_markdown(options).trim_end_matches('\n').to_string())
        .collect();

    let mut output = parts.join("\n\n");
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_host_codes() {
        for align in [
            Alignment::Undefined,
            Alignment::Left,
            Alignment::Center,
            Alignment::Right,
        ] {
            assert_eq!(Alignment::from_host_code(Some(align.to_host_code())), align);
        }
        assert_eq!(Alignment::from_host_code(None), Alignment::Undefined);
        assert_eq!(Alignment::from_host_code(Some(-4130)), Alignment::Undefined);
    }

    #[test]
    fn test_segment_style() {
        let seg = StyledSegment::bold("x");
        assert!(!seg.is_plain());
        assert!(seg.style().bold);
        assert!(StyledSegment::plain("x").is_plain());
    }

    #[test]
    fn test_table_accessors() {
        let table = Table::from_rows(vec![
            TableRow::from_cells(vec![
                TableCell::new("A", Alignment::Left),
                TableCell::new("B", Alignment::Right),
            ]),
            TableRow::from_cells(vec![TableCell::new("1", Alignment::Left)]),
        ]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.body().len(), 1);
        assert_eq!(
            table.column_alignments(),
            vec![Alignment::Left, Alignment::Right]
        );
        assert!(Table::new().body().is_empty());
    }

    #[test]
    fn test_blocks_to_markdown_separation() {
        let blocks = vec![Block::text("# Title"), Block::text("body")];
        assert_eq!(
            blocks_to_markdown(&blocks, &MarkdownOptions::default()),
            "# Title\n\nbody\n"
        );
        assert_eq!(blocks_to_markdown(&[], &MarkdownOptions::default()), "");
    }
}
