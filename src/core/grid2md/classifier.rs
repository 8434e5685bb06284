//! Range-to-blocks classifier
//!
//! Reads a styled grid top to bottom and decides, row by row, whether it
//! belongs to a table or is a heading, list item or paragraph:
//!
//! - two or more non-empty cells: a table row (opens a table if none is open)
//! - one non-empty cell inside an open table: a sparse table row, unless the
//!   cell is a heading, which closes the table
//! - one non-empty cell otherwise: heading, list item or paragraph
//! - no non-empty cell: closes any open table, emits nothing

use log::trace;

use crate::core::grid::{CellGrid, SheetCell};
use crate::core::model::{Alignment, Block, Table, TableCell, TableRow};
use crate::core::options::ClassifyOptions;
use crate::data::constants::{BULLET_CHARS, LIST_PREFIXES, MAX_INDENT_LEVEL};

/// Classify a grid into blocks
pub fn classify_grid(grid: &CellGrid, options: &ClassifyOptions) -> Vec<Block> {
    let col_count = grid.column_count();
    let mut blocks = Vec::new();
    let mut current_table: Option<Table> = None;

    for (row_idx, row) in grid.rows.iter().enumerate() {
        let non_empty_count = row.iter().filter(|c| !c.is_blank()).count();
        let first_non_empty = row.iter().find(|c| !c.is_blank());

        let is_table_row = match (non_empty_count, first_non_empty) {
            (0, _) | (_, None) => false,
            (1, Some(cell)) => current_table.is_some() && heading_level(cell, options).is_none(),
            _ => true,
        };

        if is_table_row {
            trace!("row {}: table row ({} filled)", row_idx, non_empty_count);
            current_table
                .get_or_insert_with(Table::new)
                .push_row(build_table_row(row, col_count));
            continue;
        }

        if let Some(table) = current_table.take() {
            trace!("row {}: closes table of {} row(s)", row_idx, table.rows.len());
            blocks.push(Block::table(table));
        }

        if let Some(cell) = first_non_empty {
            let block = classify_text_cell(cell, options);
            trace!("row {}: text block {:?}", row_idx, block.as_text());
            blocks.push(block);
        }
    }

    if let Some(table) = current_table {
        blocks.push(Block::table(table));
    }

    blocks
}

/// Heading level of a cell: size ≥ h1 → 1, size ≥ h2 → 2, bold → 3
///
/// The checks run in this order, so a large bold cell is never level 3.
pub fn heading_level(cell: &SheetCell, options: &ClassifyOptions) -> Option<usize> {
    if let Some(size) = cell.font_size {
        if size >= options.heading1_min_size {
            return Some(1);
        }
        if size >= options.heading2_min_size {
            return Some(2);
        }
    }

    if cell.bold == Some(true) {
        return Some(3);
    }

    None
}

/// Whether a cell reads as a list item: indented, or starting with a bullet
pub fn is_list_item(cell: &SheetCell) -> bool {
    if cell.indent_level > 0 {
        return true;
    }
    let text = cell.text.trim();
    LIST_PREFIXES.iter().any(|p| text.starts_with(p))
}

/// Convert a single heading/list/paragraph cell into a text block
pub fn classify_text_cell(cell: &SheetCell, options: &ClassifyOptions) -> Block {
    let text = normalize_newlines(&cell.text);

    if let Some(level) = heading_level(cell, options) {
        return Block::text(format!("{} {}", "#".repeat(level), text));
    }

    if is_list_item(cell) {
        let level = cell.indent_level.min(MAX_INDENT_LEVEL) as usize;
        let indent = " ".repeat(level.saturating_mul(options.list_indent_width));
        return Block::text(format!("{}* {}", indent, strip_bullet(text.trim())));
    }

    Block::text(text)
}

fn build_table_row(cells: &[SheetCell], col_count: usize) -> TableRow {
    TableRow::from_cells(
        (0..col_count)
            .map(|col| match cells.get(col) {
                Some(cell) => {
                    TableCell::new(cell.text.clone(), Alignment::from_host_code(cell.alignment))
                }
                None => TableCell::empty(),
            })
            .collect(),
    )
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ")
}

/// Remove one leading bullet character and the space after it
fn strip_bullet(text: &str) -> &str {
    match text.chars().next() {
        Some(c) if BULLET_CHARS.contains(&c) => text[c.len_utf8()..].trim_start(),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::constants::{HOST_ALIGN_CENTER, HOST_ALIGN_RIGHT};
    use pretty_assertions::assert_eq;

    fn opts() -> ClassifyOptions {
        ClassifyOptions::default()
    }

    fn text_row(cells: &[&str]) -> Vec<SheetCell> {
        cells.iter().map(|t| SheetCell::new(*t)).collect()
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading_level(&SheetCell::new("x").with_font_size(18.0), &opts()), Some(1));
        assert_eq!(heading_level(&SheetCell::new("x").with_font_size(14.0), &opts()), Some(2));
        assert_eq!(heading_level(&SheetCell::new("x").with_font_size(17.9), &opts()), Some(2));
        assert_eq!(
            heading_level(&SheetCell::new("x").with_font_size(11.0).with_bold(true), &opts()),
            Some(3)
        );
        assert_eq!(heading_level(&SheetCell::new("x").with_font_size(11.0), &opts()), None);
        assert_eq!(heading_level(&SheetCell::new("x"), &opts()), None);
    }

    #[test]
    fn test_large_bold_is_level_one() {
        let cell = SheetCell::new("Title").with_font_size(20.0).with_bold(true);
        assert_eq!(classify_text_cell(&cell, &opts()), Block::text("# Title"));
    }

    #[test]
    fn test_mixed_style_is_not_heading() {
        let cell = SheetCell {
            text: "partly bold".to_string(),
            bold: None,
            font_size: None,
            ..Default::default()
        };
        assert_eq!(classify_text_cell(&cell, &opts()), Block::text("partly bold"));
    }

    #[test]
    fn test_list_items() {
        let indented = SheetCell::new("nested").with_indent(2);
        assert_eq!(classify_text_cell(&indented, &opts()), Block::text("    * nested"));

        let bulleted = SheetCell::new("• first");
        assert_eq!(classify_text_cell(&bulleted, &opts()), Block::text("* first"));

        let dashed = SheetCell::new("- second");
        assert_eq!(classify_text_cell(&dashed, &opts()), Block::text("* second"));

        let starred = SheetCell::new("  * third");
        assert_eq!(classify_text_cell(&starred, &opts()), Block::text("* third"));
    }

    #[test]
    fn test_indent_level_is_clamped() {
        let cell = SheetCell::new("deep").with_indent(u32::MAX);
        let expected = format!("{}* deep", " ".repeat(MAX_INDENT_LEVEL as usize * 2));
        assert_eq!(classify_text_cell(&cell, &opts()), Block::text(expected));
    }

    #[test]
    fn test_dash_without_space_is_paragraph() {
        let cell = SheetCell::new("-5 degrees");
        assert_eq!(classify_text_cell(&cell, &opts()), Block::text("-5 degrees"));
    }

    #[test]
    fn test_heading_beats_list() {
        let cell = SheetCell::new("- Big").with_font_size(24.0).with_indent(1);
        assert_eq!(classify_text_cell(&cell, &opts()), Block::text("# - Big"));
    }

    #[test]
    fn test_newlines_normalized() {
        let cell = SheetCell::new("two\nlines").with_font_size(15.0);
        assert_eq!(classify_text_cell(&cell, &opts()), Block::text("## two lines"));
        assert_eq!(
            classify_text_cell(&SheetCell::new("a\r\nb"), &opts()),
            Block::text("a b")
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let options = ClassifyOptions {
            heading1_min_size: 24.0,
            heading2_min_size: 16.0,
            list_indent_width: 4,
        };
        let cell = SheetCell::new("x").with_font_size(20.0);
        assert_eq!(classify_text_cell(&cell, &options), Block::text("## x"));
        let item = SheetCell::new("y").with_indent(1);
        assert_eq!(classify_text_cell(&item, &options), Block::text("    * y"));
    }

    #[test]
    fn test_table_rows_keep_all_columns() {
        let grid = CellGrid::from_rows(vec![
            vec![
                SheetCell::new("A").with_alignment(HOST_ALIGN_CENTER),
                SheetCell::new("B").with_alignment(HOST_ALIGN_RIGHT),
                SheetCell::new(""),
            ],
            text_row(&["1", "2"]),
        ]);

        let blocks = classify_grid(&grid, &opts());
        assert_eq!(blocks.len(), 1);
        let table = blocks[0].as_table().unwrap();
        assert_eq!(table.rows[0].values(), vec!["A", "B", ""]);
        assert_eq!(table.rows[1].values(), vec!["1", "2", ""]);
        assert_eq!(
            table.column_alignments(),
            vec![Alignment::Center, Alignment::Right, Alignment::Undefined]
        );
    }

    #[test]
    fn test_sparse_row_continues_table() {
        let grid = CellGrid::from_rows(vec![
            text_row(&["A", "B"]),
            text_row(&["", "only"]),
            text_row(&["C", "D"]),
        ]);

        let blocks = classify_grid(&grid, &opts());
        assert_eq!(blocks.len(), 1);
        let table = blocks[0].as_table().unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1].values(), vec!["", "only"]);
    }

    #[test]
    fn test_heading_row_closes_table() {
        let grid = CellGrid::from_rows(vec![
            text_row(&["A", "B"]),
            vec![SheetCell::new("Next").with_bold(true), SheetCell::new("")],
            text_row(&["C", "D"]),
        ]);

        let blocks = classify_grid(&grid, &opts());
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].is_table());
        assert_eq!(blocks[1], Block::text("### Next"));
        assert_eq!(blocks[2].as_table().unwrap().rows.len(), 1);
    }

    #[test]
    fn test_empty_row_closes_table() {
        let grid = CellGrid::from_rows(vec![
            text_row(&["A", "B"]),
            text_row(&["", ""]),
            text_row(&["C", "D"]),
        ]);

        let blocks = classify_grid(&grid, &opts());
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(Block::is_table));
    }

    #[test]
    fn test_single_cells_outside_table() {
        let grid = CellGrid::from_rows(vec![
            vec![SheetCell::new("Report").with_font_size(20.0)],
            text_row(&["", "intro text"]),
            vec![SheetCell::new("point").with_indent(1)],
        ]);

        let blocks = classify_grid(&grid, &opts());
        assert_eq!(
            blocks,
            vec![
                Block::text("# Report"),
                Block::text("intro text"),
                Block::text("  * point"),
            ]
        );
    }

    #[test]
    fn test_empty_grid() {
        assert!(classify_grid(&CellGrid::new(), &opts()).is_empty());
    }
}
