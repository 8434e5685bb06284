//! Writes parsed blocks into a sheet

use log::debug;

use super::inline::{has_inline_markers, parse_inline, plain_text};
use super::table::decode_line_breaks;
use crate::core::model::{Block, Table};
use crate::utils::error::ConversionResult;
use crate::utils::host::SheetWriter;

/// Write blocks starting at (origin_row, origin_column); returns the rows used
///
/// A text block takes one row in the origin column. A table takes one row
/// per table row, cell `j` in column `origin_column + j`, and also receives
/// its column alignment. Every value is run through the inline parser so the
/// cell holds clean text with bold/italic/strikethrough applied to the
/// matching character ranges.
pub fn write_blocks<W: SheetWriter + ?Sized>(
    blocks: &[Block],
    sheet: &mut W,
    origin_row: usize,
    origin_column: usize,
) -> ConversionResult<usize> {
    let mut row = origin_row;

    for block in blocks {
        match block {
            Block::Text(text) => {
                write_styled_value(sheet, row, origin_column, &text.text)?;
                row += 1;
            }
            Block::Table(table) => {
                row += write_table(sheet, table, row, origin_column)?;
            }
        }
    }

    debug!(
        "wrote {} block(s) into {} row(s) at ({}, {})",
        blocks.len(),
        row - origin_row,
        origin_row,
        origin_column
    );
    Ok(row - origin_row)
}

fn write_table<W: SheetWriter + ?Sized>(
    sheet: &mut W,
    table: &Table,
    start_row: usize,
    start_column: usize,
) -> ConversionResult<usize> {
    for (i, table_row) in table.rows.iter().enumerate() {
        for (j, cell) in table_row.iter().enumerate() {
            let (row, column) = (start_row + i, start_column + j);
            write_styled_value(sheet, row, column, &cell.value)?;
            sheet.set_alignment(row, column, cell.alignment.to_host_code())?;
        }
    }
    Ok(table.rows.len())
}

/// Write one cell: markers stripped from the value, styles applied per segment
fn write_styled_value<W: SheetWriter + ?Sized>(
    sheet: &mut W,
    row: usize,
    column: usize,
    markdown: &str,
) -> ConversionResult<()> {
    let text = decode_line_breaks(markdown);
    if !has_inline_markers(&text) {
        return sheet.set_value(row, column, &text);
    }

    let segments = parse_inline(&text);
    sheet.set_value(row, column, &plain_text(&segments))?;

    let mut start = 0;
    for segment in &segments {
        let len = segment.text.chars().count();
        if len > 0 && !segment.is_plain() {
            sheet.apply_style(row, column, start..start + len, segment.style())?;
        }
        start += len;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Alignment, TableCell, TableRow, TextStyle};
    use crate::data::constants::{HOST_ALIGN_CENTER, HOST_ALIGN_GENERAL};
    use crate::utils::host::{MemorySheet, StyleRun};

    #[test]
    fn test_text_block_styles() {
        let mut sheet = MemorySheet::new();
        let rows = write_blocks(&[Block::text("a **b** ~~c~~")], &mut sheet, 0, 0).unwrap();

        assert_eq!(rows, 1);
        let cell = sheet.cell(0, 0).unwrap();
        assert_eq!(cell.value, "a b c");
        assert_eq!(
            cell.runs,
            vec![
                StyleRun {
                    start: 2,
                    len: 1,
                    style: TextStyle {
                        bold: true,
                        ..TextStyle::PLAIN
                    },
                },
                StyleRun {
                    start: 4,
                    len: 1,
                    style: TextStyle {
                        strikethrough: true,
                        ..TextStyle::PLAIN
                    },
                },
            ]
        );
    }

    #[test]
    fn test_table_block_layout() {
        let table = Table::from_rows(vec![
            TableRow::from_cells(vec![
                TableCell::new("A", Alignment::Center),
                TableCell::new("B", Alignment::Undefined),
            ]),
            TableRow::from_cells(vec![
                TableCell::new("x\ny", Alignment::Center),
                TableCell::new("*z*", Alignment::Undefined),
            ]),
        ]);
        let blocks = vec![Block::text("# T"), Block::table(table), Block::text("end")];

        let mut sheet = MemorySheet::new();
        let rows = write_blocks(&blocks, &mut sheet, 3, 1).unwrap();

        assert_eq!(rows, 4);
        assert_eq!(sheet.value(3, 1), "# T");
        assert_eq!(sheet.value(4, 1), "A");
        assert_eq!(sheet.value(4, 2), "B");
        assert_eq!(sheet.value(5, 1), "x\ny");
        assert_eq!(sheet.value(5, 2), "z");
        assert_eq!(sheet.value(6, 1), "end");
        assert_eq!(sheet.cell(4, 1).unwrap().alignment, Some(HOST_ALIGN_CENTER));
        assert_eq!(sheet.cell(5, 2).unwrap().alignment, Some(HOST_ALIGN_GENERAL));
        assert!(sheet.cell(5, 2).unwrap().runs[0].style.italic);
    }

    #[test]
    fn test_residual_line_break_markers() {
        let mut sheet = MemorySheet::new();
        write_blocks(&[Block::text("one<br>two")], &mut sheet, 0, 0).unwrap();
        assert_eq!(sheet.value(0, 0), "one\ntwo");
    }

    #[test]
    fn test_unmarked_value_has_no_runs() {
        let mut sheet = MemorySheet::new();
        write_blocks(&[Block::text("C:\\tmp 5 + 3")], &mut sheet, 0, 0).unwrap();
        let cell = sheet.cell(0, 0).unwrap();
        assert_eq!(cell.value, "C:\\tmp 5 + 3");
        assert!(cell.runs.is_empty());
    }

    #[test]
    fn test_multibyte_ranges() {
        let mut sheet = MemorySheet::new();
        write_blocks(&[Block::text("é **ü**")], &mut sheet, 0, 0).unwrap();
        let cell = sheet.cell(0, 0).unwrap();
        assert_eq!(cell.value, "é ü");
        assert_eq!(cell.runs[0].start, 2);
        assert_eq!(cell.runs[0].len, 1);
    }
}
