//! Pipe-table generator

use std::fmt::Write;

use crate::core::model::{Table, TableRow};
use crate::core::options::MarkdownOptions;
use crate::data::constants::LINE_BREAK_MARKER;

/// Generate the Markdown pipe table for `table`
///
/// The header row fixes the column count: shorter body rows are padded with
/// empty cells and cells past the last header column are not written. Every
/// line ends with a newline; an empty table yields an empty string.
pub fn generate_markdown(table: &Table, options: &MarkdownOptions) -> String {
    let header = match table.header() {
        Some(h) => h,
        None => return String::new(),
    };
    let col_count = header.len();
    let mut output = String::new();

    // Header
    write_row(&mut output, header, col_count, options);

    // Separator
    output.push('|');
    for cell in header.iter() {
        write_cell(&mut output, cell.alignment.separator_marker(), options);
    }
    output.push('\n');

    // Body
    for row in table.body() {
        write_row(&mut output, row, col_count, options);
    }

    output
}

fn write_row(output: &mut String, row: &TableRow, col_count: usize, options: &MarkdownOptions) {
    output.push('|');
    for col in 0..col_count {
        let text = row
            .get(col)
            .map(|c| escape_cell_text(&c.value))
            .unwrap_or_default();
        write_cell(output, &text, options);
    }
    output.push('\n');
}

fn write_cell(output: &mut String, text: &str, options: &MarkdownOptions) {
    if options.pad_cells {
        let _ = write!(output, " {} |", text);
    } else {
        let _ = write!(output, "{}|", text);
    }
}

/// Escape a cell value for a pipe table
///
/// `\` becomes `\\` and `|` becomes `\|`, so a trailing backslash cannot
/// swallow the closing pipe. Newlines become `<br>`.
pub fn escape_cell_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace("\r\n", LINE_BREAK_MARKER)
        .replace('\n', LINE_BREAK_MARKER)
}
