//! Grid parser: pipe-table text to untyped rows of cell strings

use crate::data::constants::TABLE_LINE;
use crate::utils::error::{ConversionError, ConversionResult};

/// Untyped rows of trimmed cell strings, separator row included
pub type RawGrid = Vec<Vec<String>>;

/// Parse pipe-table text into rows of cell strings
///
/// Blank lines are skipped. Fails when fewer than two rows remain (a table
/// needs a header and a separator), when a line is not a pipe row, or when a
/// row has no cells.
pub fn parse_grid(table_text: &str) -> ConversionResult<RawGrid> {
    let lines: Vec<(usize, &str)> = table_text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(ConversionError::format(format!(
            "a table needs a header row and a separator row, found {} row(s)",
            lines.len()
        )));
    }

    let mut grid = Vec::with_capacity(lines.len());
    for (line_no, line) in lines {
        if !TABLE_LINE.is_match(line) {
            return Err(ConversionError::format_at(
                "line is not enclosed in pipes",
                line_no,
            ));
        }

        let cells = split_row(line);
        if cells.is_empty() {
            return Err(ConversionError::format_at("row has no cells", line_no));
        }
        grid.push(cells);
    }

    Ok(grid)
}

/// Split one trimmed `|...|` line into trimmed cells
///
/// The outer pipes are stripped and the rest is split on unescaped `|`.
/// Inside a cell `\|` becomes `|` and `\\` becomes `\`. Other backslashes
/// are kept. `||` has no cells.
pub fn split_row(line: &str) -> Vec<String> {
    let inner = line
        .strip_prefix('|')
        .and_then(|s| s.strip_suffix('|'))
        .unwrap_or(line);

    if inner.is_empty() {
        return Vec::new();
    }

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if matches!(chars.peek(), Some('|') | Some('\\')) => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            '|' => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    cells.push(current.trim().to_string());

    cells
}
