//! Table parser: untyped grid (with separator row) to typed table

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::model::{Alignment, Table, TableCell, TableRow};
use crate::data::constants::LINE_BREAK_MARKERS;
use crate::utils::error::{ConversionError, ConversionResult};

lazy_static! {
    /// Strict separator cell grammar: optional colon, dashes, optional colon
    static ref SEPARATOR_CELL: Regex = Regex::new(r"^(:)?-+(:)?$").unwrap();
}

/// Build a typed table from a raw grid
///
/// Row 0 is the header, row 1 the separator, the rest body rows. Each column's
/// alignment comes from its separator cell and is copied onto every cell of
/// the column. Fails only when the separator row is missing or is not a
/// separator row at all; individual malformed separator cells degrade to
/// `Alignment::Undefined`.
pub fn parse_table(grid: &[Vec<String>]) -> ConversionResult<Table> {
    let header = grid
        .first()
        .ok_or_else(|| ConversionError::format("table has no header row"))?;
    let separator = grid
        .get(1)
        .ok_or_else(|| ConversionError::format("table has no separator row"))?;

    if !is_separator_row(separator) {
        return Err(ConversionError::format_at(
            "second row is not a separator row",
            2,
        ));
    }

    let alignments: Vec<Alignment> = (0..header.len())
        .map(|i| separator.get(i).map(|c| parse_alignment(c)).unwrap_or_default())
        .collect();

    let mut table = Table::new();
    table.push_row(build_row(header, &alignments));
    for row in &grid[2..] {
        table.push_row(build_row(row, &alignments));
    }

    Ok(table)
}

fn build_row(texts: &[String], alignments: &[Alignment]) -> TableRow {
    TableRow::from_cells(
        texts
            .iter()
            .enumerate()
            .map(|(col, text)| {
                let alignment = alignments.get(col).copied().unwrap_or_default();
                TableCell::new(decode_line_breaks(text), alignment)
            })
            .collect(),
    )
}

/// Whether a row is a separator row: only `-`, `:` and spaces, with at least one dash
pub fn is_separator_row(cells: &[String]) -> bool {
    let only_marker_chars = cells
        .iter()
        .all(|c| c.chars().all(|ch| ch == '-' || ch == ':' || ch.is_whitespace()));
    only_marker_chars && cells.iter().any(|c| c.contains('-'))
}

/// Alignment of a separator cell, or `None` when it does not match `:?-+:?`
pub fn separator_cell_alignment(cell: &str) -> Option<Alignment> {
    let caps = SEPARATOR_CELL.captures(cell.trim())?;
    let alignment = match (caps.get(1).is_some(), caps.get(2).is_some()) {
        (true, true) => Alignment::Center,
        (true, false) => Alignment::Left,
        (false, true) => Alignment::Right,
        (false, false) => Alignment::Undefined,
    };
    Some(alignment)
}

/// Alignment of a separator cell; malformed cells are `Undefined`
pub fn parse_alignment(cell: &str) -> Alignment {
    separator_cell_alignment(cell).unwrap_or_default()
}

/// Replace `<br>`, `<br/>` and `<br />` with a newline
pub fn decode_line_breaks(text: &str) -> String {
    LINE_BREAK_MARKERS
        .iter()
        .fold(text.to_string(), |acc, marker| acc.replace(marker, "\n"))
}
