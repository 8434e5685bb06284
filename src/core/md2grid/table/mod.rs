//! Markdown Pipe-Table Parser
//!
//! Turns the lines of a GitHub-style pipe table into a typed [`Table`].
//!
//! # Architecture
//!
//! ```text
//! Table lines -> Grid Parser (rows of cell strings) -> Table Parser (alignment, line breaks) -> Table
//! ```
//!
//! Both stages fail with `ConversionError::FormatError` on malformed
//! structure; the document parser recovers from that by keeping the lines as
//! plain text.
//!
//! # Example
//!
//! ```ignore
//! use table::{parse_grid, parse_table};
//!
//! let grid = parse_grid("| A | B |\n|:--|--:|\n| 1 | 2 |")?;
//! let table = parse_table(&grid)?;
//! ```
//!
//! [`Table`]: crate::core::model::Table

mod grid;
mod parser;


// Re-export public API
pub use grid::{parse_grid, split_row, RawGrid};
pub use parser::{
    decode_line_breaks, is_separator_row, parse_alignment, parse_table, separator_cell_alignment,
};

use crate::core::model::Table;
use crate::utils::error::ConversionResult;

/// Run both stages over the buffered lines of one table region
pub fn parse_table_text(table_text: &str) -> ConversionResult<Table> {
    let grid = parse_grid(table_text)?;
    parse_table(&grid)
}
