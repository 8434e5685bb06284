//! Markdown to grid converter
//!
//! This module turns a Markdown document into the block sequence and writes
//! it into a sheet:
//!
//! ```text
//! Markdown -> Document Parser -> [TextBlock | TableBlock] -> Sheet Writer
//!                  |                                             |
//!          Grid Parser + Table Parser                     Inline Parser
//! ```

pub mod inline;
pub mod table;
mod writer;

use log::debug;

use crate::core::model::Block;
use crate::data::constants::TABLE_LINE;

pub use inline::{has_inline_markers, parse_inline, plain_text};
pub use table::{parse_grid, parse_table, parse_table_text};
pub use writer::write_blocks;

/// Whether a line can belong to a pipe table: non-blank and `|...|` once trimmed
pub fn is_table_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && TABLE_LINE.is_match(trimmed)
}

/// Single-pass line parser that groups consecutive table lines
///
/// Table regions that fail to parse are kept as one text block per
/// non-blank line, so parsing a document never fails.
#[derive(Debug, Default)]
pub struct DocumentParser<'a> {
    blocks: Vec<Block>,
    table_buffer: Vec<&'a str>,
    in_table: bool,
}

impl<'a> DocumentParser<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole document
    pub fn parse(mut self, text: &'a str) -> Vec<Block> {
        for line in text.lines() {
            self.feed_line(line);
        }

        if self.in_table {
            self.flush_table();
            self.in_table = false;
        }

        self.blocks
    }

    fn feed_line(&mut self, line: &'a str) {
        if is_table_line(line) {
            self.in_table = true;
            self.table_buffer.push(line);
            return;
        }

        if self.in_table {
            self.flush_table();
            self.in_table = false;
        }

        // A blank line right after a table is dropped: the table already ends its paragraph
        let is_blank = line.trim().is_empty();
        if !is_blank || !matches!(self.blocks.last(), Some(Block::Table(_))) {
            self.blocks.push(Block::text(line));
        }
    }

    fn flush_table(&mut self) {
        let lines = std::mem::take(&mut self.table_buffer);
        if lines.is_empty() {
            return;
        }

        match table::parse_table_text(&lines.join("\n")) {
            Ok(parsed) => {
                debug!(
                    "parsed table with {} row(s) from {} line(s)",
                    parsed.rows.len(),
                    lines.len()
                );
                self.blocks.push(Block::table(parsed));
            }
            Err(err) => {
                debug!(
                    "table region of {} line(s) kept as text: {}",
                    lines.len(),
                    err
                );
                self.blocks.extend(
                    lines
                        .into_iter()
                        .filter(|l| !l.trim().is_empty())
                        .map(Block::text),
                );
            }
        }
    }
}

/// Parse a Markdown document into blocks
pub fn parse_document(text: &str) -> Vec<Block> {
    DocumentParser::new().parse(text)
}
