//! # gridmark
//!
//! Bidirectional converter between spreadsheet cell ranges and Markdown.
//!
//! ## Features
//!
//! - **Grid → Markdown**: headings from font size and bold, list items from
//!   indentation and bullets, pipe tables with column alignment
//! - **Markdown → Grid**: pipe tables become cell blocks, inline `**bold**`,
//!   `*italic*` and `~~strike~~` become character formatting
//! - **Never fails on text**: malformed tables fall back to plain lines
//! - **Host-agnostic**: the spreadsheet and clipboard sit behind small traits
//! - **Diagnostics**: reports tables that will not convert as expected
//!
//! ## Usage Examples
//!
//! ### Markdown → Blocks
//!
//! ```rust
//! use gridmark::{markdown_to_blocks, Alignment, Block};
//!
//! let blocks = markdown_to_blocks("# Title\n\n| A | B |\n|:--|--:|\n| 1 | 2 |\n");
//! assert_eq!(blocks.len(), 3);
//! assert_eq!(blocks[0], Block::text("# Title"));
//!
//! let table = blocks[2].as_table().unwrap();
//! assert_eq!(table.column_alignments(), vec![Alignment::Left, Alignment::Right]);
//! ```
//!
//! ### Grid → Markdown
//!
//! ```rust
//! use gridmark::{grid_to_markdown, CellGrid};
//!
//! let grid = CellGrid::from_text_rows(vec![vec!["Name", "Qty"], vec!["apple", "3"]]);
//! assert_eq!(grid_to_markdown(&grid), "|Name|Qty|\n|---|---|\n|apple|3|\n");
//! ```
//!
//! ### Paste into a sheet
//!
//! ```rust
//! use gridmark::{paste_from_markdown, MemoryClipboard, MemorySheet};
//!
//! let clipboard = MemoryClipboard::with_text("**Total**: 42");
//! let mut sheet = MemorySheet::new();
//! let rows = paste_from_markdown(&clipboard, &mut sheet, 0, 0).unwrap();
//! assert_eq!(rows, 1);
//! assert_eq!(sheet.value(0, 0), "Total: 42");
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - constants
pub mod data;

/// Feature modules - end-user commands
pub mod features;

/// Utility modules
pub mod utils;

// Re-export the block model and options
pub use core::grid::{CellGrid, SheetCell};
pub use core::model::{
    blocks_to_markdown, Alignment, Block, StyledSegment, Table, TableCell, TableRow, TextBlock,
    TextStyle,
};
pub use core::options::{ClassifyOptions, ConvertOptions, MarkdownOptions};

// Re-export conversion engines
pub use core::grid2md::{classify_grid, generate_markdown};
pub use core::md2grid::{
    parse_document, parse_grid, parse_inline, parse_table, parse_table_text, write_blocks,
    DocumentParser,
};

// Re-export data modules
pub use data::constants;

// Re-export feature modules
pub use features::commands;
pub use features::{copy_to_markdown, paste_from_markdown};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{ConversionError, ConversionResult};
pub use utils::host::{
    ClipboardProvider, MemoryCell, MemoryClipboard, MemorySheet, SelectionReader, SheetWriter,
};

/// Parse a Markdown document into blocks
///
/// Never fails: table regions that do not parse are kept as text lines.
pub fn markdown_to_blocks(input: &str) -> Vec<Block> {
    parse_document(input)
}

/// Convert a styled grid to Markdown with default options
pub fn grid_to_markdown(grid: &CellGrid) -> String {
    core::grid2md::grid_to_markdown(grid, &ConvertOptions::default())
}

/// Convert a styled grid to Markdown with custom options
pub fn grid_to_markdown_with_options(grid: &CellGrid, options: &ConvertOptions) -> String {
    core::grid2md::grid_to_markdown(grid, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_blocks_basic() {
        let blocks = markdown_to_blocks("Hello\n| A |\n|---|\n| 1 |");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], Block::text("Hello"));
        assert_eq!(blocks[1].as_table().unwrap().rows.len(), 2);
    }

    #[test]
    fn test_markdown_to_blocks_fallback() {
        let blocks = markdown_to_blocks("| A |\n| B |");
        assert_eq!(blocks, vec![Block::text("| A |"), Block::text("| B |")]);
    }

    #[test]
    fn test_grid_to_markdown_headings() {
        let grid = CellGrid::from_rows(vec![
            vec![SheetCell::new("Big").with_font_size(18.0)],
            vec![SheetCell::new("Medium").with_font_size(14.0)],
            vec![SheetCell::new("Small").with_bold(true)],
            vec![SheetCell::new("plain")],
        ]);
        assert_eq!(
            grid_to_markdown(&grid),
            "# Big\n\n## Medium\n\n### Small\n\nplain\n"
        );
    }

    #[test]
    fn test_grid_to_markdown_readable() {
        let grid = CellGrid::from_text_rows(vec![vec!["A", "B"], vec!["1", "2"]]);
        let markdown = grid_to_markdown_with_options(&grid, &ConvertOptions::readable());
        assert_eq!(markdown, "| A | B |\n| --- | --- |\n| 1 | 2 |\n");
    }

    #[test]
    fn test_options_presets() {
        assert!(!ConvertOptions::compact().markdown.pad_cells);
        assert!(ConvertOptions::readable().markdown.pad_cells);
        assert_eq!(ConvertOptions::new().classify.heading1_min_size, 18.0);
    }
}
