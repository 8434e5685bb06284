//! Core conversion modules
//!
//! This module contains the block model and both conversion directions:
//! - `md2grid`: Markdown to sheet (document, table and inline parsers)
//! - `grid2md`: sheet to Markdown (grid classifier, table generator)

pub mod grid;
pub mod grid2md;
pub mod md2grid;
pub mod model;
pub mod options;

pub use grid::{CellGrid, SheetCell};
pub use model::{
    blocks_to_markdown, Alignment, Block, StyledSegment, Table, TableCell, TableRow, TextBlock,
    TextStyle,
};
pub use options::{ClassifyOptions, ConvertOptions, MarkdownOptions};

pub use grid2md::{classify_grid, generate_markdown, grid_to_blocks, grid_to_markdown};
pub use md2grid::{
    parse_document, parse_grid, parse_inline, parse_table, parse_table_text, plain_text,
    write_blocks, DocumentParser,
};
