//! Grid to Markdown converter
//!
//! ```text
//! CellGrid -> Classifier -> [TextBlock | TableBlock] -> Markdown
//!                                          |
//!                                   Table Generator
//! ```

mod classifier;
pub mod table;

use log::debug;

use crate::core::grid::CellGrid;
use crate::core::model::{blocks_to_markdown, Block};
use crate::core::options::{ClassifyOptions, ConvertOptions};

pub use classifier::{classify_grid, classify_text_cell, heading_level, is_list_item};
pub use table::{escape_cell_text, generate_markdown};

/// Classify a grid into blocks with default thresholds
pub fn grid_to_blocks(grid: &CellGrid) -> Vec<Block> {
    classify_grid(grid, &ClassifyOptions::default())
}

/// Convert a grid straight to a Markdown document
pub fn grid_to_markdown(grid: &CellGrid, options: &ConvertOptions) -> String {
    let blocks = classify_grid(grid, &options.classify);
    debug!(
        "classified {}x{} grid into {} block(s)",
        grid.row_count(),
        grid.column_count(),
        blocks.len()
    );
    blocks_to_markdown(&blocks, &options.markdown)
}
