//! Markdown Table Generator
//!
//! Writes a typed [`Table`] as a GitHub-style pipe table. Alignment is a
//! column property, so only the header row's alignments reach the
//! separator row.
//!
//! # Architecture
//!
//! ```text
//! Table -> header line -> separator line (from header alignments) -> body lines
//! ```
//!
//! # Example
//!
//! ```ignore
//! use table::generate_markdown;
//!
//! let markdown = generate_markdown(&table, &MarkdownOptions::default());
//! // |A|B|
//! // |:---|---:|
//! // |1|2|
//! ```
//!
//! [`Table`]: crate::core::model::Table

mod generator;


// Re-export public API
pub use generator::{escape_cell_text, generate_markdown};
