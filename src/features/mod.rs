//! Feature modules - the commands a host integration exposes
//!
//! - Copy the selection to the clipboard as Markdown
//! - Paste Markdown from the clipboard into the sheet

pub mod commands;

pub use commands::{copy_to_markdown, paste_from_markdown};
