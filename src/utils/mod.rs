//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics for Markdown tables
//! - Host spreadsheet and clipboard abstractions
//! - Error types and result types
//! - Grid and options loading (feature `data-loading`)

pub mod diagnostics;
pub mod error;
pub mod host;

#[cfg(feature = "data-loading")]
pub mod loading;

// Re-export commonly used items
pub use diagnostics::{check_markdown, format_diagnostics, CheckResult, Diagnostic, DiagnosticLevel};
pub use error::{ConversionError, ConversionResult};
pub use host::{
    ClipboardProvider, MemoryCell, MemoryClipboard, MemorySheet, SelectionReader, SheetWriter,
    StyleRun,
};
