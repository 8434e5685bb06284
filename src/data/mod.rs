//! Data layer - static constants
//!
//! This module contains the static data used by both conversion directions:
//! - Host alignment codes
//! - Markdown marker characters
//! - Classifier thresholds

pub mod constants;

// Re-export commonly used items
pub use constants::{
    is_inline_marker, HOST_ALIGN_CENTER, HOST_ALIGN_GENERAL, HOST_ALIGN_LEFT, HOST_ALIGN_RIGHT,
    LINE_BREAK_MARKER, LINE_BREAK_MARKERS, TABLE_LINE,
};
