//! Conversion options

use crate::data::constants::{HEADING1_MIN_SIZE, HEADING2_MIN_SIZE, LIST_INDENT_WIDTH};

#[cfg(feature = "data-loading")]
use serde::{Deserialize, Serialize};

/// Options for classifying a styled grid into blocks
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "data-loading", serde(default))]
pub struct ClassifyOptions {
    /// Font size at or above which a cell is a level-1 heading
    pub heading1_min_size: f64,
    /// Font size at or above which (and below level 1) a cell is a level-2 heading
    pub heading2_min_size: f64,
    /// Spaces emitted per indent level of a list item
    pub list_indent_width: usize,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            heading1_min_size: HEADING1_MIN_SIZE,
            heading2_min_size: HEADING2_MIN_SIZE,
            list_indent_width: LIST_INDENT_WIDTH,
        }
    }
}

/// Options for writing Markdown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "data-loading", serde(default))]
pub struct MarkdownOptions {
    /// Write table cells as `| A | B |` instead of `|A|B|`
    pub pad_cells: bool,
}

/// Options for both conversion directions
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "data-loading", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "data-loading", serde(default))]
pub struct ConvertOptions {
    pub classify: ClassifyOptions,
    pub markdown: MarkdownOptions,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compact tables (`|A|B|`), the default
    pub fn compact() -> Self {
        Self::default()
    }

    /// Padded tables (`| A | B |`)
    pub fn readable() -> Self {
        Self {
            markdown: MarkdownOptions { pad_cells: true },
            ..Default::default()
        }
    }
}
