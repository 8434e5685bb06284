//! Constants shared by both conversion directions
//!
//! - Host (Excel-compatible) horizontal alignment codes
//! - Markdown marker characters and table line-break markers
//! - Default heading thresholds for the grid classifier

use lazy_static::lazy_static;
use regex::Regex;

// ============================================================================
// Host alignment codes
// ============================================================================

/// General alignment, written for `Alignment::Undefined`
pub const HOST_ALIGN_GENERAL: i32 = 1;
/// Left alignment
pub const HOST_ALIGN_LEFT: i32 = -4131;
/// Center alignment
pub const HOST_ALIGN_CENTER: i32 = -4108;
/// Right alignment
pub const HOST_ALIGN_RIGHT: i32 = -4152;

// ============================================================================
// Markdown syntax
// ============================================================================

/// Characters that may open an inline emphasis or code span
pub const INLINE_MARKERS: [char; 4] = ['*', '_', '~', '`'];

/// Line-break marker emitted for embedded newlines in table cells
pub const LINE_BREAK_MARKER: &str = "<br>";

/// Line-break markers accepted when reading table cells
pub const LINE_BREAK_MARKERS: [&str; 3] = ["<br>", "<br/>", "<br />"];

/// Bullet characters stripped from the start of a list item
pub const BULLET_CHARS: [char; 3] = ['•', '-', '*'];

/// Text prefixes that mark a cell as a list item
pub const LIST_PREFIXES: [&str; 3] = ["•", "- ", "* "];

// ============================================================================
// Classifier thresholds
// ============================================================================

/// Smallest font size classified as a level-1 heading
pub const HEADING1_MIN_SIZE: f64 = 18.0;
/// Smallest font size classified as a level-2 heading
pub const HEADING2_MIN_SIZE: f64 = 14.0;
/// Spaces emitted per indent level of a list item
pub const LIST_INDENT_WIDTH: usize = 2;
/// Deepest indent level a host cell can carry; larger levels are clamped
pub const MAX_INDENT_LEVEL: u32 = 250;

lazy_static! {
    /// A Markdown table line (after trimming)
    pub static ref TABLE_LINE: Regex = Regex::new(r"^\|.*\|$").unwrap();
}

/// Check whether a character can start an inline marker
pub fn is_inline_marker(c: char) -> bool {
    INLINE_MARKERS.contains(&c)
}
