//! Inline emphasis parser
//!
//! Splits a line of Markdown into styled runs. Recognised markers, in order of
//! precedence at each position:
//!
//! 1. bold: `**text**`, `__text__`
//! 2. strikethrough: `~~text~~`
//! 3. italic: `*text*`, `_text_`
//! 4. inline code: `` `text` `` (emitted as plain text, a cell has no code style)
//!
//! Every match is non-greedy. A marker without a closing partner is emitted
//! literally as plain text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::model::{StyledSegment, TextStyle};
use crate::data::constants::is_inline_marker;

const BOLD: TextStyle = TextStyle {
    bold: true,
    italic: false,
    strikethrough: false,
};

const STRIKE: TextStyle = TextStyle {
    bold: false,
    italic: false,
    strikethrough: true,
};

const ITALIC: TextStyle = TextStyle {
    bold: false,
    italic: true,
    strikethrough: false,
};

lazy_static! {
    /// Inline patterns in precedence order, each anchored at the cursor
    static ref INLINE_PATTERNS: Vec<(Regex, TextStyle)> = vec![
        (Regex::new(r"^\*\*(.+?)\*\*").unwrap(), BOLD),
        (Regex::new(r"^__(.+?)__").unwrap(), BOLD),
        (Regex::new(r"^~~(.+?)~~").unwrap(), STRIKE),
        (Regex::new(r"^\*(.+?)\*").unwrap(), ITALIC),
        (Regex::new(r"^_(.+?)_").unwrap(), ITALIC),
        (Regex::new(r"^`(.+?)`").unwrap(), TextStyle::PLAIN),
    ];
}

/// Parse inline Markdown into styled segments
///
/// Never fails. Adjacent plain segments in the result are always merged, so
/// text without markers comes back as a single plain segment. Empty input
/// yields no segments.
pub fn parse_inline(markdown: &str) -> Vec<StyledSegment> {
    let mut segments = Vec::new();
    let mut pos = 0;

    while pos < markdown.len() {
        let rest = &markdown[pos..];

        if let Some((segment, consumed)) = match_marker(rest) {
            segments.push(segment);
            pos += consumed;
            continue;
        }

        let end = plain_run_end(rest);
        segments.push(StyledSegment::plain(&rest[..end]));
        pos += end;
    }

    merge_plain_segments(segments)
}

/// Concatenated text of a segment sequence (the cell value without markers)
pub fn plain_text(segments: &[StyledSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// Whether the text contains any character that could start a marker
pub fn has_inline_markers(text: &str) -> bool {
    text.chars().any(is_inline_marker)
}

/// Try each pattern at the start of `rest`; returns the segment and bytes consumed
fn match_marker(rest: &str) -> Option<(StyledSegment, usize)> {
    INLINE_PATTERNS.iter().find_map(|(regex, style)| {
        let caps = regex.captures(rest)?;
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        Some((
            StyledSegment::with_style(inner.as_str(), *style),
            whole.end(),
        ))
    })
}

/// Length of the plain run at the start of `rest`: at least one character,
/// then everything up to the next possible marker
fn plain_run_end(rest: &str) -> usize {
    rest.char_indices()
        .skip(1)
        .find(|&(_, c)| is_inline_marker(c))
        .map(|(i, _)| i)
        .unwrap_or(rest.len())
}

fn merge_plain_segments(segments: Vec<StyledSegment>) -> Vec<StyledSegment> {
    let mut merged: Vec<StyledSegment> = Vec::with_capacity(segments.len());

    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.is_plain() && segment.is_plain() => {
                last.text.push_str(&segment.text);
            }
            _ => merged.push(segment),
        }
    }

    merged
}
