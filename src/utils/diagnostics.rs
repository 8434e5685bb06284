//! Markdown table diagnostics
//!
//! This module reports the places where a Markdown document will not convert
//! the way its author probably expects. It scans table regions exactly like
//! the document parser does and can identify:
//!
//! - Table regions that degrade to plain text
//! - Separator cells that are not valid alignment markers
//! - Body rows whose cell count differs from the header
//!
//! ## Example
//!
//! ```rust
//! use gridmark::diagnostics::{check_markdown, DiagnosticLevel};
//!
//! let result = check_markdown("| A | B |\n| 1 | 2 |");
//! assert_eq!(result.warnings, 1);
//! assert_eq!(result.diagnostics[0].level, DiagnosticLevel::Warning);
//! ```

use std::fmt;

use crate::core::md2grid::is_table_line;
use crate::core::md2grid::table::{parse_table_text, separator_cell_alignment, split_row};
use crate::utils::error::ConversionError;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - conversion will work but lose structure
    Warning,
    /// Error - reserved for failures of the check itself
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Column number (1-indexed, in characters)
    pub column: Option<usize>,
    /// Relevant source text
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
            column: None,
            source_text: None,
            suggestion: None,
        }
    }

    /// Add a line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add location information
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Add source text
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: level: message
        //         --> line:column
        //         |
        //         | source text
        //         = help: suggestion

        write!(f, "{}: {}", self.level, self.message)?;

        match (self.line, self.column) {
            (Some(line), Some(col)) => write!(f, "\n  --> line {}:{}", line, col)?,
            (Some(line), None) => write!(f, "\n  --> line {}", line)?,
            _ => {}
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(plural(self.errors, "error"));
        }
        if self.warnings > 0 {
            parts.push(plural(self.warnings, "warning"));
        }
        if self.infos > 0 {
            parts.push(plural(self.infos, "note"));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

/// Check a Markdown document for table problems
pub fn check_markdown(input: &str) -> CheckResult {
    let mut result = CheckResult::new();
    let mut region: Vec<(usize, &str)> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        if is_table_line(line) {
            region.push((idx + 1, line));
            continue;
        }
        check_table_region(&region, &mut result);
        region.clear();
    }
    check_table_region(&region, &mut result);

    result
}

/// Check one run of consecutive table lines
fn check_table_region(region: &[(usize, &str)], result: &mut CheckResult) {
    let (start, header_line) = match region.first() {
        Some(&first) => first,
        None => return,
    };

    let text = region
        .iter()
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n");

    if let Err(err) = parse_table_text(&text) {
        let (message, line) = match err {
            ConversionError::FormatError { message, line } => {
                (message, line.map_or(start, |l| start + l - 1))
            }
            other => (other.to_string(), start),
        };
        let source = region
            .iter()
            .find(|(no, _)| *no == line)
            .map_or(header_line, |(_, l)| *l);

        result.add(
            Diagnostic::new(
                DiagnosticLevel::Error,
                format!("table kept as plain text: {}", message),
            )
            .with_line(line)
            .with_source(source.trim())
            .with_suggestion("A table needs a header row followed by a separator row like |---|---|"),
        );
        return;
    }

    // Parsing succeeded, so a separator row exists
    let header_len = split_row(header_line.trim()).len();
    let (sep_no, sep_line) = region[1];
    let columns = cell_columns(sep_line);

    for (idx, cell) in split_row(sep_line.trim()).iter().enumerate() {
        if separator_cell_alignment(cell).is_some() {
            continue;
        }
        let diag = Diagnostic::new(
            DiagnosticLevel::Warning,
            format!(
                "separator cell {} ('{}') is not an alignment marker; the column alignment is left undefined",
                idx + 1,
                cell
            ),
        )
        .with_source(sep_line.trim())
        .with_suggestion("Use ---, :---, :-: or ---:");

        result.add(match columns.get(idx) {
            Some(&col) => diag.with_location(sep_no, col),
            None => diag.with_line(sep_no),
        });
    }

    for &(line_no, line) in &region[2..] {
        let count = split_row(line.trim()).len();
        if count != header_len {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Info,
                    format!(
                        "row has {} cell(s) but the header has {}",
                        count, header_len
                    ),
                )
                .with_line(line_no)
                .with_source(line.trim()),
            );
        }
    }
}

/// 1-based character column where each cell of a `|...|` line starts
fn cell_columns(line: &str) -> Vec<usize> {
    let chars: Vec<char> = line.chars().collect();
    let mut columns = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\\' && matches!(chars.get(i + 1), Some('|') | Some('\\')) {
            i += 2;
            continue;
        }
        if chars[i] == '|' {
            columns.push(i + 2);
        }
        i += 1;
    }

    // The closing pipe starts no cell
    columns.pop();
    columns
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    // Summary
    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}
