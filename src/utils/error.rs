//! Error handling for gridmark conversions
//!
//! This module provides a unified error type and result type for all
//! fallible conversion operations. Only the table sub-parsers, the sheet
//! writer and the host collaborators can fail; the document parser, the
//! inline parser and the grid classifier are total.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Malformed table structure (missing separator row, empty split result)
    FormatError {
        message: String,
        line: Option<usize>,
    },
    /// Invalid input (unreadable grid file, bad option file)
    InvalidInput { message: String },
    /// Failure reported by the host spreadsheet or clipboard
    Host { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::FormatError { message, line } => {
                if let Some(l) = line {
                    write!(f, "Format error at line {}: {}", l, message)
                } else {
                    write!(f, "Format error: {}", message)
                }
            }
            ConversionError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ConversionError::Host { message } => {
                write!(f, "Host error: {}", message)
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn format(message: impl Into<String>) -> Self {
        ConversionError::FormatError {
            message: message.into(),
            line: None,
        }
    }

    pub fn format_at(message: impl Into<String>, line: usize) -> Self {
        ConversionError::FormatError {
            message: message.into(),
            line: Some(line),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn host(message: impl Into<String>) -> Self {
        ConversionError::Host {
            message: message.into(),
        }
    }

    /// Whether this is a table-structure error (the kind the document parser recovers from)
    pub fn is_format_error(&self) -> bool {
        matches!(self, ConversionError::FormatError { .. })
    }
}
