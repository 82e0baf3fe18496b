//! Error types for JSON parsing.

use thiserror::Error;

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// A 1-based line and column derived from an error offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// Error type for JSON parsing.
///
/// Every variant carries the byte offset of the cursor at the time of the
/// failure, measured from the start of the text handed to the parser.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input ended where a value or delimiter was required.
    #[error("Unexpected end of input at {offset}")]
    UnexpectedEof { offset: usize },

    /// A character that cannot start a value.
    #[error("Unexpected token at {offset} ('{found}')")]
    UnexpectedToken { found: char, offset: usize },

    /// A specific delimiter was required.
    #[error("Expected '{expected}' at {offset}")]
    Expected { expected: char, offset: usize },

    /// Neither a comma nor the closing delimiter followed a member.
    #[error("Expected ',' or '{close}' at {offset}")]
    ExpectedSeparator { close: char, offset: usize },

    /// Input ended before the closing quote.
    #[error("Unterminated string at {offset}")]
    UnterminatedString { offset: usize },

    /// `\u` not followed by four hex digits.
    #[error("Bad Unicode escape at {offset}")]
    BadUnicodeEscape { offset: usize },

    /// Unknown escape, only raised in strict escape mode.
    #[error("Bad escaped character '{escape}' at {offset}")]
    BadEscapedChar { escape: char, offset: usize },

    /// Numeric literal that is neither a float nor a 64-bit integer.
    #[error("Invalid number at {offset}")]
    InvalidNumber { offset: usize },

    /// Containers nested deeper than the configured limit.
    #[error("Nesting deeper than {limit} at {offset}")]
    TooDeep { limit: usize, offset: usize },
}

impl ParseError {
    /// Byte offset of the failure.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedEof { offset }
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::Expected { offset, .. }
            | ParseError::ExpectedSeparator { offset, .. }
            | ParseError::UnterminatedString { offset }
            | ParseError::BadUnicodeEscape { offset }
            | ParseError::BadEscapedChar { offset, .. }
            | ParseError::InvalidNumber { offset }
            | ParseError::TooDeep { offset, .. } => *offset,
        }
    }

    /// Human-readable message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Shift the offset by `delta` bytes.
    pub(crate) fn shifted(self, delta: usize) -> Self {
        match self {
            ParseError::UnexpectedEof { offset } => ParseError::UnexpectedEof {
                offset: offset + delta,
            },
            ParseError::UnexpectedToken { found, offset } => ParseError::UnexpectedToken {
                found,
                offset: offset + delta,
            },
            ParseError::Expected { expected, offset } => ParseError::Expected {
                expected,
                offset: offset + delta,
            },
            ParseError::ExpectedSeparator { close, offset } => ParseError::ExpectedSeparator {
                close,
                offset: offset + delta,
            },
            ParseError::UnterminatedString { offset } => ParseError::UnterminatedString {
                offset: offset + delta,
            },
            ParseError::BadUnicodeEscape { offset } => ParseError::BadUnicodeEscape {
                offset: offset + delta,
            },
            ParseError::BadEscapedChar { escape, offset } => ParseError::BadEscapedChar {
                escape,
                offset: offset + delta,
            },
            ParseError::InvalidNumber { offset } => ParseError::InvalidNumber {
                offset: offset + delta,
            },
            ParseError::TooDeep { limit, offset } => ParseError::TooDeep {
                limit,
                offset: offset + delta,
            },
        }
    }

    /// Convert the offset into a line and column within `input`.
    ///
    /// `input` must be the same text that produced the error. Columns count
    /// characters, not bytes. Offsets past the end clamp to the end of input.
    pub fn locate(&self, input: &str) -> Location {
        let mut end = self.offset().min(input.len());
        while !input.is_char_boundary(end) {
            end -= 1;
        }
        let before = &input[..end];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        Location { line, column }
    }
}
