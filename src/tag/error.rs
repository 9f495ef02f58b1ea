//! Tag error types

use serde::Serialize;
use thiserror::Error;

/// Syntax errors reported by the tag validator
///
/// At most one is ever reported for a tag: the first one met while scanning
/// left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxError {
    /// Malformed pair structure: empty key, no room for a value, or two pairs
    /// with no space between them
    #[error("bad syntax for struct tag pair")]
    TagSyntax,

    /// Key contains a double quote or a control character
    #[error("bad syntax for struct tag key")]
    TagKeySyntax,

    /// Value is not a well-formed double-quoted string
    #[error("bad syntax for struct tag value")]
    TagValueSyntax,
}

/// Errors produced when unquoting a string literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnquoteError {
    /// Literal is shorter than its two delimiters
    #[error("literal too short")]
    TooShort,

    /// Literal does not start with a supported quote character
    #[error("unsupported quote character {0:?}")]
    UnsupportedQuote(char),

    /// Opening and closing delimiters differ
    #[error("unterminated literal")]
    Unterminated,

    /// A delimiter appears unescaped inside the literal
    #[error("unescaped quote at byte {0}")]
    StrayQuote(usize),

    /// A raw newline appears inside a double-quoted literal
    #[error("newline in string at byte {0}")]
    Newline(usize),

    /// Unknown or truncated escape sequence
    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),

    /// Escape names a value outside the valid range
    #[error("escape value out of range at byte {0}")]
    OutOfRange(usize),
}
