//! Diagnostics produced by the field tag rule
//!
//! Diagnostics carry no source position. Callers that know where the field
//! lives attach that themselves.

use std::fmt;

use serde::Serialize;

use crate::tag::SyntaxError;

/// Why a tag literal was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedReason {
    /// The literal itself is not a valid quoted string
    Unreadable,
    /// The unquoted tag breaks the canonical grammar
    Syntax(SyntaxError),
}

/// A finding about one field's tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Tag literal could not be read or is not in canonical form
    MalformedTag {
        /// Tag literal as written, outer quotes included
        literal: String,
        /// What went wrong
        reason: MalformedReason,
    },
    /// An encoding key is set on a field encoders cannot see
    KeyButUnexported {
        /// Field name
        field: String,
        /// The encoding key that was found
        key: String,
    },
}

impl Diagnostic {
    /// Diagnostic for a literal that failed to unquote
    #[must_use]
    pub fn unreadable(literal: impl Into<String>) -> Self {
        Self::MalformedTag {
            literal: literal.into(),
            reason: MalformedReason::Unreadable,
        }
    }

    /// Diagnostic for a tag that failed validation
    #[must_use]
    pub fn syntax(literal: impl Into<String>, err: SyntaxError) -> Self {
        Self::MalformedTag {
            literal: literal.into(),
            reason: MalformedReason::Syntax(err),
        }
    }

    /// Diagnostic for an encoding key on an unexported field
    #[must_use]
    pub fn key_but_unexported(field: impl Into<String>, key: impl Into<String>) -> Self {
        Self::KeyButUnexported {
            field: field.into(),
            key: key.into(),
        }
    }

    /// Short stable code, e.g. for filtering
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedTag { .. } => "malformed-tag",
            Self::KeyButUnexported { .. } => "key-but-unexported",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTag {
                literal,
                reason: MalformedReason::Unreadable,
            } => write!(f, "unable to read struct tag {literal}"),
            Self::MalformedTag {
                literal,
                reason: MalformedReason::Syntax(err),
            } => write!(f, "struct field tag {literal} not compatible with reflect.StructTag.Get: {err}"),
            Self::KeyButUnexported { field, key } => {
                write!(f, "struct field {field} has {key} tag but is not exported")
            },
        }
    }
}
