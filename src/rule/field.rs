//! Field facts supplied by the caller

use serde::{Deserialize, Serialize};

/// A record field as seen by the tag rule
///
/// The rule never looks at declaration syntax; whoever walks the source
/// fills this in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, `None` for an embedded (anonymous) field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tag literal exactly as written, outer quotes included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Whether the field is visible outside its defining module
    #[serde(default)]
    pub exported: bool,
}

impl Field {
    /// A named field
    #[must_use]
    pub fn named(name: impl Into<String>, exported: bool) -> Self {
        Self {
            name: Some(name.into()),
            tag: None,
            exported,
        }
    }

    /// An embedded field
    #[must_use]
    pub fn embedded(exported: bool) -> Self {
        Self {
            name: None,
            tag: None,
            exported,
        }
    }

    /// Attach a tag literal
    #[must_use]
    pub fn with_tag(mut self, literal: impl Into<String>) -> Self {
        self.tag = Some(literal.into());
        self
    }

    /// Whether this is an embedded field
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.name.is_none()
    }

    /// Name for display, `(embedded)` when there is none
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(embedded)")
    }
}
