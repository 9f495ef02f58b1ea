//! Field tag rule
//!
//! Checks one field's tag literal in two steps:
//!
//! 1. the literal must unquote, and the tag inside must be in canonical form
//! 2. encoding keys (`json`, `xml` by default) must not be set on a named
//!    field that is not exported, since encoders skip such fields and the tag
//!    would do nothing
//!
//! This is pure logic with no I/O.

mod diagnostic;
mod field;

use serde::{Deserialize, Serialize};

use crate::tag::{unquote, validate, StructTag};

pub use diagnostic::{Diagnostic, MalformedReason};
pub use field::Field;

/// Keys checked on unexported fields when nothing else is configured
pub const DEFAULT_ENCODING_KEYS: [&str; 2] = ["json", "xml"];

/// Ordered set of encoding keys the rule recognizes
///
/// Order matters: when several keys are present only the first one listed
/// here is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodingKeys(Vec<String>);

impl Default for EncodingKeys {
    fn default() -> Self {
        Self(DEFAULT_ENCODING_KEYS.iter().map(ToString::to_string).collect())
    }
}

impl EncodingKeys {
    /// Build from a list, dropping empty and repeated keys
    #[must_use]
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into();
            if !key.is_empty() && !out.contains(&key) {
                out.push(key);
            }
        }
        Self(out)
    }

    /// Keys in check order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no keys are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A diagnostic together with the field it was raised on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Position of the field in the checked sequence
    pub index: usize,
    /// Field name, `None` for embedded fields
    pub field: Option<String>,
    /// The diagnostic
    pub diagnostic: Diagnostic,
}

/// Check a single field's tag
///
/// At most one diagnostic is produced: a malformed tag stops the check, and
/// only the first offending encoding key is reported.
///
/// # Examples
///
/// ```
/// use tagcheck::rule::{check, Diagnostic, EncodingKeys, Field};
///
/// let field = Field::named("id", false).with_tag(r#"`json:"id" xml:"id"`"#);
/// let diags = check(&field, &EncodingKeys::default());
/// assert_eq!(diags, vec![Diagnostic::key_but_unexported("id", "json")]);
/// ```
#[must_use]
pub fn check(field: &Field, keys: &EncodingKeys) -> Vec<Diagnostic> {
    let Some(literal) = field.tag.as_deref() else {
        return Vec::new();
    };

    let tag = match unquote(literal) {
        Ok(tag) => tag,
        Err(err) => {
            log::debug!("field {}: cannot unquote {literal}: {err}", field.display_name());
            return vec![Diagnostic::unreadable(literal)];
        },
    };

    if let Err(err) = validate(&tag) {
        return vec![Diagnostic::syntax(literal, err)];
    }

    let Some(name) = field.name.as_deref() else {
        log::trace!("embedded field, skipping encoding keys");
        return Vec::new();
    };
    if field.exported {
        return Vec::new();
    }

    let tag = StructTag::new(&tag);
    keys.iter()
        .find(|key| !tag.get(key).is_empty())
        .map(|key| Diagnostic::key_but_unexported(name, key))
        .into_iter()
        .collect()
}

/// Check a sequence of fields, keeping input order
#[must_use]
pub fn check_all<'a, I>(fields: I, keys: &EncodingKeys) -> Vec<Finding>
where
    I: IntoIterator<Item = &'a Field>,
{
    fields
        .into_iter()
        .enumerate()
        .flat_map(|(index, field)| {
            check(field, keys).into_iter().map(move |diagnostic| Finding {
                index,
                field: field.name.clone(),
                diagnostic,
            })
        })
        .collect()
}
