//! Field manifests
//!
//! A manifest lists fields extracted by some other tool, one `[[field]]`
//! table each, so a whole record can be checked in one call:
//!
//! ```toml
//! encoding_keys = ["json", "xml"]   # optional, overrides config
//!
//! [[field]]
//! name = "id"
//! tag = '`json:"id"`'
//! exported = false
//!
//! [[field]]                         # embedded, no name
//! tag = '`json:",inline"`'
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::rule::{EncodingKeys, Field};

/// A field manifest file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Keys to check instead of the configured ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding_keys: Option<EncodingKeys>,

    /// Fields in declaration order
    #[serde(default, rename = "field")]
    pub fields: Vec<Field>,
}

impl Manifest {
    /// Parse a manifest from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Load a manifest file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> anyhow::Result<Manifest> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let manifest =
        Manifest::parse(&content).with_context(|| format!("parsing {}", path.display()))?;
    log::debug!("{}: {} field(s)", path.display(), manifest.fields.len());
    Ok(manifest)
}
