//! Configuration
//!
//! Looked up in order, first hit wins:
//!
//! 1. `.tagcheck.toml` in the working directory
//! 2. `~/.tagcheck/config.toml`
//! 3. built-in defaults
//!
//! ```toml
//! [rule]
//! encoding_keys = ["json", "xml", "yaml"]
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths;
use crate::rule::EncodingKeys;

/// tagcheck configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Field tag rule settings
    #[serde(default)]
    pub rule: RuleConfig,
}

/// Field tag rule settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Keys that must not appear on unexported fields, in report order
    #[serde(default)]
    pub encoding_keys: EncodingKeys,
}

impl Config {
    /// Load config for the current directory, or defaults
    #[must_use]
    pub fn load() -> Self {
        std::env::current_dir().map_or_else(|_| Self::load_global(), |cwd| Self::discover(&cwd))
    }

    /// Load config for `dir`, falling back to the global config, then defaults
    ///
    /// A file that exists but cannot be parsed is skipped with a warning.
    #[must_use]
    pub fn discover(dir: &Path) -> Self {
        let project = paths::project_config(dir);
        if project.exists() {
            match Self::load_from(&project) {
                Ok(config) => return config,
                Err(err) => log::warn!("ignoring {}: {err:#}", project.display()),
            }
        }
        Self::load_global()
    }

    fn load_global() -> Self {
        let global = paths::global_config();
        if global.exists() {
            match Self::load_from(&global) {
                Ok(config) => return config,
                Err(err) => log::warn!("ignoring {}: {err:#}", global.display()),
            }
        }
        Self::default()
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Encoding keys the rule should check
    #[must_use]
    pub const fn encoding_keys(&self) -> &EncodingKeys {
        &self.rule.encoding_keys
    }
}
