//! Centralized path definitions for tagcheck
//!
//! ```text
//! project/
//! └── .tagcheck.toml            # Project config (committed)
//!
//! ~/.tagcheck/
//! └── config.toml               # User-level defaults
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".tagcheck.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".tagcheck";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project config file inside `dir`.
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG)
}

/// Get the global tagcheck directory.
///
/// Returns `~/.tagcheck/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.tagcheck/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
