//! Command implementations
//!
//! Each command returns `Ok(true)` when everything it checked is clean.

mod field;
mod fields;
mod get;
mod validate;

pub use field::field;
pub use fields::fields;
pub use get::get;
pub use validate::validate;

use tagcheck::config::Config;
use tagcheck::rule::EncodingKeys;

/// Pick encoding keys: command-line flags, then the manifest, then config
fn encoding_keys(flags: &[String], manifest: Option<EncodingKeys>) -> EncodingKeys {
    if !flags.is_empty() {
        return EncodingKeys::new(flags.iter().map(String::as_str));
    }
    manifest.unwrap_or_else(|| Config::load().rule.encoding_keys)
}
