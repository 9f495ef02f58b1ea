//! tagcheck - struct field tag validation
//!
//! Checks that struct field tags are in the canonical `key:"value"` form that
//! reflection-based lookups expect, and that encoding keys such as `json` and
//! `xml` are not attached to fields encoders cannot see.
//!
//! ```
//! use tagcheck::rule::{check, EncodingKeys, Field};
//! use tagcheck::tag::{validate, StructTag, SyntaxError};
//!
//! assert!(validate(r#"json:"name""#).is_ok());
//! assert_eq!(validate(r#"key:"value"x:"y""#), Err(SyntaxError::TagSyntax));
//! assert_eq!(StructTag::new(r#"json:"name""#).get("json"), "name");
//!
//! let field = Field::named("name", false).with_tag(r#"`json:"name"`"#);
//! assert_eq!(check(&field, &EncodingKeys::default()).len(), 1);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod manifest;
pub mod output;
pub mod paths;
pub mod rule;
pub mod tag;
