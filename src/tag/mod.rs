//! Struct tag parsing
//!
//! A struct tag is the string attached to a record field that carries
//! per-field metadata for encoders, as space-separated `key:"value"` pairs:
//!
//! ```text
//! json:"id,omitempty" xml:"id,attr"
//! ```
//!
//! - [`validate`] - strict check of the canonical grammar
//! - [`StructTag`] - first-occurrence-wins key lookup
//! - [`unquote`] - string literal unquoting shared by both

mod error;
mod lookup;
mod scanner;
mod unquote;

pub use error::{SyntaxError, UnquoteError};
pub use lookup::{Pairs, StructTag};
pub use scanner::validate;
pub use unquote::{unquote, unquote_double};
