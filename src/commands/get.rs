//! Get command - look up a key in a raw tag

use tagcheck::output::{LookupResult, OutputMode};
use tagcheck::tag::StructTag;

/// Print the first-occurrence value of `key`
pub fn get(tag: &str, key: &str, mode: OutputMode) -> anyhow::Result<bool> {
    let value = StructTag::new(tag).lookup(key);
    let found = value.is_some();

    LookupResult {
        tag: tag.to_string(),
        key: key.to_string(),
        value,
    }
    .render(mode);

    Ok(found)
}
