//! Validate command - check raw tags against the canonical grammar

use tagcheck::output::{OutputMode, TagValidation, ValidateResult};
use tagcheck::tag;

/// Validate each raw tag
pub fn validate(tags: &[String], mode: OutputMode) -> anyhow::Result<bool> {
    let result = ValidateResult::new(
        tags.iter().map(|t| TagValidation::new(t, tag::validate(t))).collect(),
    );
    result.render(mode);
    Ok(result.passed)
}
