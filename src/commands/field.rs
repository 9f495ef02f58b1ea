//! Field command - run the tag rule on one field

use std::iter;

use tagcheck::output::{CheckReport, OutputMode};
use tagcheck::rule::{check_all, Field};

/// Check a single field's tag literal
pub fn field(
    literal: &str,
    name: Option<&str>,
    exported: bool,
    keys: &[String],
    mode: OutputMode,
) -> anyhow::Result<bool> {
    let keys = super::encoding_keys(keys, None);
    let field = Field {
        name: name.map(String::from),
        tag: Some(literal.to_string()),
        exported,
    };

    let report = CheckReport::new(1, check_all(iter::once(&field), &keys));
    report.render(mode);
    Ok(report.passed)
}
