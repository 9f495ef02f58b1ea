//! Fields command - run the tag rule over a manifest

use std::path::Path;

use tagcheck::manifest;
use tagcheck::output::{CheckReport, OutputMode};
use tagcheck::rule::check_all;

/// Check every field listed in a manifest file
pub fn fields(path: &Path, keys: &[String], mode: OutputMode) -> anyhow::Result<bool> {
    let manifest = manifest::load_file(path)?;
    let keys = super::encoding_keys(keys, manifest.encoding_keys);
    log::debug!("checking encoding keys: {:?}", keys.iter().collect::<Vec<_>>());

    let report = CheckReport::new(manifest.fields.len(), check_all(&manifest.fields, &keys));
    report.render(mode);
    Ok(report.passed)
}
