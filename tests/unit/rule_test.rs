//! Tests for the field tag rule

use tagcheck::rule::{check, check_all, Diagnostic, EncodingKeys, Field, MalformedReason};
use tagcheck::tag::SyntaxError;

use crate::common::{exported, unexported};

fn keys() -> EncodingKeys {
    EncodingKeys::default()
}

// =============================================================================
// Exported-field rule
// =============================================================================

#[test]
fn test_unexported_json_is_reported() {
    let diags = check(&unexported("x", r#"json:"x""#), &keys());
    assert_eq!(diags, vec![Diagnostic::key_but_unexported("x", "json")]);
}

#[test]
fn test_exported_json_is_fine() {
    assert!(check(&exported("X", r#"json:"x""#), &keys()).is_empty());
}

#[test]
fn test_embedded_is_exempt_regardless_of_export() {
    for is_exported in [false, true] {
        let field = Field::embedded(is_exported).with_tag(r#"`json:"x"`"#);
        assert!(check(&field, &keys()).is_empty());
    }
}

#[test]
fn test_json_and_xml_report_once() {
    let diags = check(&unexported("x", r#"json:"x" xml:"y""#), &keys());
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0], Diagnostic::key_but_unexported("x", "json"));
}

#[test]
fn test_xml_only_is_reported() {
    let diags = check(&unexported("x", r#"xml:"y""#), &keys());
    assert_eq!(diags, vec![Diagnostic::key_but_unexported("x", "xml")]);
}

#[test]
fn test_other_keys_are_ignored() {
    assert!(check(&unexported("x", r#"yaml:"x" db:"x""#), &keys()).is_empty());
}

#[test]
fn test_dash_value_still_counts() {
    // A non-empty value is enough; its meaning is not interpreted
    let diags = check(&unexported("x", r#"json:"-""#), &keys());
    assert_eq!(diags.len(), 1);
}

#[test]
fn test_first_occurrence_decides() {
    // First json is empty, so json does not count even though a later one is set
    let diags = check(&unexported("x", r#"json:"" json:"x""#), &keys());
    assert!(diags.is_empty());
}

// =============================================================================
// Malformed tags
// =============================================================================

#[test]
fn test_no_tag() {
    assert!(check(&Field::named("x", false), &keys()).is_empty());
}

#[test]
fn test_outer_literal_unreadable() {
    let field = Field::named("X", true).with_tag(r#""json:"x"""#);
    let diags = check(&field, &keys());
    assert_eq!(diags.len(), 1);
    assert!(matches!(
        &diags[0],
        Diagnostic::MalformedTag { reason: MalformedReason::Unreadable, .. }
    ));
}

#[test]
fn test_double_quoted_outer_literal() {
    let field = Field::named("x", false).with_tag(r#""json:\"x\"""#);
    assert_eq!(check(&field, &keys()), vec![Diagnostic::key_but_unexported("x", "json")]);
}

#[test]
fn test_syntax_error_carries_raw_literal() {
    let diags = check(&exported("X", r#"json:"x"xml:"y""#), &keys());
    assert_eq!(
        diags,
        vec![Diagnostic::syntax(r#"`json:"x"xml:"y"`"#, SyntaxError::TagSyntax)]
    );
    assert_eq!(
        diags[0].to_string(),
        "struct field tag `json:\"x\"xml:\"y\"` not compatible with reflect.StructTag.Get: \
         bad syntax for struct tag pair"
    );
}

#[test]
fn test_syntax_error_suppresses_export_check() {
    let diags = check(&unexported("x", r#"json:"x" :"y""#), &keys());
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code(), "malformed-tag");
}

#[test]
fn test_embedded_field_with_bad_tag_is_reported() {
    let field = Field::embedded(false).with_tag("`json`");
    assert_eq!(check(&field, &keys()), vec![Diagnostic::syntax("`json`", SyntaxError::TagSyntax)]);
}

// =============================================================================
// Batch
// =============================================================================

#[test]
fn test_check_all() {
    let fields = vec![
        unexported("a", r#"json:"a""#),
        exported("B", r#"json:"b""#),
        Field::embedded(false).with_tag(r#"`json:"c"`"#),
        unexported("d", r#"xml:"d""#),
    ];
    let findings = check_all(&fields, &keys());
    let got: Vec<_> = findings.iter().map(|f| (f.index, f.field.as_deref())).collect();
    assert_eq!(got, vec![(0, Some("a")), (3, Some("d"))]);
}

#[test]
fn test_check_all_empty() {
    assert!(check_all(&Vec::<Field>::new(), &keys()).is_empty());
}
