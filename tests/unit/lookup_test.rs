//! Tests for first-occurrence key lookup

use tagcheck::tag::StructTag;

use crate::common::tag_of;

#[test]
fn test_get_json() {
    assert_eq!(StructTag::new(r#"json:"name""#).get("json"), "name");
}

#[test]
fn test_first_occurrence_wins() {
    let tag = StructTag::new(r#"key:"value1" key:"value2""#);
    assert_eq!(tag.get("key"), "value1");
    assert_ne!(tag.get("key"), "value2");
}

#[test]
fn test_absent_key() {
    let tag = StructTag::new(r#"json:"name""#);
    assert_eq!(tag.get("xml"), "");
    assert_eq!(tag.lookup("xml"), None);
}

#[test]
fn test_key_is_matched_exactly() {
    let tag = StructTag::new(r#"jsonx:"a" json:"b""#);
    assert_eq!(tag.get("json"), "b");
    assert_eq!(tag.get("js"), "");
}

#[test]
fn test_escaped_values_round_trip() {
    let value = r#"has "quotes" and \ backslash"#;
    let raw = tag_of(&[("k", value)]);
    assert_eq!(StructTag::new(&raw).get("k"), value);
}

#[test]
fn test_pairs_stop_at_first_malformed_pair() {
    let tag = StructTag::new(r#"a:"1" b:2 c:"3""#);
    let keys: Vec<_> = tag.pairs().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a"]);
}

#[test]
fn test_as_str() {
    let raw = r#"json:"x""#;
    assert_eq!(StructTag::new(raw).as_str(), raw);
}
