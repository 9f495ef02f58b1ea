//! Property-based tests for tag validation and lookup
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use tagcheck::tag::{unquote_double, validate, StructTag};

use crate::common::{quote, tag_of};

fn key() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_.\\-é]{0,8}"
}

fn value() -> impl Strategy<Value = String> {
    "[ -~]{0,12}"
}

fn pair_list() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((key(), value()), 0..6)
}

fn build(pairs: &[(String, String)]) -> String {
    let borrowed: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    tag_of(&borrowed)
}

proptest! {
    /// Well-formed pair sequences always validate
    #[test]
    fn canonical_tags_validate(pairs in pair_list()) {
        prop_assert_eq!(validate(&build(&pairs)), Ok(()));
    }

    /// Lookup returns the value of the first pair with that key
    #[test]
    fn lookup_returns_first_occurrence(pairs in pair_list()) {
        let raw = build(&pairs);
        let tag = StructTag::new(&raw);
        for (k, _) in &pairs {
            let first = pairs.iter().find(|(other, _)| other == k).map(|(_, v)| v.clone());
            prop_assert_eq!(tag.lookup(k), first);
        }
    }

    /// Quoting then unquoting a value gives it back
    #[test]
    fn quoted_values_unquote(v in value()) {
        prop_assert_eq!(unquote_double(&quote(&v)), Ok(v));
    }

    /// Gluing two pairs together without a space is always rejected
    #[test]
    fn missing_separator_rejected(a in (key(), value()), b in (key(), value())) {
        let raw = format!("{}:{}{}:{}", a.0, quote(&a.1), b.0, quote(&b.1));
        prop_assert!(validate(&raw).is_err());
    }

    /// Arbitrary input never panics
    #[test]
    fn arbitrary_input_does_not_panic(s in any::<String>()) {
        let _ = validate(&s);
        let _ = StructTag::new(&s).get("json");
    }
}
