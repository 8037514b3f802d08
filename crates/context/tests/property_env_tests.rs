//! Property-based tests for the env-format text parser.
//!
//! These tests verify structural properties over randomly generated
//! `KEY=value` documents rather than fixed examples:
//! - parsing is idempotent (same input, equal output);
//! - well-formed lines always survive with first-`=` splitting;
//! - garbage lines without a delimiter never make the parser raise.

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_json::Value;
use stencil_context::ContextReader;

fn parse_env(data: &str) -> serde_json::Map<String, Value> {
    let reader = ContextReader::new();
    let mut stream = data.as_bytes();
    reader
        .read("env", Some(&mut stream), &BTreeMap::new())
        .expect("env parsing never fails")
}

/// Keys that survive trimming: no whitespace, no `=`.
fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,15}"
}

/// Values that survive trimming and may themselves contain `=`.
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9/=_.-]{1,20}".prop_filter("must not trim to empty", |s| !s.trim().is_empty())
}

proptest! {
    #[test]
    fn prop_parsing_is_idempotent(lines in prop::collection::vec("[ -~]{0,30}", 0..20)) {
        let data = lines.join("\n");
        prop_assert_eq!(parse_env(&data), parse_env(&data));
    }

    #[test]
    fn prop_well_formed_pairs_survive(key in key_strategy(), value in value_strategy()) {
        let data = format!("{key}={value}\n");
        let parsed = parse_env(&data);
        // First-`=` splitting: everything after the first delimiter is the
        // value, even if it contains more `=` signs.
        prop_assert_eq!(parsed.get(key.as_str()), Some(&Value::String(value.trim().to_string())));
    }

    #[test]
    fn prop_lines_without_delimiter_are_discarded(line in "[a-zA-Z0-9# ]{0,30}") {
        let parsed = parse_env(&line);
        prop_assert!(parsed.is_empty());
    }

    #[test]
    fn prop_blank_padding_never_changes_the_result(key in key_strategy(), value in value_strategy()) {
        let plain = format!("{key}={value}");
        let padded = format!("\n\n  {key}  =  {value}  \n\n");
        prop_assert_eq!(parse_env(&plain), parse_env(&padded));
    }
}
