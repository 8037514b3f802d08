//! Environment-style `KEY=value` parsing.
//!
//! Responsibilities:
//! - Parse a text blob of `KEY=value` lines into a flat string mapping.
//! - Convert an already-structured environment mapping into a context
//!   without touching the values.
//!
//! Does NOT handle:
//! - Loading `.env` files from disk (the reader hands us the text).
//! - Export prefixes, quoting, or variable expansion.
//!
//! Invariants:
//! - Splitting happens on the FIRST `=` only: `FOO=bar=baz` yields key
//!   `FOO`, value `bar=baz`.
//! - A line that does not produce two non-empty-after-trim halves is
//!   silently discarded. Blank lines and comment-only lines in a typical
//!   `.env` file must never raise.
//! - Live-environment pass-through preserves values byte for byte; no
//!   trimming is applied there.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Parse `KEY=value` lines into a flat mapping, skipping anything that is
/// not a well-formed pair.
pub(crate) fn parse_text(data: &str) -> Map<String, Value> {
    let mut out = Map::new();
    for line in data.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }
        out.insert(key.to_string(), Value::String(value.to_string()));
    }
    out
}

/// Convert the live environment mapping into a context, unchanged.
pub(crate) fn environ_context(environ: &BTreeMap<String, String>) -> Map<String, Value> {
    environ
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect()
}
