//! INI parsing into a two-level section mapping.
//!
//! Responsibilities:
//! - Parse `[section]` headers and `key=value` (or `key: value`) lines.
//! - Collect bare keys preceding any header into an implicit defaults
//!   section and merge them into every named section.
//!
//! Does NOT handle:
//! - Type coercion: every value stays a string.
//! - Interpolation (`%(name)s` style) or multi-line continuation values.
//!
//! Invariants:
//! - Output is always two-level: section name -> (key -> string value).
//!   Defaults never appear as a top-level section of their own, so input
//!   with no `[section]` header at all produces an empty mapping.
//! - On a key collision the section's own value wins over the default.
//! - The `__name__` bookkeeping key some legacy writers emit is stripped.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::Format;
use crate::error::ContextError;

/// Bookkeeping key emitted by legacy INI writers; never exposed to consumers.
const SECTION_NAME_KEY: &str = "__name__";

/// Parse INI text into `section -> (key -> value)`.
///
/// # Errors
///
/// Returns `ContextError::Parse` for an unterminated section header, an
/// empty section name, or a line that is neither a header, a comment, nor
/// a delimited key-value pair. The message names the 1-based line number.
pub(crate) fn parse(data: &str) -> Result<Map<String, Value>, ContextError> {
    let mut defaults: BTreeMap<String, String> = BTreeMap::new();
    let mut sections: Vec<(String, BTreeMap<String, String>)> = Vec::new();
    let mut current: Option<usize> = None;

    for (index, raw_line) in data.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let name = rest.strip_suffix(']').ok_or_else(|| {
                ContextError::parse(
                    Format::Ini,
                    format!("unterminated section header at line {}", index + 1),
                )
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(ContextError::parse(
                    Format::Ini,
                    format!("empty section name at line {}", index + 1),
                ));
            }
            // Reopening an existing section appends to it.
            let position = sections.iter().position(|(existing, _)| existing == name);
            current = Some(position.unwrap_or_else(|| {
                sections.push((name.to_string(), BTreeMap::new()));
                sections.len() - 1
            }));
            continue;
        }

        let (key, value) = split_pair(line).ok_or_else(|| {
            ContextError::parse(
                Format::Ini,
                format!("expected 'key = value' at line {}: {line:?}", index + 1),
            )
        })?;
        if key == SECTION_NAME_KEY {
            continue;
        }
        match current {
            Some(section) => {
                sections[section].1.insert(key.to_string(), value.to_string());
            }
            // Bare keys before the first header form the defaults section.
            None => {
                defaults.insert(key.to_string(), value.to_string());
            }
        }
    }

    let mut out = Map::new();
    for (name, own) in sections {
        out.insert(name, Value::Object(merge(&defaults, own)));
    }
    Ok(out)
}

/// Split a line on the first `=` or `:` delimiter, whichever comes first.
/// Returns `None` when no delimiter exists or the key trims to empty.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let at = line.find(['=', ':'])?;
    let (key, rest) = line.split_at(at);
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, rest[1..].trim()))
}

/// Shallow merge of defaults under a section's own keys.
/// The section's own value wins on collision.
fn merge(defaults: &BTreeMap<String, String>, own: BTreeMap<String, String>) -> Map<String, Value> {
    let mut merged = Map::new();
    for (key, value) in defaults {
        merged.insert(key.clone(), Value::String(value.clone()));
    }
    for (key, value) in own {
        merged.insert(key, Value::String(value));
    }
    merged
}
