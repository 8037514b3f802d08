//! Format parsers for context ingestion.
//!
//! Responsibilities:
//! - Define the closed set of supported input formats.
//! - Dispatch a raw text blob to the parser for a given format.
//!
//! Does NOT handle:
//! - Format availability (see `registry.rs`; dispatch assumes the caller
//!   already resolved the format through the registry).
//! - Reading the input stream (see `reader.rs`).
//!
//! Invariants:
//! - The format set is a closed enum; adding a format means adding a variant
//!   here plus a parser module, and the compiler flags every match that
//!   needs updating.
//! - Every parser receives the complete input as one string; there is no
//!   streaming or incremental parsing.

mod env;
mod ini;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "yaml")]
mod yaml;

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::ContextError;

pub(crate) use env::environ_context;

/// A supported input data format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Sectioned `[section]` / `key=value` files.
    Ini,
    /// Standard JSON documents.
    Json,
    /// YAML documents (first document of a stream, safe-load only).
    Yaml,
    /// Line-oriented `KEY=value` pairs, or the live process environment.
    Env,
}

impl Format {
    /// All formats the crate knows about, independent of availability.
    pub const ALL: [Format; 4] = [Format::Ini, Format::Json, Format::Yaml, Format::Env];

    /// The tag used to request this format (`--format=<tag>`).
    pub const fn tag(self) -> &'static str {
        match self {
            Format::Ini => "ini",
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Env => "env",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Format {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ini" => Ok(Format::Ini),
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            "env" => Ok(Format::Env),
            _ => Err(()),
        }
    }
}

/// Parse a complete text blob in the given format.
///
/// The caller is expected to have resolved `format` through the registry;
/// a format compiled out of the crate is unreachable here because the
/// registry never hands it out.
pub(crate) fn parse(format: Format, data: &str) -> Result<Value, ContextError> {
    match format {
        Format::Ini => ini::parse(data).map(Value::Object),
        Format::Env => Ok(Value::Object(env::parse_text(data))),
        #[cfg(feature = "json")]
        Format::Json => json::parse(data),
        #[cfg(feature = "yaml")]
        Format::Yaml => yaml::parse(data),
        #[cfg(not(all(feature = "json", feature = "yaml")))]
        _ => unreachable!("format {format} is not registered"),
    }
}
