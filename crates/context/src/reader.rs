//! Context reader: resolves a format, consumes the input, parses once.
//!
//! Responsibilities:
//! - Select the parser for a requested format tag through the registry.
//! - Materialize the whole input stream as one string before parsing.
//! - Handle the streamless `env` mode that reads the live environment.
//!
//! Does NOT handle:
//! - Opening files or deciding where the stream comes from (see
//!   `crates/cli`).
//! - Template rendering.
//!
//! Invariants:
//! - Exactly one parser invocation per call; no partial or streaming parse.
//! - The stream is fully consumed (read to end) before the parser runs.
//! - Errors propagate unchanged; there is no fallback to an empty context.

use std::collections::BTreeMap;
use std::io::{self, Read};

use serde_json::{Map, Value};

use crate::error::ContextError;
use crate::formats::{self, Format};
use crate::registry::Registry;

/// The resolved key-value data handed to the template engine as its
/// variable namespace.
pub type Context = Map<String, Value>;

/// Reads context data in any registered format.
pub struct ContextReader {
    registry: Registry,
}

impl ContextReader {
    /// Reader over the current build's registry.
    pub fn new() -> Self {
        Self::with_registry(Registry::detect())
    }

    /// Reader over an explicit registry (tests pass fake capabilities).
    pub fn with_registry(registry: Registry) -> Self {
        ContextReader { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Read context data into a mapping.
    ///
    /// When `format` is `"env"` and `input` is `None`, `environ` is passed
    /// through as the context without any parsing; this is the only format
    /// that supports a streamless invocation. Every other call reads
    /// `input` to end and runs the format's parser on the whole string.
    ///
    /// `input` is generic (rather than `&mut dyn Read`) so callers holding
    /// an `Option<Box<dyn Read>>` can pass `as_deref_mut()` directly; a
    /// trait-object parameter would pin the object lifetime to the borrow
    /// and reject that call.
    ///
    /// # Errors
    ///
    /// - `ContextError::UnsupportedFormat` when the tag is not registered.
    /// - `ContextError::Parse` when the input text cannot be interpreted,
    ///   or when the document's top level is not a mapping.
    /// - `ContextError::Io` when the stream cannot be fully read, or when
    ///   `input` is `None` for a format that requires one.
    pub fn read<R: Read + ?Sized>(
        &self,
        format: &str,
        input: Option<&mut R>,
        environ: &BTreeMap<String, String>,
    ) -> Result<Context, ContextError> {
        // Special case: render from the live environment.
        if format == Format::Env.tag() && input.is_none() {
            tracing::debug!(vars = environ.len(), "using live environment as context");
            return Ok(formats::environ_context(environ));
        }

        let stream = input.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("format '{format}' requires an input stream"),
            )
        })?;
        let mut data = String::new();
        stream.read_to_string(&mut data)?;

        let format = self
            .registry
            .lookup(format)
            .ok_or_else(|| ContextError::UnsupportedFormat {
                format: format.to_string(),
            })?;
        tracing::debug!(%format, bytes = data.len(), "parsing context data");
        into_mapping(format, formats::parse(format, &data)?)
    }
}

impl Default for ContextReader {
    fn default() -> Self {
        Self::new()
    }
}

/// The template engine consumes the context as a namespace, so the parsed
/// document's top level must be a mapping. An empty document (YAML `null`)
/// becomes an empty context.
fn into_mapping(format: Format, value: Value) -> Result<Context, ContextError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(ContextError::parse(
            format,
            format!(
                "top-level value must be a mapping, got {}",
                type_name(&other)
            ),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
