//! YAML parsing via serde_yaml.
//!
//! Only the first document of a multi-document stream is read; a stream
//! with no documents yields `Value::Null` (the reader turns that into an
//! empty context). serde_yaml never instantiates native types from tags,
//! which is the safe-load behavior this format requires: an
//! arbitrary-type tag is ignored and only the plain inner value comes
//! through.

use serde::de::Deserialize;
use serde_json::Value;

use super::Format;
use crate::error::ContextError;

pub(crate) fn parse(data: &str) -> Result<Value, ContextError> {
    let Some(document) = serde_yaml::Deserializer::from_str(data).next() else {
        return Ok(Value::Null);
    };
    Value::deserialize(document).map_err(|e| ContextError::parse(Format::Yaml, e.to_string()))
}
