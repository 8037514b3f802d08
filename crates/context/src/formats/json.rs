//! JSON parsing. Delegates entirely to serde_json; the only logic here is
//! error propagation with the decoder's line/column hint.

use serde_json::Value;

use super::Format;
use crate::error::ContextError;

pub(crate) fn parse(data: &str) -> Result<Value, ContextError> {
    // serde_json errors already render as "... at line N column M".
    serde_json::from_str(data).map_err(|e| ContextError::parse(Format::Json, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_native_equivalence() {
        let parsed = parse(r#"{"a": 1, "b": [2, 3]}"#).unwrap();
        assert_eq!(parsed, json!({"a": 1, "b": [2, 3]}));
    }

    #[test]
    fn test_error_includes_position() {
        let err = parse("{\"a\": }").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("json parse error"), "got: {message}");
        assert!(message.contains("line 1"), "got: {message}");
    }
}
