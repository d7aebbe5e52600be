//! Field-by-field extraction from a decoded payload

use serde_json::{Map, Value};
use tracing::warn;

use common::{DecodeMode, ModelError, ModelResult};

const EXPECTED_STRING: &str = "a string";

/// Reads declared fields out of a payload object by exact key
///
/// Each key is taken out of the underlying map at most once, so string
/// values move into the model without copying.
#[derive(Debug)]
pub struct FieldReader {
    model: &'static str,
    mode: DecodeMode,
    map: Map<String, Value>,
}

impl FieldReader {
    /// Wrap a structured value for extraction
    ///
    /// In strict mode a non-object value is rejected. In lenient mode it
    /// behaves like an empty object, so every field reads as absent.
    pub fn new(model: &'static str, value: Value, mode: DecodeMode) -> ModelResult<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                let found = json_type(&other);
                if mode == DecodeMode::Strict {
                    return Err(ModelError::NotAnObject { found });
                }
                warn!(model, found, "payload is not an object, all fields absent");
                Map::new()
            }
        };

        Ok(FieldReader { model, mode, map })
    }

    /// Take an optional string field
    ///
    /// Missing keys and JSON `null` read as `None`.
    pub fn string(&mut self, field: &'static str) -> ModelResult<Option<String>> {
        match self.map.remove(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                let found = json_type(&other);
                match self.mode {
                    DecodeMode::Strict => Err(ModelError::FieldType {
                        field,
                        expected: EXPECTED_STRING,
                        found,
                    }),
                    DecodeMode::Lenient => {
                        warn!(model = self.model, field, found, "dropping mistyped field");
                        Ok(None)
                    }
                }
            }
        }
    }
}

/// Human readable name of a JSON value's type
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_present_and_missing_keys() {
        let mut reader =
            FieldReader::new("Test", json!({"name": "Ada"}), DecodeMode::Strict).unwrap();
        assert_eq!(reader.string("name").unwrap().as_deref(), Some("Ada"));
        assert_eq!(reader.string("email").unwrap(), None);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut reader =
            FieldReader::new("Test", json!({"Name": "Ada"}), DecodeMode::Strict).unwrap();
        assert_eq!(reader.string("name").unwrap(), None);
    }

    #[test]
    fn test_null_reads_as_absent() {
        let mut reader = FieldReader::new("Test", json!({"id": null}), DecodeMode::Strict).unwrap();
        assert_eq!(reader.string("id").unwrap(), None);
    }

    #[test]
    fn test_strict_rejects_mistyped_value() {
        let mut reader = FieldReader::new("Test", json!({"id": 42}), DecodeMode::Strict).unwrap();
        let err = reader.string("id").unwrap_err();
        assert!(matches!(
            err,
            ModelError::FieldType { field: "id", found: "a number", .. }
        ));
    }

    #[test]
    fn test_lenient_drops_mistyped_value() {
        let mut reader =
            FieldReader::new("Test", json!({"id": [1, 2]}), DecodeMode::Lenient).unwrap();
        assert_eq!(reader.string("id").unwrap(), None);
    }

    #[test]
    fn test_non_object_by_mode() {
        let err = FieldReader::new("Test", json!(42), DecodeMode::Strict).unwrap_err();
        assert!(matches!(err, ModelError::NotAnObject { found: "a number" }));

        let mut reader = FieldReader::new("Test", json!([1]), DecodeMode::Lenient).unwrap();
        assert_eq!(reader.string("id").unwrap(), None);
    }
}
