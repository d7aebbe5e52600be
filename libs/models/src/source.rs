//! Untyped payload input

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use common::{ModelError, ModelResult};

/// A payload waiting to be decoded into a typed model
///
/// Backend responses reach the frontend either as an already structured
/// JSON value or as the serialized text of one. `Source::default()` is an
/// empty object, the stand-in for "no payload given".
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Structured JSON value, used as-is
    Structured(Value),
    /// Serialized JSON document, parsed before extraction
    Serialized(String),
}

impl Source {
    /// Resolve into a structured value, parsing serialized text first
    pub fn into_value(self) -> ModelResult<Value> {
        match self {
            Source::Structured(value) => Ok(value),
            Source::Serialized(text) => Ok(serde_json::from_str(&text)?),
        }
    }

    /// Deserialize the payload into any serde type
    ///
    /// Only malformed text is a parse error; a well-formed value of the
    /// wrong shape is reported as `ModelError::Payload`.
    pub fn deserialize<T: DeserializeOwned>(self) -> ModelResult<T> {
        let value = self.into_value()?;
        serde_json::from_value(value).map_err(ModelError::Payload)
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Structured(Value::Object(Map::new()))
    }
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        Source::Structured(value)
    }
}

impl From<Map<String, Value>> for Source {
    fn from(map: Map<String, Value>) -> Self {
        Source::Structured(Value::Object(map))
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Serialized(text)
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Serialized(text.to_owned())
    }
}
