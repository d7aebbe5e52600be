//! Decode contract shared by every model binding

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use common::{DecodeMode, ModelResult};

use crate::fields::FieldReader;
use crate::source::Source;

/// A typed mirror of a backend result shape
pub trait Model: Serialize + Sized {
    /// Type name used in diagnostics
    const NAME: &'static str;

    /// Exact payload keys this model reads
    const FIELDS: &'static [&'static str];

    /// Build the model from extracted fields
    fn from_fields(fields: &mut FieldReader) -> ModelResult<Self>;

    /// Field values in `FIELDS` order
    fn field_values(&self) -> Vec<(&'static str, Option<&str>)>;

    /// Decode under the default (strict) mode
    fn decode(source: impl Into<Source>) -> ModelResult<Self> {
        Self::decode_with(source, DecodeMode::default())
    }

    /// Same as [`Model::decode`]
    fn create_from(source: impl Into<Source>) -> ModelResult<Self> {
        Self::decode(source)
    }

    /// Decode under an explicit mode
    fn decode_with(source: impl Into<Source>, mode: DecodeMode) -> ModelResult<Self> {
        let value = source.into().into_value()?;
        debug!(model = Self::NAME, %mode, "decoding payload");
        let mut fields = FieldReader::new(Self::NAME, value, mode)?;
        Self::from_fields(&mut fields)
    }

    /// Decode an already structured mapping
    fn decode_from_map(map: Map<String, Value>) -> ModelResult<Self> {
        Self::decode(map)
    }

    /// Decode serialized JSON text
    fn decode_from_text(text: &str) -> ModelResult<Self> {
        Self::decode(text)
    }

    /// Keys that were absent (or null) in the decoded payload
    fn missing_fields(&self) -> Vec<&'static str> {
        self.field_values()
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name)
            .collect()
    }

    /// Encode back to a JSON value, omitting absent fields
    fn to_value(&self) -> ModelResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Encode back to JSON text, omitting absent fields
    fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
