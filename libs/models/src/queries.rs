//! Models for the "get user" query

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use common::ModelResult;

use crate::fields::FieldReader;
use crate::model::Model;
use crate::source::Source;
use crate::timestamp::parse_utc;
use crate::validation::validate_id;

/// Current state of a user record
///
/// No ordering between `created_at` and `updated_at` is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetUserResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Model for GetUserResult {
    const NAME: &'static str = "GetUserResult";
    const FIELDS: &'static [&'static str] = &["id", "name", "email", "created_at", "updated_at"];

    fn from_fields(fields: &mut FieldReader) -> ModelResult<Self> {
        Ok(GetUserResult {
            id: fields.string("id")?,
            name: fields.string("name")?,
            email: fields.string("email")?,
            created_at: fields.string("created_at")?,
            updated_at: fields.string("updated_at")?,
        })
    }

    fn field_values(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("id", self.id.as_deref()),
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("created_at", self.created_at.as_deref()),
            ("updated_at", self.updated_at.as_deref()),
        ]
    }
}

impl GetUserResult {
    pub fn created_at_utc(&self) -> ModelResult<Option<DateTime<Utc>>> {
        parse_utc("created_at", self.created_at.as_deref())
    }

    pub fn updated_at_utc(&self) -> ModelResult<Option<DateTime<Utc>>> {
        parse_utc("updated_at", self.updated_at.as_deref())
    }
}

/// Get user request payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserQuery {
    pub id: String,
}

impl GetUserQuery {
    pub fn new(id: impl Into<String>) -> Self {
        GetUserQuery { id: id.into() }
    }

    pub fn from_source(source: impl Into<Source>) -> ModelResult<Self> {
        source.into().deserialize()
    }

    pub fn validate(&self) -> ModelResult<()> {
        validate_id(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_serialized_payload() {
        let result = GetUserResult::decode(
            r#"{"id":"u2","name":"Bob","email":"bob@x.com","created_at":"t1","updated_at":"t2"}"#,
        )
        .unwrap();

        assert_eq!(result.id.as_deref(), Some("u2"));
        assert_eq!(result.name.as_deref(), Some("Bob"));
        assert_eq!(result.email.as_deref(), Some("bob@x.com"));
        assert_eq!(result.created_at.as_deref(), Some("t1"));
        assert_eq!(result.updated_at.as_deref(), Some("t2"));
    }

    #[test]
    fn test_updated_before_created_is_accepted() {
        let result = GetUserResult::decode(json!({
            "created_at": "2024-02-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        let created = result.created_at_utc().unwrap().unwrap();
        let updated = result.updated_at_utc().unwrap().unwrap();
        assert!(updated < created);
    }

    #[test]
    fn test_query_validation() {
        assert!(GetUserQuery::new("4f9c2a1b7e3d4c5a").validate().is_ok());
        assert!(GetUserQuery::new("u1").validate().is_err());
        assert!(GetUserQuery::from_source("{}").unwrap().validate().is_err());
    }
}
