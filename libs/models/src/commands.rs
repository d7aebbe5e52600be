//! Models for the "create user" command

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use common::ModelResult;

use crate::fields::FieldReader;
use crate::model::Model;
use crate::source::Source;
use crate::timestamp::parse_utc;
use crate::validation::{validate_email, validate_name};

/// Result of creating a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateUserResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Model for CreateUserResult {
    const NAME: &'static str = "CreateUserResult";
    const FIELDS: &'static [&'static str] = &["id", "name", "email", "created_at"];

    fn from_fields(fields: &mut FieldReader) -> ModelResult<Self> {
        Ok(CreateUserResult {
            id: fields.string("id")?,
            name: fields.string("name")?,
            email: fields.string("email")?,
            created_at: fields.string("created_at")?,
        })
    }

    fn field_values(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("id", self.id.as_deref()),
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("created_at", self.created_at.as_deref()),
        ]
    }
}

impl CreateUserResult {
    /// Creation time parsed as RFC 3339
    pub fn created_at_utc(&self) -> ModelResult<Option<DateTime<Utc>>> {
        parse_utc("created_at", self.created_at.as_deref())
    }
}

/// Create user request payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
}

impl CreateUserCommand {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        CreateUserCommand {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Read a request payload; missing keys become empty strings
    pub fn from_source(source: impl Into<Source>) -> ModelResult<Self> {
        source.into().deserialize()
    }

    /// Check name and email before the command is sent
    pub fn validate(&self) -> ModelResult<()> {
        validate_name(&self.name)?;
        validate_email(&self.email)
    }
}
