//! Typed model bindings for the shadow-id user backend
//!
//! Each backend operation's result shape is mirrored as an immutable value
//! type that decodes from either a structured JSON value or serialized JSON
//! text. Missing keys decode to `None`; only malformed text (and, in strict
//! mode, mistyped values) fails.
//!
//! ```rust
//! use models::{Model, commands::CreateUserResult, queries::GetUserResult};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), common::ModelError> {
//! let created = CreateUserResult::decode(json!({"id": "u1", "name": "Ada"}))?;
//! assert_eq!(created.name.as_deref(), Some("Ada"));
//! assert_eq!(created.email, None);
//!
//! let user = GetUserResult::create_from(r#"{"id":"u1","updated_at":"t2"}"#)?;
//! assert_eq!(user.updated_at.as_deref(), Some("t2"));
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod fields;
pub mod model;
pub mod queries;
pub mod source;
pub mod validation;

mod timestamp;

pub use commands::{CreateUserCommand, CreateUserResult};
pub use fields::FieldReader;
pub use model::Model;
pub use queries::{GetUserQuery, GetUserResult};
pub use source::Source;
