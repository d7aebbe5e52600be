//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

use common::{ModelError, ModelResult};

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;
const EMAIL_MAX_LEN: usize = 254;
const ID_MIN_CHARS: usize = 8;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    })
}

/// Validate a display name
pub fn validate_name(name: &str) -> ModelResult<()> {
    if name.is_empty() {
        return Err(ModelError::validation("name", "Name is required"));
    }

    if name.trim().is_empty() {
        return Err(ModelError::validation("name", "Name cannot be blank"));
    }

    match name.chars().count() {
        n if n < NAME_MIN_CHARS => Err(ModelError::validation(
            "name",
            format!("Name must be at least {NAME_MIN_CHARS} characters long"),
        )),
        n if n > NAME_MAX_CHARS => Err(ModelError::validation(
            "name",
            format!("Name must be at most {NAME_MAX_CHARS} characters long"),
        )),
        _ => Ok(()),
    }
}

/// Validate email
///
/// The address is only checked for shape; deliverability belongs to the
/// backend.
pub fn validate_email(email: &str) -> ModelResult<()> {
    let problem = if email.is_empty() {
        "Email is required".to_string()
    } else if email.len() > EMAIL_MAX_LEN {
        format!("Email must be at most {EMAIL_MAX_LEN} characters long")
    } else if !email_regex().is_match(email) {
        "Invalid email format".to_string()
    } else {
        return Ok(());
    };

    Err(ModelError::validation("email", problem))
}

/// Validate a user identifier
///
/// Backend ids are 32 hex characters; anything shorter than
/// `ID_MIN_CHARS` cannot have come from it.
pub fn validate_id(id: &str) -> ModelResult<()> {
    if id.trim().is_empty() {
        return Err(ModelError::validation("id", "Id is required"));
    }

    if id.chars().count() < ID_MIN_CHARS {
        return Err(ModelError::validation(
            "id",
            format!("Id must be at least {ID_MIN_CHARS} characters long"),
        ));
    }

    Ok(())
}
