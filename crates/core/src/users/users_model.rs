//! User domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DAILY_LIMIT, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};
use crate::errors::{Result, ValidationError};

/// Domain model for an account. The credential hash never leaves storage
/// through this type; see [`UserCredentials`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub daily_limit: i64,
}

/// A user together with the stored credential hash, used only for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Signup input as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Row to persist for a new account, with the credential already hashed.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub daily_limit: i64,
}

impl NewUser {
    /// Trims the name, normalizes the email and checks every field.
    pub fn normalized(self) -> Result<NewUser> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::TooLong {
                field: "name".to_string(),
                max: MAX_NAME_LENGTH,
            }
            .into());
        }

        let email = normalize_email(&self.email);
        validate_email(&email)?;

        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password".to_string()).into());
        }

        Ok(NewUser {
            name,
            email,
            password: self.password,
        })
    }

    pub(crate) fn into_record(self, password_hash: String) -> NewUserRecord {
        NewUserRecord {
            name: self.name,
            email: self.email,
            password_hash,
            daily_limit: DEFAULT_DAILY_LIMIT,
        }
    }
}

/// Emails are compared case-insensitively by storing them lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(ValidationError::MissingField("email".to_string()).into());
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LENGTH,
        }
        .into());
    }
    let mut parts = email.split('@');
    let well_formed = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
    );
    if !well_formed || email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidInput(format!("'{email}' is not a valid email")).into());
    }
    Ok(())
}
