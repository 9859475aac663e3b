//! Frontend Models
//!
//! Transient data held while a view is on screen. Nothing is persisted.

use serde::Serialize;

/// Registration form contents, trimmed on read.
///
/// Serializes to the body expected by `POST /api/v1/users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistrationForm {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Forwarded as typed; no numeric check
    pub age: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new(
        first_name: &str,
        last_name: &str,
        age: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            age: age.trim().to_string(),
            email: email.trim().to_string(),
            password: password.trim().to_string(),
            confirm_password: confirm_password.trim().to_string(),
        }
    }
}

/// Todo entry on the board
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            completed: false,
        }
    }
}
