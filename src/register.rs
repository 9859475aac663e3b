//! Registration Logic
//!
//! Validation and user-facing texts for the sign-up form.

use crate::api::ApiError;
use crate::models::RegistrationForm;

pub const REGISTER_PATH: &str = "/api/v1/users";

pub const MISSING_FIELDS_MESSAGE: &str = "Nombre y contraseña son obligatorios.";
pub const SUCCESS_MESSAGE: &str = "Registro exitoso. Redirigiendo...";

impl RegistrationForm {
    /// Only first name and password are required.
    ///
    /// Age format, email shape and password confirmation are left to the server.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.first_name.is_empty() || self.password.is_empty() {
            return Err(MISSING_FIELDS_MESSAGE);
        }
        Ok(())
    }
}

pub fn failure_message(err: &ApiError) -> String {
    format!("No se pudo registrar: {}", err.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(first: &str, password: &str) -> RegistrationForm {
        RegistrationForm::new(first, "Lovelace", "36", "ada@example.com", password, "other")
    }

    #[test]
    fn test_blank_first_name_rejected() {
        assert_eq!(form("", "secret").validate(), Err(MISSING_FIELDS_MESSAGE));
        assert_eq!(form("   ", "secret").validate(), Err(MISSING_FIELDS_MESSAGE));
    }

    #[test]
    fn test_blank_password_rejected() {
        assert_eq!(form("Ada", " \t").validate(), Err(MISSING_FIELDS_MESSAGE));
    }

    #[test]
    fn test_mismatched_confirmation_accepted() {
        let form = RegistrationForm::new("Ada", "", "not a number", "nope", "secret", "different");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let form = RegistrationForm::new("  Ada ", " L ", " 36 ", " a@b.c ", " pw ", " pw2 ");
        assert_eq!(form.first_name, "Ada");
        assert_eq!(form.last_name, "L");
        assert_eq!(form.age, "36");
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.password, "pw");
        assert_eq!(form.confirm_password, "pw2");
    }

    #[test]
    fn test_request_body_uses_camel_case_keys() {
        let body = serde_json::to_value(form("Ada", "secret")).unwrap();
        assert_eq!(
            body,
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "age": "36",
                "email": "ada@example.com",
                "password": "secret",
                "confirmPassword": "other",
            })
        );
    }

    #[test]
    fn test_failure_message_wraps_server_text() {
        let err = ApiError::from_response(409, Some(&json!({ "message": "X" })));
        assert_eq!(failure_message(&err), "No se pudo registrar: X");
    }
}
