use serde::{Deserialize, Serialize};

use super::require;
use crate::error::{ApiError, FieldErrors};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Body of `POST /auth/jwt/create/`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "username", &self.username);
        require(&mut errors, "password", &self.password);
        errors.into_result()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Body of `POST /auth/users/`. The confirmation never leaves the client.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

impl Registration {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "username", &self.username);

        let email = self.email.trim();
        if email.is_empty() {
            require(&mut errors, "email", email);
        } else if !valid_email(email) {
            errors.add("email", "Enter a valid email address.");
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(
                "password",
                format!("Use at least {} characters.", MIN_PASSWORD_LEN),
            );
        }
        if self.password != self.confirm_password {
            errors.add("confirm_password", "Passwords do not match.");
        }
        errors.into_result()
    }
}

fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            username: "kim".into(),
            email: "kim@example.com".into(),
            password: "correct horse".into(),
            confirm_password: "correct horse".into(),
            first_name: "Kim".into(),
            last_name: String::new(),
        }
    }

    #[test]
    fn confirmation_is_not_sent() {
        let body = serde_json::to_value(registration()).unwrap();
        assert!(body.get("confirm_password").is_none());
        assert_eq!(body["email"], "kim@example.com");
    }

    #[test]
    fn mismatched_passwords() {
        let reg = Registration {
            confirm_password: "battery staple".into(),
            ..registration()
        };
        assert_eq!(
            reg.validate().unwrap_err().display_message(),
            "confirm_password: Passwords do not match."
        );
    }

    #[test]
    fn email_shapes() {
        assert!(valid_email("a@b.io"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("@b.io"));
        assert!(!valid_email("a@@b.io"));
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user = User {
            id: 1,
            username: "kim".into(),
            email: String::new(),
            first_name: "Kim".into(),
            last_name: String::new(),
        };
        assert_eq!(user.display_name(), "Kim");
        let user = User {
            first_name: String::new(),
            ..user
        };
        assert_eq!(user.display_name(), "kim");
    }
}
