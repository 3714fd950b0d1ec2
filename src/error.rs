use std::collections::BTreeMap;
use std::fmt;

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::notify;
use crate::workflow::GateError;

/// Field name used by the backend for errors that belong to no single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Validation messages keyed by field, in the same shape the backend returns
/// them (`{"field": ["msg", ...]}`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .iter()
            .map(|(field, messages)| notify::field_line(field, messages))
            .collect::<Vec<_>>();
        f.write_str(&lines.join("; "))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token must have three dot-separated segments")]
    Segments,
    #[error("token payload is not valid base64url")]
    Encoding,
    #[error("token payload is not valid JSON: {0}")]
    Payload(String),
    #[error("token carries no user id")]
    MissingUser,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        body: Option<Value>,
    },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("invalid input: {0}")]
    Validation(FieldErrors),
    #[error("authentication required")]
    Unauthorized,
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Workflow(#[from] GateError),
}

impl ApiError {
    /// Builds a status error from a raw response body, keeping it as JSON when
    /// it parses and as a plain string otherwise.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let body = body.trim();
        let body = if body.is_empty() {
            None
        } else {
            Some(
                serde_json::from_str::<Value>(body)
                    .unwrap_or_else(|_| Value::String(body.to_string())),
            )
        };
        ApiError::Status { status, body }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The single string shown to the user for this error.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Status { status, body } => body
                .as_ref()
                .and_then(|body| match body {
                    // An HTML error page is not something to show anyone.
                    Value::String(text) if text.trim_start().starts_with('<') => None,
                    other => notify::message_from_json(other),
                })
                .unwrap_or_else(|| status_message(*status)),
            ApiError::Validation(errors) => errors.to_string(),
            ApiError::Unauthorized => "Please sign in to continue.".to_string(),
            ApiError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Token(_) => "Your session is invalid. Please sign in again.".to_string(),
            ApiError::Workflow(gate) => gate.to_string(),
        }
    }
}

fn status_message(status: StatusCode) -> String {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            "Please sign in to continue.".to_string()
        }
        StatusCode::NOT_FOUND => "Not found.".to_string(),
        _ => GENERIC_ERROR.to_string(),
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_errors_render_sorted_lines() {
        let mut errors = FieldErrors::new();
        errors.add("price", "Enter a price.");
        errors.add("name", "This field is required.");
        errors.add(NON_FIELD_ERRORS, "Check the form.");
        assert_eq!(
            errors.to_string(),
            "name: This field is required.; Check the form.; price: Enter a price."
        );
    }

    #[test]
    fn empty_field_errors_pass() {
        assert_eq!(FieldErrors::new().into_result(), Ok(()));
    }

    #[test]
    fn status_body_with_detail_wins() {
        let err = ApiError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"detail": "No active account found with the given credentials"}"#,
        );
        assert_eq!(
            err.display_message(),
            "No active account found with the given credentials"
        );
    }

    #[test]
    fn status_without_body_uses_fallback() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, "");
        assert_eq!(err.display_message(), GENERIC_ERROR);
        let err = ApiError::from_status(StatusCode::FORBIDDEN, "   ");
        assert_eq!(err.display_message(), "Please sign in to continue.");
    }

    #[test]
    fn html_bodies_are_not_shown() {
        let err = ApiError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<!doctype html><h1>Server Error (500)</h1>",
        );
        assert_eq!(err.display_message(), GENERIC_ERROR);
    }

    #[test]
    fn plain_text_bodies_are_kept() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, "Car is already sold");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.display_message(), "Car is already sold");
    }

    #[test]
    fn field_error_bodies_are_joined() {
        let err = ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            body: Some(json!({"username": ["A user with that username already exists."]})),
        };
        assert_eq!(
            err.display_message(),
            "username: A user with that username already exists."
        );
    }
}
