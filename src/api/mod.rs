//! Client for the marketplace REST backend.
//!
//! Every call goes through [`ApiClient`], which joins paths onto the
//! configured base URL, attaches the session's `Authorization` header and
//! turns non-2xx answers into [`ApiError::Status`] with the body preserved for
//! notification normalization.
use gloo_net::http::{RequestBuilder, Response};
use http::StatusCode;
use leptos::logging::{log, warn};
use leptos::{store_value, StoredValue};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::use_config;
use crate::error::ApiError;
use crate::models::Listing;
use crate::session::{use_auth, Auth, Session};

mod auth;
mod cars;
mod checkout;
mod directory;

/// Builds `/a/b/c/` from raw segments, percent-encoding each one.
pub fn path(segments: &[&str]) -> String {
    let mut out = String::from("/");
    for segment in segments {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        out.push_str(&urlencoding::encode(segment));
        out.push('/');
    }
    out
}

/// Appends a query string, skipping pairs whose value is blank.
pub fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    let query = pairs
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value.trim())
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: None,
        }
    }

    pub fn with_session(mut self, session: Option<Session>) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Fails early for calls that make no sense without a session.
    fn require_session(&self) -> Result<&Session, ApiError> {
        self.session.as_ref().ok_or(ApiError::Unauthorized)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session {
            Some(session) => request.header("Authorization", &session.authorization()),
            None => request,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log!("[API] GET {}", url);
        let response = self
            .authorize(gloo_net::http::Request::get(&url))
            .header("Accept", "application/json")
            .send()
            .await?;
        read_json(response).await
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        self.get::<Listing<T>>(path).await.map(Listing::into_vec)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log!("[API] POST {}", url);
        let response = self
            .authorize(gloo_net::http::Request::post(&url))
            .header("Accept", "application/json")
            .json(body)?
            .send()
            .await?;
        read_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        log!("[API] DELETE {}", url);
        let response = self
            .authorize(gloo_net::http::Request::delete(&url))
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }
}

fn status_of(response: &Response) -> StatusCode {
    StatusCode::from_u16(response.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Passes 2xx responses through; anything else becomes a status error
/// carrying the body.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = status_of(&response);
    if status.is_success() {
        return Ok(response);
    }
    warn!("[API] {} -> {}", response.url(), status);
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Copyable handle to the backend, safe to capture in event handlers and
/// effects. Each [`Api::client`] call picks up the session active right now.
#[derive(Clone, Copy)]
pub struct Api {
    base_url: StoredValue<String>,
    auth: Auth,
}

impl Api {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.get_value()).with_session(self.auth.session_untracked())
    }
}

pub fn use_api() -> Api {
    Api {
        base_url: store_value(use_config().api_base_url),
        auth: use_auth(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_encoded_and_slashed() {
        assert_eq!(path(&["store", "cars"]), "/store/cars/");
        assert_eq!(path(&["store", "cars", "12", "reviews"]), "/store/cars/12/reviews/");
        assert_eq!(
            path(&["store", "verify-payment", "cs test/1"]),
            "/store/verify-payment/cs%20test%2F1/"
        );
    }

    #[test]
    fn blank_query_values_are_dropped() {
        assert_eq!(with_query("/store/cars/", &[("search", "  ")]), "/store/cars/");
        assert_eq!(
            with_query("/store/cars/", &[("search", " bmw x5 "), ("ordering", "-price")]),
            "/store/cars/?search=bmw%20x5&ordering=-price"
        );
    }

    #[test]
    fn urls_join_on_base() {
        let api = ApiClient::new("http://localhost:8000/");
        assert_eq!(api.url("/store/cars/"), "http://localhost:8000/store/cars/");
        assert_eq!(api.url("auth/users/"), "http://localhost:8000/auth/users/");
    }

    #[test]
    fn calls_needing_a_session_fail_without_one() {
        let api = ApiClient::new("http://localhost:8000");
        assert_eq!(api.require_session().unwrap_err(), ApiError::Unauthorized);
    }
}
