//! The signed-in user's session: JWT pair, decoded claims, persistence in
//! `localStorage`, and the shared [`Auth`] handle components read it through.
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use leptos::logging::{log, warn};
use leptos::*;
use serde::Deserialize;
use serde_json::Value;

use crate::error::TokenError;
use crate::models::TokenPair;

/// Scheme the backend expects in the `Authorization` header.
pub const AUTH_SCHEME: &str = "JWT";

const ACCESS_KEY: &str = "carmarket.access";
const REFRESH_KEY: &str = "carmarket.refresh";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claims {
    pub user_id: i64,
    pub exp: Option<i64>,
}

#[derive(Deserialize)]
struct RawClaims {
    #[serde(default)]
    user_id: Option<Value>,
    #[serde(default)]
    exp: Option<i64>,
}

/// Reads the payload segment of a JWT. The signature is not checked; the
/// backend does that on every request.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let segments = token.trim().split('.').collect::<Vec<_>>();
    let [header, payload, signature] = segments.as_slice() else {
        return Err(TokenError::Segments);
    };
    if header.is_empty() || payload.is_empty() || signature.is_empty() {
        return Err(TokenError::Segments);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenError::Encoding)?;
    let raw: RawClaims =
        serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))?;

    // Newer token issuers serialize the id as a string.
    let user_id = match raw.user_id {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or(TokenError::MissingUser)?;

    Ok(Claims {
        user_id,
        exp: raw.exp,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access: String,
    pub refresh: Option<String>,
    pub claims: Claims,
}

impl Session {
    pub fn from_tokens(access: String, refresh: Option<String>) -> Result<Self, TokenError> {
        let claims = decode_claims(&access)?;
        Ok(Self {
            access,
            refresh,
            claims,
        })
    }

    pub fn from_pair(pair: TokenPair) -> Result<Self, TokenError> {
        Self::from_tokens(pair.access, pair.refresh)
    }

    pub fn user_id(&self) -> i64 {
        self.claims.user_id
    }

    /// Tokens without an `exp` claim never expire client-side.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.claims.exp.is_some_and(|exp| exp <= now_secs)
    }

    pub fn authorization(&self) -> String {
        format!("{} {}", AUTH_SCHEME, self.access)
    }
}

/// Sign-in page that returns to `next` afterwards.
pub fn login_path(next: &str) -> String {
    match next.trim() {
        "" | "/" | "/login" => "/login".to_string(),
        next => format!("/login?next={}", urlencoding::encode(next)),
    }
}

/// Browser persistence. Only call from the client (effects, event handlers).
pub mod storage {
    use super::*;

    fn local_storage() -> Option<web_sys::Storage> {
        gloo_utils::window().local_storage().ok().flatten()
    }

    fn now_secs() -> i64 {
        (js_sys::Date::now() / 1000.0) as i64
    }

    /// Restores a stored session, discarding it when malformed or expired.
    pub fn load() -> Option<Session> {
        let storage = local_storage()?;
        let access = storage.get_item(ACCESS_KEY).ok().flatten()?;
        let refresh = storage.get_item(REFRESH_KEY).ok().flatten();

        match Session::from_tokens(access, refresh) {
            Ok(session) if session.is_expired(now_secs()) => {
                log!("[AUTH] Stored session for user {} has expired", session.user_id());
                clear();
                None
            }
            Ok(session) => Some(session),
            Err(err) => {
                warn!("[AUTH] Discarding stored token: {}", err);
                clear();
                None
            }
        }
    }

    pub fn save(session: &Session) {
        let Some(storage) = local_storage() else {
            warn!("[AUTH] localStorage unavailable, session will not persist");
            return;
        };
        let _ = storage.set_item(ACCESS_KEY, &session.access);
        match &session.refresh {
            Some(refresh) => {
                let _ = storage.set_item(REFRESH_KEY, refresh);
            }
            None => {
                let _ = storage.remove_item(REFRESH_KEY);
            }
        }
    }

    pub fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_KEY);
            let _ = storage.remove_item(REFRESH_KEY);
        }
    }
}

/// Shared session value, provided once by `App`.
#[derive(Clone, Copy)]
pub struct Auth {
    session: RwSignal<Option<Session>>,
}

impl Auth {
    pub fn new() -> Self {
        Self {
            session: create_rw_signal(None),
        }
    }

    /// Provides the handle and restores any stored session once mounted in
    /// the browser. Effects do not run during server rendering.
    pub fn provide() -> Self {
        let auth = Self::new();
        provide_context(auth);
        create_effect(move |_| {
            if let Some(session) = storage::load() {
                log!("[AUTH] Restored session for user {}", session.user_id());
                auth.session.set(Some(session));
            }
        });
        auth
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn session_untracked(&self) -> Option<Session> {
        self.session.get_untracked()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session.with(|s| s.as_ref().map(Session::user_id))
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn sign_in(&self, session: Session) {
        log!("[AUTH] Signed in as user {}", session.user_id());
        storage::save(&session);
        self.session.set(Some(session));
    }

    pub fn sign_out(&self) {
        log!("[AUTH] Signed out");
        storage::clear();
        self.session.set(None);
    }
}

impl Default for Auth {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> Auth {
    use_context::<Auth>().unwrap_or_else(|| {
        warn!("[AUTH] No auth context, treating user as signed out");
        Auth::new()
    })
}
