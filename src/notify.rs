//! User-facing notifications.
//!
//! Every form in the app reports its outcome through here. Payloads come in
//! several shapes (plain strings, `{"message": ..}` / `{"detail": ..}` objects,
//! field-level validation bodies, [`ApiError`]s) and are normalized into one
//! display string plus a [`Severity`].
//!
//! At most one notification is visible at a time. Each carries its own id and
//! the auto-clear timer only clears the notification it was armed for.
use gloo_timers::callback::Timeout;
use leptos::logging::{log, warn};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::config::DEFAULT_NOTIFY_MS;
use crate::error::{ApiError, GENERIC_ERROR, NON_FIELD_ERRORS};
use crate::utils::leptos_owner::with_owner_safe;

/// Keys whose string value is the whole message.
const MESSAGE_KEYS: [&str; 3] = ["message", "detail", "error"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }

    fn fallback(self) -> Option<&'static str> {
        match self {
            Severity::Success => Some("Done."),
            Severity::Error => Some(GENERIC_ERROR),
            Severity::Info => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Payload<'a> {
    Text(&'a str),
    Json(&'a Value),
    Error(&'a ApiError),
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(text: &'a str) -> Self {
        Payload::Text(text)
    }
}

impl<'a> From<&'a String> for Payload<'a> {
    fn from(text: &'a String) -> Self {
        Payload::Text(text)
    }
}

impl<'a> From<&'a Value> for Payload<'a> {
    fn from(value: &'a Value) -> Self {
        Payload::Json(value)
    }
}

impl<'a> From<&'a ApiError> for Payload<'a> {
    fn from(err: &'a ApiError) -> Self {
        Payload::Error(err)
    }
}

/// Formats one `field: messages` line. Non-field errors carry no prefix.
pub(crate) fn field_line(field: &str, messages: &[String]) -> String {
    let joined = messages.join(" ");
    if field == NON_FIELD_ERRORS {
        joined
    } else {
        format!("{}: {}", field, joined)
    }
}

/// Extracts a display message from a JSON body, or `None` when the body holds
/// nothing worth showing.
pub fn message_from_json(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => non_empty(text),
        Value::Array(entries) => {
            let parts = entries
                .iter()
                .filter_map(message_from_json)
                .collect::<Vec<_>>();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        Value::Object(map) => {
            if let Some(text) = MESSAGE_KEYS
                .iter()
                .filter_map(|key| map.get(*key).and_then(Value::as_str))
                .find_map(non_empty)
            {
                return Some(text);
            }

            let mut fields = map.iter().collect::<Vec<_>>();
            fields.sort_by(|a, b| a.0.cmp(b.0));
            let lines = fields
                .into_iter()
                .filter_map(|(field, errors)| {
                    let messages = match errors {
                        Value::Array(entries) => entries
                            .iter()
                            .filter_map(message_from_json)
                            .collect::<Vec<_>>(),
                        Value::Object(_) => message_from_json(errors).into_iter().collect(),
                        _ => Vec::new(),
                    };
                    (!messages.is_empty()).then(|| field_line(field, &messages))
                })
                .collect::<Vec<_>>();
            (!lines.is_empty()).then(|| lines.join("; "))
        }
        _ => None,
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Produces the display string for `payload`, falling back to a generic
/// message for the severity. Empty info payloads produce nothing.
pub fn normalize(payload: Payload<'_>, severity: Severity) -> Option<String> {
    let message = match payload {
        Payload::Text(text) => non_empty(text),
        Payload::Json(value) => message_from_json(value),
        Payload::Error(err) => Some(err.display_message()),
    };
    message.or_else(|| severity.fallback().map(str::to_string))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn new<'a>(severity: Severity, payload: impl Into<Payload<'a>>) -> Option<Self> {
        normalize(payload.into(), severity).map(|message| Self {
            id: Uuid::new_v4(),
            severity,
            message,
        })
    }
}

/// Visible/hidden state of the single notification slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replaces whatever is visible.
    pub fn show(&mut self, notification: Notification) -> Uuid {
        let id = notification.id;
        self.current = Some(notification);
        id
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clears the notification only if it is still the one identified by `id`.
    pub fn expire(&mut self, id: Uuid) -> bool {
        match &self.current {
            Some(current) if current.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

/// Reactive handle to the notification slot, shared through context.
#[derive(Clone, Copy)]
pub struct Notifier {
    state: RwSignal<NotificationState>,
    duration_ms: u32,
    // Most notifications are raised after an await, where no owner is current.
    owner: Option<Owner>,
}

impl Notifier {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            state: create_rw_signal(NotificationState::default()),
            duration_ms,
            owner: Owner::current(),
        }
    }

    /// Creates a notifier and provides it to every descendant component.
    pub fn provide(duration_ms: u32) -> Self {
        let notifier = Self::new(duration_ms);
        provide_context(notifier);
        notifier
    }

    pub fn current(&self) -> Option<Notification> {
        self.state.with(|state| state.current().cloned())
    }

    pub fn success<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.notify(Severity::Success, payload);
    }

    pub fn info<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.notify(Severity::Info, payload);
    }

    pub fn error(&self, err: &ApiError) {
        warn!("[NOTIFY] {}", err);
        self.notify(Severity::Error, err);
    }

    pub fn notify<'a>(&self, severity: Severity, payload: impl Into<Payload<'a>>) {
        let Some(notification) = Notification::new(severity, payload) else {
            return;
        };
        log!(
            "[NOTIFY] {} {}: {}",
            notification.severity.as_str(),
            notification.id,
            notification.message
        );

        let Some(id) = self.state.try_update(|state| state.show(notification)) else {
            return;
        };

        let state = self.state;
        let owner = self.owner;
        Timeout::new(self.duration_ms, move || {
            with_owner_safe(owner, "notification expiry", || {
                state.try_update(|state| state.expire(id))
            });
        })
        .forget();
    }

    pub fn dismiss(&self) {
        self.state.update(NotificationState::dismiss);
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| {
        warn!("[NOTIFY] No notifier in context, messages will not be shared");
        Notifier::new(DEFAULT_NOTIFY_MS)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_strings_are_trimmed() {
        assert_eq!(
            normalize(Payload::Text("  Car created  "), Severity::Success),
            Some("Car created".to_string())
        );
    }

    #[test]
    fn message_and_detail_keys() {
        assert_eq!(
            message_from_json(&json!({"message": "Review submitted"})),
            Some("Review submitted".to_string())
        );
        assert_eq!(
            message_from_json(&json!({"detail": "Not found."})),
            Some("Not found.".to_string())
        );
        assert_eq!(
            message_from_json(&json!({"error": "Session expired"})),
            Some("Session expired".to_string())
        );
    }

    #[test]
    fn field_errors_are_sorted_and_prefixed() {
        let body = json!({
            "year": ["Ensure this value is greater than or equal to 1886."],
            "name": ["This field is required.", "Too short."],
            "non_field_errors": ["Car already listed."],
        });
        assert_eq!(
            message_from_json(&body),
            Some(
                "name: This field is required. Too short.; Car already listed.; \
                 year: Ensure this value is greater than or equal to 1886."
                    .to_string()
            )
        );
    }

    #[test]
    fn nested_field_errors_are_flattened() {
        let body = json!({"user": {"email": ["Enter a valid email address."]}});
        assert_eq!(
            message_from_json(&body),
            Some("user: email: Enter a valid email address.".to_string())
        );
    }

    #[test]
    fn created_objects_are_not_mistaken_for_errors() {
        let created = json!({"id": 3, "name": "Volvo", "country": "Sweden"});
        assert_eq!(message_from_json(&created), None);
        assert_eq!(
            normalize(Payload::Json(&created), Severity::Success),
            Some("Done.".to_string())
        );
    }

    #[test]
    fn fallbacks_per_severity() {
        assert_eq!(
            normalize(Payload::Json(&Value::Null), Severity::Error),
            Some(GENERIC_ERROR.to_string())
        );
        assert_eq!(normalize(Payload::Text(""), Severity::Info), None);
        assert!(Notification::new(Severity::Info, "   ").is_none());
    }

    #[test]
    fn string_arrays_are_joined() {
        assert_eq!(
            message_from_json(&json!(["First.", "", "Second."])),
            Some("First.; Second.".to_string())
        );
    }

    #[test]
    fn errors_use_their_display_message() {
        let err = ApiError::Unauthorized;
        assert_eq!(
            normalize(Payload::Error(&err), Severity::Error),
            Some("Please sign in to continue.".to_string())
        );
    }

    #[test]
    fn stale_expiry_keeps_newer_notification() {
        let mut state = NotificationState::default();
        let first = state.show(Notification::new(Severity::Info, "Saving").unwrap());
        let second = state.show(Notification::new(Severity::Success, "Saved").unwrap());

        assert!(!state.expire(first));
        assert_eq!(state.current().map(|n| n.id), Some(second));

        assert!(state.expire(second));
        assert!(state.current().is_none());
    }

    #[test]
    fn dismiss_hides_immediately() {
        let mut state = NotificationState::default();
        let id = state.show(Notification::new(Severity::Error, "Nope").unwrap());
        state.dismiss();
        assert!(state.current().is_none());
        assert!(!state.expire(id));
    }
}
