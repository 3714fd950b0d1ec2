use serde::{Deserialize, Serialize};

use crate::notify::Severity;

/// Body of `POST /store/create-checkout-session/`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub car_id: i64,
}

/// The payment provider's transaction handle, as relayed by the backend.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    #[serde(alias = "sessionId", alias = "session_id")]
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl CheckoutSession {
    /// Where to send the browser, if the backend gave a usable address.
    pub fn redirect_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| url.starts_with("https://") || url.starts_with("http://"))
    }
}

/// Answer of `GET /store/verify-payment/{id}/`. Some backends relay the
/// provider session as is, with both `status` and `payment_status` set.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PaymentStatus {
    fn statuses(&self) -> impl Iterator<Item = &str> {
        [&self.payment_status, &self.status]
            .into_iter()
            .filter_map(|s| s.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    }

    pub fn is_paid(&self) -> bool {
        self.statuses()
            .any(|s| s.eq_ignore_ascii_case("paid") || s.eq_ignore_ascii_case("complete"))
    }

    /// Severity and text shown on the payment return page.
    pub fn outcome(&self) -> (Severity, String) {
        let custom = self
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        if self.is_paid() {
            (
                Severity::Success,
                custom.unwrap_or_else(|| "Payment received. Thank you!".to_string()),
            )
        } else {
            (
                Severity::Info,
                custom.unwrap_or_else(|| match self.statuses().next() {
                    Some(status) => format!("Payment status: {}.", status),
                    None => "Payment is still being processed.".to_string(),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_aliases() {
        let session: CheckoutSession =
            serde_json::from_str(r#"{"sessionId": "cs_test_1", "url": "https://pay.example/cs_test_1"}"#)
                .unwrap();
        assert_eq!(session.id, "cs_test_1");
        assert_eq!(session.redirect_url(), Some("https://pay.example/cs_test_1"));
    }

    #[test]
    fn unusable_urls_are_refused() {
        let session = CheckoutSession {
            id: "cs".into(),
            url: Some("javascript:alert(1)".into()),
        };
        assert_eq!(session.redirect_url(), None);
        let session = CheckoutSession { id: "cs".into(), url: None };
        assert_eq!(session.redirect_url(), None);
    }

    #[test]
    fn payment_outcomes() {
        let paid: PaymentStatus = serde_json::from_str(r#"{"status": "PAID"}"#).unwrap();
        assert_eq!(paid.outcome().0, Severity::Success);

        let relayed: PaymentStatus =
            serde_json::from_str(r#"{"status": "open", "payment_status": "paid"}"#).unwrap();
        assert!(relayed.is_paid());

        let open = PaymentStatus {
            payment_status: Some("unpaid".into()),
            ..PaymentStatus::default()
        };
        assert_eq!(
            open.outcome(),
            (Severity::Info, "Payment status: unpaid.".to_string())
        );
        assert_eq!(
            PaymentStatus::default().outcome().1,
            "Payment is still being processed."
        );
    }
}
