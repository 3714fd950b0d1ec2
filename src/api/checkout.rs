use leptos::logging::log;

use super::{path, ApiClient};
use crate::error::ApiError;
use crate::models::{CheckoutRequest, CheckoutSession, PaymentStatus};

impl ApiClient {
    /// Opens a payment session for a car and returns it. Callers redirect the
    /// browser to [`CheckoutSession::redirect_url`].
    pub async fn create_checkout_session(&self, car_id: i64) -> Result<CheckoutSession, ApiError> {
        self.require_session()?;
        let session: CheckoutSession = self
            .post(
                &path(&["store", "create-checkout-session"]),
                &CheckoutRequest { car_id },
            )
            .await?;
        log!("[CHECKOUT] Session {} opened for car {}", session.id, car_id);
        if session.redirect_url().is_none() {
            return Err(ApiError::Decode(format!(
                "checkout session {} has no payment url",
                session.id
            )));
        }
        Ok(session)
    }

    pub async fn verify_payment(&self, session_id: &str) -> Result<PaymentStatus, ApiError> {
        let session_id = session_id.trim();
        if session_id.is_empty() {
            let mut errors = crate::error::FieldErrors::new();
            errors.add("session_id", "Missing payment session.");
            return Err(ApiError::Validation(errors));
        }
        self.get(&path(&["store", "verify-payment", session_id])).await
    }
}
