use leptos::logging::{error, log};
use leptos::*;
use leptos_router::{use_location, use_navigate};

use crate::api::use_api;
use crate::error::ApiError;
use crate::notify::use_notifier;
use crate::session::{login_path, use_auth};
use crate::workflow::GateError;

/// Starts a checkout for `car_id` and sends the browser to the payment page.
/// An optional `gate` blocks the checkout while it holds an error.
#[component]
pub fn CheckoutButton(
    car_id: i64,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] gate: Option<Signal<Result<(), GateError>>>,
) -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let notifier = use_notifier();
    let navigate = use_navigate();
    let location = use_location();
    let (pending, set_pending) = create_signal(false);
    let label = label.unwrap_or_else(|| "Pay now".to_string());

    let start_checkout = move |_| {
        if pending.get_untracked() {
            return;
        }
        if !auth.is_signed_in() {
            notifier.error(&ApiError::Unauthorized);
            let here = location.pathname.get_untracked();
            navigate(&login_path(&here), Default::default());
            return;
        }
        if let Some(Err(gate)) = gate.map(|gate| gate.get_untracked()) {
            notifier.error(&ApiError::from(gate));
            return;
        }

        set_pending.set(true);
        let client = api.client();
        spawn_local(async move {
            match client.create_checkout_session(car_id).await {
                Ok(session) => {
                    notifier.info("Redirecting to the payment page...");
                    if let Some(url) = session.redirect_url() {
                        log!("[CHECKOUT] Redirecting to {}", url);
                        if let Err(err) = window().location().set_href(url) {
                            error!("[CHECKOUT] Redirect failed: {:?}", err);
                            notifier.error(&ApiError::Network("redirect failed".into()));
                            set_pending.set(false);
                        }
                    }
                }
                Err(err) => {
                    notifier.error(&err);
                    set_pending.set(false);
                }
            }
        });
    };

    view! {
        <button class="checkout" disabled=move || pending.get() on:click=start_checkout>
            {move || if pending.get() { "Starting checkout...".to_string() } else { label.clone() }}
        </button>
    }
}
