//! Return pages for the external payment provider.
use leptos::*;
use leptos_router::{use_query_map, A};

use crate::api::use_api;
use crate::notify::{use_notifier, Severity};

#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let query = use_query_map();
    let (status, set_status) = create_signal(None::<(Severity, String)>);

    create_effect(move |_| {
        let session_id = query.with(|q| q.get("session_id").cloned().unwrap_or_default());
        let client = api.client();
        spawn_local(async move {
            match client.verify_payment(&session_id).await {
                Ok(payment) => {
                    let (severity, message) = payment.outcome();
                    notifier.notify(severity, &message);
                    set_status.set(Some((severity, message)));
                }
                Err(err) => {
                    notifier.error(&err);
                    set_status.set(Some((Severity::Error, err.display_message())));
                }
            }
        });
    });

    view! {
        <section class="payment-page">
            <h1>"Payment"</h1>
            {move || match status.get() {
                None => view! { <p class="loading">"Confirming your payment..."</p> }.into_view(),
                Some((severity, message)) => view! {
                    <p class=format!("payment-{}", severity.as_str())>{message}</p>
                }
                .into_view(),
            }}
            <A href="/">"Back to listings"</A>
        </section>
    }
}

#[component]
pub fn PaymentCancelPage() -> impl IntoView {
    let notifier = use_notifier();
    create_effect(move |_| notifier.info("Payment cancelled. You have not been charged."));

    view! {
        <section class="payment-page">
            <h1>"Payment cancelled"</h1>
            <p>"Your listing or purchase is still waiting. You can try again at any time."</p>
            <A href="/sell">"Back to selling"</A>
            " "
            <A href="/">"Browse cars"</A>
        </section>
    }
}
