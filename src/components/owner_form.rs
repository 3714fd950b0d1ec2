use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::use_api;
use crate::components::text_field::TextField;
use crate::error::ApiError;
use crate::models::{CarOwner, NewCarOwner};
use crate::notify::use_notifier;
use crate::utils::leptos_owner::with_owner_safe;
use crate::workflow::GateError;

/// "Become a car owner" form for the signed-in user.
#[component]
pub fn OwnerForm(
    #[prop(into)] on_created: Callback<CarOwner>,
    #[prop(optional, into)] gate: Option<Signal<Result<(), GateError>>>,
) -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let phone = create_rw_signal(String::new());
    let address = create_rw_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let owner = Owner::current();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Some(Err(gate)) = gate.map(|gate| gate.get_untracked()) {
            notifier.error(&ApiError::from(gate));
            return;
        }

        let profile = NewCarOwner {
            phone: phone.get_untracked().trim().to_string(),
            address: address.get_untracked().trim().to_string(),
        };
        set_submitting.set(true);
        let client = api.client();
        spawn_local(async move {
            match client.create_car_owner(&profile).await {
                Ok(created) => {
                    notifier.success("You are now a car owner.");
                    with_owner_safe(owner, "owner created", move || {
                        phone.set(String::new());
                        address.set(String::new());
                        on_created.call(created);
                    });
                }
                Err(err) => notifier.error(&err),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="owner-form" on:submit=handle_submit>
            <h3>"Become a car owner"</h3>
            <TextField label="Phone" value=phone input_type="tel" />
            <TextField label="Address" value=address />
            <button type="submit" disabled=move || submitting.get()>
                "Register as owner"
            </button>
        </form>
    }
}
