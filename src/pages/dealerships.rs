use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::use_api;
use crate::components::{CompanyPicker, TextField};
use crate::models::{prepend, Dealership, NewDealership};
use crate::notify::use_notifier;
use crate::session::use_auth;

#[component]
pub fn DealershipsPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let notifier = use_notifier();
    let (dealerships, set_dealerships) = create_signal(Vec::<Dealership>::new());

    create_effect(move |_| {
        let client = api.client();
        spawn_local(async move {
            match client.list_dealerships().await {
                Ok(list) => set_dealerships.set(list),
                Err(err) => notifier.error(&err),
            }
        });
    });

    let name = create_rw_signal(String::new());
    let address = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let company = create_rw_signal(None::<i64>);
    let (submitting, set_submitting) = create_signal(false);

    let create_dealership = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let dealership = NewDealership {
            name: name.get_untracked().trim().to_string(),
            address: address.get_untracked().trim().to_string(),
            phone: phone.get_untracked().trim().to_string(),
            company: company.get_untracked(),
        };
        set_submitting.set(true);
        let client = api.client();
        spawn_local(async move {
            match client.create_dealership(&dealership).await {
                Ok(created) => {
                    notifier.success(&format!("Added {}.", created.name));
                    set_dealerships.update(|list| prepend(list, created));
                    for field in [name, address, phone] {
                        field.set(String::new());
                    }
                    company.set(None);
                }
                Err(err) => notifier.error(&err),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="dealerships-page">
            <h1>"Dealerships"</h1>
            <Show when=move || auth.is_signed_in()>
                <form class="dealership-form" on:submit=create_dealership>
                    <h3>"Add a dealership"</h3>
                    <TextField label="Name" value=name />
                    <TextField label="Address" value=address />
                    <TextField label="Phone" value=phone input_type="tel" />
                    <CompanyPicker selected=company />
                    <button type="submit" disabled=move || submitting.get()>"Add dealership"</button>
                </form>
            </Show>
            <ul class="dealerships">
                <For
                    each=move || dealerships.get()
                    key=|dealership| dealership.id
                    children=|dealership| {
                        view! {
                            <li>
                                <strong>{dealership.name}</strong>
                                <span class="address">{dealership.address}</span>
                                <span class="phone">{dealership.phone}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
