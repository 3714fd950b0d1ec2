use leptos::*;

use crate::api::use_api;
use crate::components::OwnerForm;
use crate::models::{prepend, CarOwner};
use crate::notify::use_notifier;
use crate::session::use_auth;
use crate::workflow::owner_for;

#[component]
pub fn CarOwnersPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let notifier = use_notifier();
    let (owners, set_owners) = create_signal(Vec::<CarOwner>::new());

    create_effect(move |_| {
        let client = api.client();
        spawn_local(async move {
            match client.list_car_owners().await {
                Ok(list) => set_owners.set(list),
                Err(err) => notifier.error(&err),
            }
        });
    });

    let can_register = move || match auth.user_id() {
        Some(user_id) => owners.with(|list| owner_for(user_id, list).is_none()),
        None => false,
    };
    let on_created = Callback::new(move |owner: CarOwner| {
        set_owners.update(|list| prepend(list, owner));
    });

    view! {
        <section class="owners-page">
            <h1>"Car owners"</h1>
            <Show when=can_register>
                <OwnerForm on_created=on_created />
            </Show>
            <table class="owners">
                <thead>
                    <tr>
                        <th>"Owner"</th>
                        <th>"Phone"</th>
                        <th>"Address"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || owners.get()
                        key=|owner| owner.id
                        children=|owner| {
                            view! {
                                <tr>
                                    <td>{format!("#{}", owner.id)}</td>
                                    <td>{owner.phone}</td>
                                    <td>{owner.address}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
