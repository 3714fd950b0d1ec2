use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::use_api;
use crate::components::TextField;
use crate::models::{prepend, Company, NewCompany};
use crate::notify::use_notifier;
use crate::session::use_auth;

#[component]
pub fn CompaniesPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let notifier = use_notifier();
    let (companies, set_companies) = create_signal(Vec::<Company>::new());

    create_effect(move |_| {
        let client = api.client();
        spawn_local(async move {
            match client.list_companies().await {
                Ok(list) => set_companies.set(list),
                Err(err) => notifier.error(&err),
            }
        });
    });

    let name = create_rw_signal(String::new());
    let country = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let create_company = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let company = NewCompany {
            name: name.get_untracked().trim().to_string(),
            country: country.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
        };
        set_submitting.set(true);
        let client = api.client();
        spawn_local(async move {
            match client.create_company(&company).await {
                Ok(created) => {
                    notifier.success(&format!("Added {}.", created.name));
                    set_companies.update(|list| prepend(list, created));
                    for field in [name, country, description] {
                        field.set(String::new());
                    }
                }
                Err(err) => notifier.error(&err),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="companies-page">
            <h1>"Companies"</h1>
            <Show when=move || auth.is_signed_in()>
                <form class="company-form" on:submit=create_company>
                    <h3>"Add a company"</h3>
                    <TextField label="Name" value=name />
                    <TextField label="Country" value=country />
                    <TextField label="Description" value=description multiline=true />
                    <button type="submit" disabled=move || submitting.get()>"Add company"</button>
                </form>
            </Show>
            <ul class="companies">
                <For
                    each=move || companies.get()
                    key=|company| company.id
                    children=|company| {
                        view! {
                            <li>
                                <strong>{company.name}</strong>
                                " "
                                <span class="country">{company.country}</span>
                                <p>{company.description}</p>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
