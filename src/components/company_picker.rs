/// Select boxes for the ids a listing references (company, dealership),
/// filled from the backend on mount.
use leptos::*;

use crate::api::use_api;
use crate::notify::use_notifier;

/// Plain `<select>` over `(id, label)` options bound to an optional id.
#[component]
pub fn IdSelect(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] options: Signal<Vec<(i64, String)>>,
    selected: RwSignal<Option<i64>>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select on:change=move |ev| {
                selected.set(event_target_value(&ev).parse::<i64>().ok());
            }>
                <option value="" selected=move || selected.get().is_none()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|(id, _)| *id
                    children=move |(id, name)| {
                        view! {
                            <option value=id.to_string() selected=move || selected.get() == Some(id)>
                                {name}
                            </option>
                        }
                    }
                />
            </select>
        </label>
    }
}

#[component]
pub fn CompanyPicker(selected: RwSignal<Option<i64>>) -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let (options, set_options) = create_signal(Vec::<(i64, String)>::new());

    create_effect(move |_| {
        let client = api.client();
        spawn_local(async move {
            match client.list_companies().await {
                Ok(companies) => set_options.set(
                    companies
                        .into_iter()
                        .map(|company| (company.id, company.name))
                        .collect(),
                ),
                Err(err) => notifier.error(&err),
            }
        });
    });

    view! {
        <IdSelect
            label="Company"
            placeholder="Select a company"
            options=options
            selected=selected
        />
    }
}

#[component]
pub fn DealershipPicker(selected: RwSignal<Option<i64>>) -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let (options, set_options) = create_signal(Vec::<(i64, String)>::new());

    create_effect(move |_| {
        let client = api.client();
        spawn_local(async move {
            match client.list_dealerships().await {
                Ok(dealerships) => set_options.set(
                    dealerships
                        .into_iter()
                        .map(|dealership| (dealership.id, dealership.name))
                        .collect(),
                ),
                Err(err) => notifier.error(&err),
            }
        });
    });

    view! {
        <IdSelect
            label="Dealership (optional)"
            placeholder="Sold privately"
            options=options
            selected=selected
        />
    }
}
