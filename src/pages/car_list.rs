use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_query_map;

use crate::api::use_api;
use crate::components::CarsList;
use crate::models::Car;
use crate::notify::use_notifier;

/// Marketplace front page: every listing, with the backend's search filter.
#[component]
pub fn CarListPage() -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let query = use_query_map();

    let initial = query.with_untracked(|q| q.get("search").cloned().unwrap_or_default());
    let search = create_rw_signal(initial.clone());
    let applied = create_rw_signal(initial);
    let (cars, set_cars) = create_signal(Vec::<Car>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        let term = applied.get();
        let client = api.client();
        set_loading.set(true);
        spawn_local(async move {
            match client.list_cars(Some(&term)).await {
                Ok(list) => set_cars.set(list),
                Err(err) => notifier.error(&err),
            }
            set_loading.set(false);
        });
    });

    let submit_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        applied.set(search.get_untracked().trim().to_string());
    };

    view! {
        <section class="car-list-page">
            <h1>"Cars for sale"</h1>
            <form class="search" on:submit=submit_search>
                <input
                    type="search"
                    placeholder="Search by make or model"
                    prop:value=move || search.get()
                    on:input=move |e| search.set(event_target_value(&e))
                />
                <button type="submit">"Search"</button>
            </form>
            <Show
                when=move || loading.get()
                fallback=move || view! { <CarsList cars=cars /> }
            >
                <p class="loading">"Loading cars..."</p>
            </Show>
        </section>
    }
}
