use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::A;

use crate::api::use_api;
use crate::components::TextField;
use crate::models::{prepend, Customer, CustomerDraft};
use crate::notify::use_notifier;
use crate::session::{login_path, use_auth};

#[component]
pub fn CustomersPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let notifier = use_notifier();
    let (customers, set_customers) = create_signal(Vec::<Customer>::new());

    // Customer records are private to signed-in users.
    create_effect(move |_| {
        if !auth.is_signed_in() {
            set_customers.set(Vec::new());
            return;
        }
        let client = api.client();
        spawn_local(async move {
            match client.list_customers().await {
                Ok(list) => set_customers.set(list),
                Err(err) => notifier.error(&err),
            }
        });
    });

    let phone = create_rw_signal(String::new());
    let birth_date = create_rw_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let create_customer = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = CustomerDraft {
            phone: phone.get_untracked(),
            birth_date: birth_date.get_untracked(),
        };
        let customer = match draft.into_new_customer() {
            Ok(customer) => customer,
            Err(err) => {
                notifier.error(&err);
                return;
            }
        };
        set_submitting.set(true);
        let client = api.client();
        spawn_local(async move {
            match client.create_customer(&customer).await {
                Ok(created) => {
                    notifier.success("Customer profile saved.");
                    set_customers.update(|list| prepend(list, created));
                    phone.set(String::new());
                    birth_date.set(String::new());
                }
                Err(err) => notifier.error(&err),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="customers-page">
            <h1>"Customers"</h1>
            <Show
                when=move || auth.is_signed_in()
                fallback=|| {
                    view! {
                        <p>"Sign in to see customer profiles."</p>
                        <A href=login_path("/customers")>"Sign in"</A>
                    }
                }
            >
                <form class="customer-form" on:submit=create_customer>
                    <h3>"Create your customer profile"</h3>
                    <TextField label="Phone" value=phone input_type="tel" />
                    <TextField label="Birth date" value=birth_date input_type="date" />
                    <button type="submit" disabled=move || submitting.get()>"Save profile"</button>
                </form>
                <ul class="customers">
                    <For
                        each=move || customers.get()
                        key=|customer| customer.id
                        children=|customer| {
                            let born = customer
                                .birth_date
                                .map(|d| d.format("%Y-%m-%d").to_string())
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <li>
                                    {format!("#{} ", customer.id)}
                                    <span class="phone">{customer.phone}</span>
                                    " "
                                    <span class="born">{born}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
