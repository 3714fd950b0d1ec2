use leptos::logging::warn;
use leptos::*;
use leptos_router::*;

use crate::api::use_api;
use crate::models::User;
use crate::notify::use_notifier;
use crate::session::use_auth;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let notifier = use_notifier();
    let navigate = use_navigate();
    let (user, set_user) = create_signal(None::<User>);

    // Refetch the profile whenever the session changes.
    create_effect(move |_| {
        if auth.session().is_none() {
            set_user.set(None);
            return;
        }
        let client = api.client();
        spawn_local(async move {
            match client.current_user().await {
                Ok(profile) => set_user.set(Some(profile)),
                Err(err) => warn!("[AUTH] Could not load profile: {}", err),
            }
        });
    });

    let sign_out = Callback::new(move |_: ()| {
        auth.sign_out();
        notifier.info("You have been signed out.");
        navigate("/", Default::default());
    });

    view! {
        <nav class="navbar">
            <A href="/" class="brand">"CarMarket"</A>
            <A href="/">"Cars"</A>
            <A href="/sell">"Sell a car"</A>
            <A href="/companies">"Companies"</A>
            <A href="/dealerships">"Dealerships"</A>
            <A href="/carowners">"Owners"</A>
            <A href="/customers">"Customers"</A>
            <span class="spacer"></span>
            <Show
                when=move || auth.is_signed_in()
                fallback=|| {
                    view! {
                        <A href="/login">"Sign in"</A>
                        <A href="/register">"Register"</A>
                    }
                }
            >
                <span class="current-user">
                    {move || user.get().map(|u| u.display_name()).unwrap_or_default()}
                </span>
                <button class="sign-out" on:click=move |_| sign_out.call(())>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}
