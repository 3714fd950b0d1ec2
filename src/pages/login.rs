use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, use_query_map, A};

use crate::api::use_api;
use crate::components::TextField;
use crate::models::Credentials;
use crate::notify::use_notifier;
use crate::session::use_auth;

/// Only same-site paths are followed after signing in.
fn next_path(raw: Option<&String>) -> String {
    match raw {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.clone(),
        _ => "/".to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let notifier = use_notifier();
    let navigate = use_navigate();
    let query = use_query_map();

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let sign_in = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let credentials = Credentials {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let next = query.with_untracked(|q| next_path(q.get("next")));
        let navigate = navigate.clone();

        set_submitting.set(true);
        let client = api.client();
        spawn_local(async move {
            match client.login(&credentials).await {
                Ok(session) => {
                    auth.sign_in(session);
                    password.set(String::new());
                    notifier.success("Welcome back!");
                    navigate(&next, Default::default());
                }
                Err(err) => notifier.error(&err),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="login-page">
            <h1>"Sign in"</h1>
            <form on:submit=sign_in>
                <TextField label="Username" value=username />
                <TextField label="Password" value=password input_type="password" />
                <button type="submit" disabled=move || submitting.get()>"Sign in"</button>
            </form>
            <p>"No account yet? " <A href="/register">"Register"</A></p>
        </section>
    }
}
