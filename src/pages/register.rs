use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api::use_api;
use crate::components::TextField;
use crate::models::Registration;
use crate::notify::use_notifier;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let first_name = create_rw_signal(String::new());
    let last_name = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let register = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let registration = Registration {
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
        };
        let navigate = navigate.clone();
        set_submitting.set(true);
        let client = api.client();
        spawn_local(async move {
            match client.register(&registration).await {
                Ok(user) => {
                    notifier.success(&format!(
                        "Account {} created. You can sign in now.",
                        user.username
                    ));
                    navigate("/login", Default::default());
                }
                Err(err) => notifier.error(&err),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="register-page">
            <h1>"Create an account"</h1>
            <form on:submit=register>
                <TextField label="Username" value=username />
                <TextField label="Email" value=email input_type="email" />
                <TextField label="First name" value=first_name />
                <TextField label="Last name" value=last_name />
                <TextField label="Password" value=password input_type="password" />
                <TextField label="Confirm password" value=confirm_password input_type="password" />
                <button type="submit" disabled=move || submitting.get()>"Register"</button>
            </form>
            <p>"Already registered? " <A href="/login">"Sign in"</A></p>
        </section>
    }
}
