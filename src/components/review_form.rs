use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::use_api;
use crate::components::text_field::TextField;
use crate::models::review::{MAX_RATING, MIN_RATING};
use crate::models::{Review, ReviewDraft};
use crate::notify::use_notifier;
use crate::utils::leptos_owner::with_owner_safe;

#[component]
pub fn ReviewForm(car_id: i64, #[prop(into)] on_created: Callback<Review>) -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();

    let defaults = ReviewDraft::default();
    let name = create_rw_signal(defaults.name);
    let description = create_rw_signal(defaults.description);
    let rating = create_rw_signal(defaults.rating);
    let (submitting, set_submitting) = create_signal(false);
    let owner = Owner::current();

    let submit_review = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = ReviewDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            rating: rating.get_untracked(),
        };
        let review = match draft.into_new_review() {
            Ok(review) => review,
            Err(err) => {
                notifier.error(&err);
                return;
            }
        };

        set_submitting.set(true);
        let client = api.client();
        spawn_local(async move {
            match client.create_review(car_id, &review).await {
                Ok(created) => {
                    notifier.success("Thanks for your review!");
                    with_owner_safe(owner, "review created", move || {
                        name.set(String::new());
                        description.set(String::new());
                        rating.set(MAX_RATING.to_string());
                        on_created.call(created);
                    });
                }
                Err(err) => notifier.error(&err),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="review-form" on:submit=submit_review>
            <h3>"Write a review"</h3>
            <TextField label="Your name" value=name />
            <TextField label="Review" value=description multiline=true />
            <label class="field">
                <span class="field-label">"Rating"</span>
                <select
                    prop:value=move || rating.get()
                    on:change=move |e| rating.set(event_target_value(&e))
                >
                    {(MIN_RATING..=MAX_RATING)
                        .rev()
                        .map(|r| view! { <option value=r.to_string()>{r.to_string()}</option> })
                        .collect_view()}
                </select>
            </label>
            <button type="submit" disabled=move || submitting.get()>"Submit review"</button>
        </form>
    }
}
