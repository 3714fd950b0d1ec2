use http::StatusCode;
use leptos::*;
use leptos_router::{use_params_map, A};

use crate::api::use_api;
use crate::components::{CheckoutButton, ReviewForm, ReviewsList};
use crate::models::{prepend, Car, Review};
use crate::notify::use_notifier;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Load {
    Pending,
    Missing,
    Failed,
}

/// A single listing with its reviews. Car and reviews are fetched together.
#[component]
pub fn CarDetailPage() -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let params = use_params_map();
    let car_id = move || params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()));

    let (car, set_car) = create_signal(None::<Car>);
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());
    let (load, set_load) = create_signal(Load::Pending);

    create_effect(move |_| {
        let Some(id) = car_id() else {
            set_load.set(Load::Missing);
            return;
        };
        set_load.set(Load::Pending);
        set_car.set(None);
        set_reviews.set(Vec::new());
        let client = api.client();
        spawn_local(async move {
            match client.car_with_reviews(id).await {
                Ok((loaded, list)) => {
                    set_car.set(Some(loaded));
                    set_reviews.set(list);
                }
                Err(err) if err.status() == Some(StatusCode::NOT_FOUND) => {
                    set_load.set(Load::Missing);
                }
                Err(err) => {
                    notifier.error(&err);
                    set_load.set(Load::Failed);
                }
            }
        });
    });

    let add_review = Callback::new(move |review: Review| {
        set_reviews.update(|list| prepend(list, review));
    });

    view! {
        <section class="car-detail">
            {move || match car.get() {
                Some(car) => view! { <CarDetails car=car on_review=add_review reviews=reviews /> }.into_view(),
                None => match load.get() {
                    Load::Pending => view! { <p class="loading">"Loading..."</p> }.into_view(),
                    Load::Missing => view! {
                        <p>"This car could not be found."</p>
                        <A href="/">"Back to listings"</A>
                    }
                    .into_view(),
                    Load::Failed => view! {
                        <p>"The listing could not be loaded."</p>
                        <A href="/">"Back to listings"</A>
                    }
                    .into_view(),
                },
            }}
        </section>
    }
}

#[component]
fn CarDetails(car: Car, on_review: Callback<Review>, reviews: ReadSignal<Vec<Review>>) -> impl IntoView {
    let id = car.id;
    let title = car.title();
    let seller = if car.dealership.is_some() {
        "Sold by a dealership"
    } else {
        "Sold by a private owner"
    };

    view! {
        <article class="car">
            <h1>{title.clone()}</h1>
            {car.image.clone().map(|src| view! { <img class="car-photo" src=src alt=title /> })}
            <dl>
                <dt>"Price"</dt>
                <dd class="price">{car.display_price()}</dd>
                <dt>"Mileage"</dt>
                <dd>{format!("{} km", car.mileage)}</dd>
                <dt>"Seller"</dt>
                <dd>{seller}</dd>
            </dl>
            <p class="description">{car.description}</p>
            <CheckoutButton car_id=id label="Buy this car" />
        </article>
        <ReviewsList reviews=reviews />
        <ReviewForm car_id=id on_created=on_review />
    }
}
