/// Listing cards for a set of cars. Each card links to the car's page and,
/// when `on_remove` is given, offers a remove button.
use leptos::*;
use leptos_router::A;

use crate::models::Car;

#[component]
pub fn CarsList(
    #[prop(into)] cars: Signal<Vec<Car>>,
    #[prop(optional, into)] on_remove: Option<Callback<i64>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || cars.with(|c| !c.is_empty())
            fallback=|| view! { <p class="empty">"No cars to show."</p> }
        >
            <ul class="cars">
                <For
                    each=move || cars.get()
                    key=|car| car.id
                    children=move |car| view! { <CarCard car=car on_remove=on_remove /> }
                />
            </ul>
        </Show>
    }
}

#[component]
fn CarCard(car: Car, on_remove: Option<Callback<i64>>) -> impl IntoView {
    let id = car.id;
    let title = car.title();

    view! {
        <li class="car-card">
            {car.image.clone().map(|src| view! { <img src=src alt=title.clone() /> })}
            <A href=format!("/cars/{}", id)>
                <strong>{title.clone()}</strong>
            </A>
            <span class="price">{car.display_price()}</span>
            <span class="mileage">{format!("{} km", car.mileage)}</span>
            {on_remove.map(|remove| {
                view! {
                    <button class="remove" on:click=move |_| remove.call(id)>
                        "Remove"
                    </button>
                }
            })}
        </li>
    }
}
