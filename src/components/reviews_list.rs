use leptos::*;

use crate::models::review::{average_rating, stars};
use crate::models::Review;

#[component]
pub fn ReviewsList(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    let average = move || {
        reviews.with(|r| match average_rating(r) {
            Some(avg) => format!("{:.1} / 5 from {} review(s)", avg, r.len()),
            None => "No reviews yet.".to_string(),
        })
    };

    view! {
        <section class="reviews">
            <h3>"Reviews"</h3>
            <p class="average-rating">{average}</p>
            <ul>
                <For
                    each=move || reviews.get()
                    key=|review| review.id
                    children=|review| {
                        view! {
                            <li class="review">
                                <span class="stars" title=format!("{} / 5", review.rating)>
                                    {stars(review.rating)}
                                </span>
                                <strong>{review.name}</strong>
                                {review
                                    .date
                                    .map(|date| view! { <time>{date.format("%b %-d, %Y").to_string()}</time> })}
                                <p>{review.description}</p>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
