use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    // Let the server answer with a real 404 for unknown routes.
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <A href="/">"Back to listings"</A>
        </section>
    }
}
