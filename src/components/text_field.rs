use leptos::*;

/// Labelled input bound to a signal. Set `multiline` for a textarea.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let handle_input = move |e: web_sys::Event| value.set(event_target_value(&e));

    let input = if multiline {
        view! {
            <textarea
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=handle_input
            />
        }
        .into_view()
    } else {
        view! {
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=handle_input
            />
        }
        .into_view()
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            {input}
        </label>
    }
}
