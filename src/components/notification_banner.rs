use leptos::*;

use crate::notify::use_notifier;

/// Shows the current notification, if any, with a dismiss button.
#[component]
pub fn NotificationBanner() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        {move || {
            notifier.current().map(|notification| {
                let severity = notification.severity.as_str();
                view! {
                    <div
                        class=format!("notification notification-{}", severity)
                        role="status"
                        data-severity=severity
                    >
                        <span class="notification-message">{notification.message}</span>
                        <button
                            class="notification-dismiss"
                            aria-label="Dismiss"
                            on:click=move |_| notifier.dismiss()
                        >
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
