use std::panic;
use leptos::logging::log;

/// Sets up a panic hook that forwards to `console_error_panic_hook` and adds
/// context for the panics this app is prone to.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(move |panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A signal was read after its page was unmounted.");
            log!("[PANIC] Usually a response or timer finished after navigating away.");
        }

        let path = leptos::window().location().pathname().unwrap_or_default();
        log!("[PANIC] Route at time of panic: {}", path);
    }));
}

/// Call once from the client entry points before mounting.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook installed");
}
