use serde_json::Value;
use wasm_bindgen::prelude::*;

/// Replaces `window.fetch` with a table of canned answers so the API client
/// can be exercised without a backend.
///
/// Routes are keyed by `"METHOD /path?query"`. Unknown routes answer 404 with
/// a DRF-style `detail` body.
#[wasm_bindgen(inline_js = r#"
export function install_fetch_mock(routes_json) {
    const routes = JSON.parse(routes_json);
    window.__fetchCalls = [];
    window.fetch = async function(input, init) {
        const isString = typeof input === "string";
        const rawUrl = isString ? input : input.url;
        const method = ((init && init.method) || (isString ? "GET" : input.method) || "GET").toUpperCase();
        const headers = isString ? new Headers((init && init.headers) || {}) : input.headers;
        const url = new URL(rawUrl, window.location.origin);
        const key = method + " " + url.pathname + url.search;

        let body = null;
        if (!isString) {
            body = await input.clone().text();
        } else if (init && typeof init.body === "string") {
            body = init.body;
        }
        window.__fetchCalls.push({
            method: method,
            path: url.pathname + url.search,
            authorization: headers.get("Authorization"),
            body: body ? JSON.parse(body) : null,
        });
        console.log("[MOCK FETCH]", key);

        const route = routes[key];
        if (!route) {
            return new Response(JSON.stringify({ detail: "Not found." }), {
                status: 404,
                headers: { "Content-Type": "application/json" },
            });
        }
        const payload = route.status === 204 ? null : JSON.stringify(route.body);
        return new Response(payload, {
            status: route.status,
            headers: { "Content-Type": "application/json" },
        });
    };
    return true;
}

export function fetch_call_count() {
    return (window.__fetchCalls || []).length;
}

export function last_fetch_call() {
    const calls = window.__fetchCalls || [];
    return calls.length ? JSON.stringify(calls[calls.length - 1]) : "";
}
"#)]
extern "C" {
    fn install_fetch_mock(routes_json: &str) -> bool;
    fn fetch_call_count() -> u32;
    fn last_fetch_call() -> String;
}

/// `routes` maps `"METHOD /path"` to `{"status": u16, "body": ..}`.
pub fn setup_fetch_mock(routes: Value) -> bool {
    install_fetch_mock(&routes.to_string())
}

pub fn call_count() -> u32 {
    fetch_call_count()
}

/// The most recent request as `{method, path, authorization, body}`.
pub fn last_call() -> Option<Value> {
    let raw = last_fetch_call();
    if raw.is_empty() {
        None
    } else {
        serde_json::from_str(&raw).ok()
    }
}
