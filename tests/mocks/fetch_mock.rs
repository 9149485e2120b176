use wasm_bindgen::prelude::*;

/// This module provides a mock implementation of `window.fetch` so the
/// reaction toggles can be exercised without a server.

#[wasm_bindgen(inline_js = r#"
export function install_fetch_mock(status, statusText, body) {
    if (!window.__realFetch) {
        window.__realFetch = window.fetch;
    }
    window.__fetchCalls = [];
    window.fetch = async function(input, init) {
        const request = new Request(input, init);
        const sent = await request.text();
        window.__fetchCalls.push({
            path: new URL(request.url).pathname,
            method: request.method,
            csrf: request.headers.get("X-CSRFToken"),
            contentType: request.headers.get("Content-Type"),
            body: sent,
        });
        console.log("[MOCK FETCH]", request.method, request.url, "->", status);
        return new Response(status === 204 ? null : body, { status: status, statusText: statusText });
    };
    return true;
}

export function restore_fetch() {
    if (window.__realFetch) {
        window.fetch = window.__realFetch;
        delete window.__realFetch;
    }
    window.__fetchCalls = [];
}

export function fetch_calls() {
    return JSON.stringify(window.__fetchCalls || []);
}
"#)]
extern "C" {
    fn install_fetch_mock(status: u16, status_text: &str, body: &str) -> bool;
    fn restore_fetch();
    fn fetch_calls() -> String;
}

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FetchCall {
    pub path: String,
    pub method: String,
    pub csrf: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

/// Every subsequent fetch answers with the given status and body.
pub fn setup_fetch_mock(status: u16, status_text: &str, body: &str) -> bool {
    install_fetch_mock(status, status_text, body)
}

pub fn teardown_fetch_mock() {
    restore_fetch();
}

pub fn recorded_calls() -> Vec<FetchCall> {
    serde_json::from_str(&fetch_calls()).unwrap_or_default()
}
