//! Reading cookies from `document.cookie`.

use std::borrow::Cow;

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Looks up `name` in a cookie string (`"a=1; b=2"`) and returns the
/// percent-decoded value of the first matching entry.
///
/// Values that do not decode to valid UTF-8 are returned as-is.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(|value| {
            urlencoding::decode(value)
                .unwrap_or(Cow::Borrowed(value))
                .into_owned()
        })
}

/// Same as [`get_cookie`] against the live document.
pub fn document_cookie(name: &str) -> Option<String> {
    let document = gloo_utils::document().dyn_into::<HtmlDocument>().ok()?;
    let cookies = document.cookie().ok()?;
    get_cookie(&cookies, name)
}
