use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong between a click and the updated review.
#[derive(Debug, Error)]
pub enum ReactionError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// The server answered outside `200..=299`.
    #[error("{status_text}")]
    Status { status: u16, status_text: String },

    #[error("malformed reaction payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("no URL configured for '{0}'")]
    MissingEndpoint(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ReactionError {
    /// Browser APIs report failures as bare `JsValue`s.
    pub fn from_js(value: JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                js_sys::JSON::stringify(&value)
                    .ok()
                    .and_then(|s| s.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        ReactionError::Dom(text)
    }
}
