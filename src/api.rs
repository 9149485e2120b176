use gloo_net::http::Request;
use leptos::logging::log;

use crate::error::ReactionError;

/// One reaction POST, independent of how it gets sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionRequest {
    pub url: String,
    /// Header name and token; left off when the page has no token.
    pub csrf: Option<(String, String)>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Turns a non-2xx answer into [`ReactionError::Status`].
    pub fn error_for_status(self) -> Result<Self, ReactionError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ReactionError::Status {
                status: self.status,
                status_text: self.status_text,
            })
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait ReactionTransport {
    async fn post(&self, request: &ReactionRequest) -> Result<TransportResponse, ReactionError>;
}

/// `window.fetch` through gloo-net.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl ReactionTransport for FetchTransport {
    async fn post(&self, request: &ReactionRequest) -> Result<TransportResponse, ReactionError> {
        let mut builder = Request::post(&request.url).header("Content-Type", "application/json");
        if let Some((header, token)) = &request.csrf {
            builder = builder.header(header, token);
        }

        let prepared = match &request.body {
            Some(body) => builder.json(body)?,
            None => builder.build()?,
        };

        log!("[API] POST {}", request.url);
        let response = prepared.send().await?;
        let status = response.status();
        let status_text = response.status_text();
        // error bodies are never read
        let body = if response.ok() { response.text().await? } else { String::new() };
        log!("[API] {} answered {} {}", request.url, status, status_text);

        Ok(TransportResponse { status, status_text, body })
    }
}
