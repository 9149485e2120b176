//! Like/dislike toggles.
//!
//! Two flavours share the same request plumbing:
//! - [`rest`] posts to `/reviews/{id}/{kind}/` and writes the returned
//!   counts and flags into the review markup;
//! - [`templated`] posts to add/remove URLs rendered into the page and
//!   reloads on success.
//!
//! [`exports`] makes both callable from page scripts.

pub mod exports;
pub mod rest;
pub mod templated;

use crate::api::{ReactionRequest, ReactionTransport, TransportResponse};
use crate::error::ReactionError;

/// Sends `request` and fails on anything outside 2xx.
async fn send<T: ReactionTransport + ?Sized>(
    transport: &T,
    request: &ReactionRequest,
) -> Result<TransportResponse, ReactionError> {
    transport.post(request).await?.error_for_status()
}

fn csrf_header(header: &str, token: Option<String>) -> Option<(String, String)> {
    token.map(|token| (header.to_string(), token))
}
