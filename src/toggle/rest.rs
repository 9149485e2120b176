use leptos::logging::log;

use super::{csrf_header, send};
use crate::api::{ReactionRequest, ReactionTransport};
use crate::config::ReactionConfig;
use crate::dom::{apply_summary, ReactionSurface};
use crate::error::ReactionError;
use crate::models::reaction::{ReactionKind, ReactionSummary};
use crate::models::review::ReviewId;

/// Bodyless POST to the review's reaction resource. `csrf_token` normally
/// comes from the CSRF cookie.
pub fn rest_request(
    config: &ReactionConfig,
    review_id: &ReviewId,
    kind: ReactionKind,
    csrf_token: Option<String>,
) -> ReactionRequest {
    ReactionRequest {
        url: config.rest_url(review_id, kind),
        csrf: csrf_header(&config.csrf_header, csrf_token),
        body: None,
    }
}

/// Toggles `kind` and returns the server's view of the review.
pub async fn request_summary<T: ReactionTransport + ?Sized>(
    transport: &T,
    config: &ReactionConfig,
    review_id: &ReviewId,
    kind: ReactionKind,
    csrf_token: Option<String>,
) -> Result<ReactionSummary, ReactionError> {
    let request = rest_request(config, review_id, kind, csrf_token);
    let response = send(transport, &request).await?;
    let summary: ReactionSummary = serde_json::from_str(&response.body)?;
    log!(
        "[REACTION] review {} {}: {} likes, {} dislikes",
        review_id, kind, summary.like_count, summary.dislike_count
    );
    Ok(summary)
}

/// Toggles `kind` and mirrors the result into `surface`. Nothing is written
/// unless the server answered 2xx with a well-formed summary.
pub async fn toggle_rest<T, S>(
    transport: &T,
    surface: &S,
    config: &ReactionConfig,
    review_id: &ReviewId,
    kind: ReactionKind,
    csrf_token: Option<String>,
) -> Result<ReactionSummary, ReactionError>
where
    T: ReactionTransport + ?Sized,
    S: ReactionSurface + ?Sized,
{
    let summary = request_summary(transport, config, review_id, kind, csrf_token).await?;
    apply_summary(surface, review_id, kind, &summary)?;
    Ok(summary)
}
