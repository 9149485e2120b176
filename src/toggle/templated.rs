use leptos::logging::log;
use serde_json::json;

use super::{csrf_header, send};
use crate::api::{ReactionRequest, ReactionTransport};
use crate::config::ReactionConfig;
use crate::error::ReactionError;
use crate::models::reaction::{ReactionAction, ReactionKind};
use crate::models::review::ReviewId;

/// POST to the add/remove URL chosen by `action`, carrying the page-embedded
/// token and `{"review_id": ...}`.
pub fn templated_request(
    config: &ReactionConfig,
    review_id: &ReviewId,
    kind: ReactionKind,
    action: ReactionAction,
) -> Result<ReactionRequest, ReactionError> {
    Ok(ReactionRequest {
        url: config.template_url(kind, action)?.to_string(),
        csrf: csrf_header(&config.csrf_header, config.csrf_token.clone()),
        body: Some(json!({ "review_id": review_id.to_json() })),
    })
}

/// Adds or removes `kind` depending on `current_state` and calls `on_success`
/// (a page reload in production) once the server accepts. The response body
/// is ignored.
pub async fn toggle_templated<T, F>(
    transport: &T,
    config: &ReactionConfig,
    review_id: &ReviewId,
    kind: ReactionKind,
    current_state: &str,
    on_success: F,
) -> Result<ReactionAction, ReactionError>
where
    T: ReactionTransport + ?Sized,
    F: FnOnce() -> Result<(), ReactionError>,
{
    let action = ReactionAction::from_current_state(current_state);
    let request = templated_request(config, review_id, kind, action)?;
    send(transport, &request).await?;
    log!("[REACTION] {} {} on review {}", action.as_str(), kind, review_id);
    on_success()?;
    Ok(action)
}

/// `location.reload()`
pub fn reload_page() -> Result<(), ReactionError> {
    gloo_utils::window().location().reload().map_err(ReactionError::from_js)
}
