//! Page-supplied configuration.
//!
//! Server templates render a JSON blob into
//! `<script type="application/json" id="review-reactions-config">`; every
//! field has a default so pages only spell out what differs.

use std::collections::HashMap;

use leptos::logging::{error, log};
use serde::Deserialize;

use crate::error::ReactionError;
use crate::models::reaction::{ReactionAction, ReactionKind};
use crate::models::review::{Review, ReviewId};

pub const CONFIG_ELEMENT_ID: &str = "review-reactions-config";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReactionConfig {
    /// Prefix of the REST endpoints, without trailing slash.
    pub base_path: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    /// Token embedded at render time, used by the templated endpoints.
    pub csrf_token: Option<String>,
    /// Templated endpoint paths keyed by URL name (`add_like`, ...).
    pub urls: HashMap<String, String>,
    pub reviews: Vec<Review>,
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            base_path: "/reviews".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            csrf_token: None,
            urls: HashMap::new(),
            reviews: Vec::new(),
        }
    }
}

impl ReactionConfig {
    pub fn from_json(json: &str) -> Result<Self, ReactionError> {
        serde_json::from_str(json).map_err(|e| ReactionError::Config(e.to_string()))
    }

    /// Reads the embedded config element. A page without one gets the
    /// defaults; a broken one is logged and also falls back to defaults.
    pub fn from_document() -> Self {
        let text = gloo_utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        let Some(text) = text else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => {
                log!("[CONFIG] Loaded reaction config ({} urls, {} reviews)", config.urls.len(), config.reviews.len());
                config
            }
            Err(err) => {
                error!("[CONFIG] {}", err);
                Self::default()
            }
        }
    }

    /// `POST` target of the REST toggle, e.g. `/reviews/42/like/`.
    pub fn rest_url(&self, review_id: &ReviewId, kind: ReactionKind) -> String {
        format!("{}/{}/{}/", self.base_path.trim_end_matches('/'), review_id, kind)
    }

    pub fn template_url(
        &self,
        kind: ReactionKind,
        action: ReactionAction,
    ) -> Result<&str, ReactionError> {
        let name = action.url_name(kind);
        self.urls
            .get(&name)
            .map(String::as_str)
            .ok_or(ReactionError::MissingEndpoint(name))
    }
}
