//! Entry points for inline click handlers, e.g.
//! `onclick="toggleLike(42)"` or `onclick="toggleLikeTemplated(42, 'true')"`.
//!
//! Each returns a `Promise` resolving to `true` once the reaction was
//! applied (or the reload requested) and `false` after a logged failure.
//! The promise never rejects.

use js_sys::Promise;
use leptos::logging::error;
use paste::paste;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use super::rest::toggle_rest;
use super::templated::{reload_page, toggle_templated};
use crate::api::FetchTransport;
use crate::config::ReactionConfig;
use crate::dom::DocumentSurface;
use crate::error::ReactionError;
use crate::models::reaction::ReactionKind;
use crate::models::review::ReviewId;
use crate::utils::cookies::document_cookie;

fn rest_toggle(review_id: JsValue, kind: ReactionKind) -> Promise {
    let review_id = ReviewId::from_js(&review_id);
    future_to_promise(async move {
        let config = ReactionConfig::from_document();
        let csrf_token = document_cookie(&config.csrf_cookie);
        let surface = DocumentSurface::default();

        let result = toggle_rest(&FetchTransport, &surface, &config, &review_id, kind, csrf_token).await;
        if let Err(err) = &result {
            error!("[REACTION] There was a problem with the fetch operation: {}", err);
        }
        Ok(JsValue::from_bool(result.is_ok()))
    })
}

fn templated_toggle(review_id: JsValue, kind: ReactionKind, current_state: String) -> Promise {
    let review_id = ReviewId::from_js(&review_id);
    future_to_promise(async move {
        let config = ReactionConfig::from_document();

        let result = toggle_templated(&FetchTransport, &config, &review_id, kind, &current_state, reload_page).await;
        match &result {
            Ok(_) => {}
            Err(err @ ReactionError::Status { .. }) => error!("[REACTION] Error toggling {}: {}", kind, err),
            Err(err) => error!("[REACTION] Error: {}", err),
        }
        Ok(JsValue::from_bool(result.is_ok()))
    })
}

macro_rules! reaction_exports {
    ($($kind:ident => $variant:ident),* $(,)?) => {
        paste! {
            $(
                #[wasm_bindgen(js_name = [<toggle $variant>])]
                pub fn [<toggle_ $kind>](review_id: JsValue) -> Promise {
                    rest_toggle(review_id, ReactionKind::$variant)
                }

                #[wasm_bindgen(js_name = [<toggle $variant Templated>])]
                pub fn [<toggle_ $kind _templated>](review_id: JsValue, current_state: String) -> Promise {
                    templated_toggle(review_id, ReactionKind::$variant, current_state)
                }
            )*
        }
    };
}

reaction_exports!(like => Like, dislike => Dislike);
