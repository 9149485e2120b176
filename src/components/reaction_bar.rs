/// Like/dislike controls for one review.
/// Renders from a summary signal and re-renders when a toggle returns,
/// using the same element ids as server-rendered review markup.
use std::rc::Rc;

use leptos::logging::error;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::FetchTransport;
use crate::config::ReactionConfig;
use crate::dom::ReviewElementIds;
use crate::models::reaction::{ReactionKind, ReactionSummary};
use crate::models::review::ReviewId;
use crate::toggle::rest::request_summary;
use crate::utils::cookies::document_cookie;
use crate::utils::leptos_owner::with_owner_safe;

fn display(visible: bool) -> Option<&'static str> {
    (!visible).then_some("none")
}

#[component]
pub fn ReactionBar(
    review_id: ReviewId,
    #[prop(optional)] summary: ReactionSummary,
) -> impl IntoView {
    let ids = ReviewElementIds::new(&review_id);
    // shared by every bar, cloned per click as a refcount bump
    let config = store_value(use_context::<Rc<ReactionConfig>>().unwrap_or_default());
    let review_id = store_value(review_id);
    let owner = Owner::current();

    let (reaction_state, set_reaction_state) = create_signal(summary.state());
    let (summary, set_summary) = create_signal(summary);
    // one request at a time per review
    let (pending, set_pending) = create_signal(false);

    let toggle = move |kind: ReactionKind| {
        if pending.get_untracked() {
            return;
        }
        set_pending.set(true);

        let config = config.get_value();
        let review_id = review_id.get_value();
        spawn_local(async move {
            let csrf_token = document_cookie(&config.csrf_cookie);
            let result = request_summary(&FetchTransport, &config, &review_id, kind, csrf_token).await;

            with_owner_safe(owner, "reaction bar response", move || {
                match result {
                    Ok(next) => {
                        set_reaction_state.set(next.state_after(kind));
                        set_summary.set(next);
                    }
                    Err(err) => {
                        error!("[REACTION] There was a problem with the fetch operation: {}", err);
                    }
                }
                set_pending.set(false);
            });
        });
    };

    let active = move |kind: ReactionKind| reaction_state.get().is_active(kind);

    view! {
        <div class="reactions">
            <button
                class="reaction-like"
                disabled=move || pending.get()
                on:click=move |_| toggle(ReactionKind::Like)
            >
                <span id=ids.active(ReactionKind::Like) style:display=move || display(active(ReactionKind::Like))>
                    { "\u{2605}" }
                </span>
                <span id=ids.inactive(ReactionKind::Like) style:display=move || display(!active(ReactionKind::Like))>
                    { "\u{2606}" }
                </span>
                <span id=ids.count(ReactionKind::Like)>
                    {move || summary.with(|s| s.like_count)}
                </span>
            </button>
            <button
                class="reaction-dislike"
                disabled=move || pending.get()
                on:click=move |_| toggle(ReactionKind::Dislike)
            >
                <span id=ids.active(ReactionKind::Dislike) style:display=move || display(active(ReactionKind::Dislike))>
                    { "\u{25BC}" }
                </span>
                <span id=ids.inactive(ReactionKind::Dislike) style:display=move || display(!active(ReactionKind::Dislike))>
                    { "\u{25BD}" }
                </span>
                <span id=ids.count(ReactionKind::Dislike)>
                    {move || summary.with(|s| s.dislike_count)}
                </span>
            </button>
        </div>
    }
}
