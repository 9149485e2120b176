//! Mirroring a [`ReactionSummary`] into the review's markup.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::ReactionError;
use crate::models::reaction::{ReactionKind, ReactionSummary};
use crate::models::review::ReviewId;

/// Element ids a rendered review exposes for its reaction widgets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewElementIds {
    review_id: String,
}

impl ReviewElementIds {
    pub fn new(review_id: &ReviewId) -> Self {
        Self { review_id: review_id.to_string() }
    }

    /// `like-count-{id}` / `dislike-count-{id}`
    pub fn count(&self, kind: ReactionKind) -> String {
        format!("{}-count-{}", kind, self.review_id)
    }

    /// `like-active-{id}` / `dislike-active-{id}`
    pub fn active(&self, kind: ReactionKind) -> String {
        format!("{}-active-{}", kind, self.review_id)
    }

    /// `like-inactive-{id}` / `dislike-inactive-{id}`
    pub fn inactive(&self, kind: ReactionKind) -> String {
        format!("{}-inactive-{}", kind, self.review_id)
    }
}

/// Where reaction results get written.
pub trait ReactionSurface {
    fn set_text(&self, id: &str, text: &str) -> Result<(), ReactionError>;

    /// Visible clears the inline `display`; hidden sets `display: none`.
    fn set_visible(&self, id: &str, visible: bool) -> Result<(), ReactionError>;
}

/// Writes the result of toggling `kind` on `review_id`: both counts, the
/// opposite kind reset to inactive, then the toggled kind per its flag.
pub fn apply_summary<S: ReactionSurface + ?Sized>(
    surface: &S,
    review_id: &ReviewId,
    kind: ReactionKind,
    summary: &ReactionSummary,
) -> Result<(), ReactionError> {
    let ids = ReviewElementIds::new(review_id);

    surface.set_text(&ids.count(ReactionKind::Like), &summary.like_count.to_string())?;
    surface.set_text(&ids.count(ReactionKind::Dislike), &summary.dislike_count.to_string())?;

    let other = kind.opposite();
    surface.set_visible(&ids.active(other), false)?;
    surface.set_visible(&ids.inactive(other), true)?;

    let active = summary.state_after(kind).is_active(kind);
    surface.set_visible(&ids.active(kind), active)?;
    surface.set_visible(&ids.inactive(kind), !active)?;
    Ok(())
}

/// The live page.
pub struct DocumentSurface {
    document: Document,
}

impl DocumentSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Result<HtmlElement, ReactionError> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| ReactionError::MissingElement(id.to_string()))
    }
}

impl Default for DocumentSurface {
    fn default() -> Self {
        Self::new(gloo_utils::document())
    }
}

impl ReactionSurface for DocumentSurface {
    fn set_text(&self, id: &str, text: &str) -> Result<(), ReactionError> {
        self.element(id)?.set_inner_text(text);
        Ok(())
    }

    fn set_visible(&self, id: &str, visible: bool) -> Result<(), ReactionError> {
        let style = self.element(id)?.style();
        if visible {
            style.remove_property("display").map_err(ReactionError::from_js)?;
        } else {
            style.set_property("display", "none").map_err(ReactionError::from_js)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for a rendered review.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub text: RefCell<HashMap<String, String>>,
        pub visible: RefCell<HashMap<String, bool>>,
        pub missing: Vec<String>,
    }

    impl RecordingSurface {
        pub fn is_untouched(&self) -> bool {
            self.text.borrow().is_empty() && self.visible.borrow().is_empty()
        }

        pub fn visible(&self, id: &str) -> Option<bool> {
            self.visible.borrow().get(id).copied()
        }

        pub fn text(&self, id: &str) -> Option<String> {
            self.text.borrow().get(id).cloned()
        }

        fn check(&self, id: &str) -> Result<(), ReactionError> {
            if self.missing.iter().any(|m| m == id) {
                return Err(ReactionError::MissingElement(id.to_string()));
            }
            Ok(())
        }
    }

    impl ReactionSurface for RecordingSurface {
        fn set_text(&self, id: &str, text: &str) -> Result<(), ReactionError> {
            self.check(id)?;
            self.text.borrow_mut().insert(id.to_string(), text.to_string());
            Ok(())
        }

        fn set_visible(&self, id: &str, visible: bool) -> Result<(), ReactionError> {
            self.check(id)?;
            self.visible.borrow_mut().insert(id.to_string(), visible);
            Ok(())
        }
    }

    fn summary(liked: bool, disliked: bool) -> ReactionSummary {
        ReactionSummary { like_count: 12, dislike_count: 3, liked, disliked }
    }

    #[test]
    fn element_ids_follow_markup_contract() {
        let ids = ReviewElementIds::new(&ReviewId::from(9));
        assert_eq!(ids.count(ReactionKind::Like), "like-count-9");
        assert_eq!(ids.count(ReactionKind::Dislike), "dislike-count-9");
        assert_eq!(ids.active(ReactionKind::Like), "like-active-9");
        assert_eq!(ids.inactive(ReactionKind::Like), "like-inactive-9");
        assert_eq!(ids.active(ReactionKind::Dislike), "dislike-active-9");
        assert_eq!(ids.inactive(ReactionKind::Dislike), "dislike-inactive-9");
    }

    #[test]
    fn liked_shows_like_active_and_resets_dislike() {
        let surface = RecordingSurface::default();
        apply_summary(&surface, &ReviewId::from(1), ReactionKind::Like, &summary(true, false)).unwrap();

        assert_eq!(surface.text("like-count-1").as_deref(), Some("12"));
        assert_eq!(surface.text("dislike-count-1").as_deref(), Some("3"));
        assert_eq!(surface.visible("like-active-1"), Some(true));
        assert_eq!(surface.visible("like-inactive-1"), Some(false));
        assert_eq!(surface.visible("dislike-active-1"), Some(false));
        assert_eq!(surface.visible("dislike-inactive-1"), Some(true));
    }

    #[test]
    fn unliked_shows_like_inactive() {
        let surface = RecordingSurface::default();
        apply_summary(&surface, &ReviewId::from(1), ReactionKind::Like, &summary(false, false)).unwrap();

        assert_eq!(surface.visible("like-active-1"), Some(false));
        assert_eq!(surface.visible("like-inactive-1"), Some(true));
    }

    #[test]
    fn dislike_toggle_mirrors_like_toggle() {
        let surface = RecordingSurface::default();
        // a stale `liked` flag must not light up the like icon on a dislike toggle
        apply_summary(&surface, &ReviewId::from(5), ReactionKind::Dislike, &summary(true, true)).unwrap();

        assert_eq!(surface.visible("dislike-active-5"), Some(true));
        assert_eq!(surface.visible("dislike-inactive-5"), Some(false));
        assert_eq!(surface.visible("like-active-5"), Some(false));
        assert_eq!(surface.visible("like-inactive-5"), Some(true));
    }

    #[test]
    fn undisliked_shows_dislike_inactive() {
        let surface = RecordingSurface::default();
        apply_summary(&surface, &ReviewId::from(6), ReactionKind::Dislike, &summary(false, false)).unwrap();

        assert_eq!(surface.visible("dislike-active-6"), Some(false));
        assert_eq!(surface.visible("dislike-inactive-6"), Some(true));
        assert_eq!(surface.visible("like-active-6"), Some(false));
        assert_eq!(surface.visible("like-inactive-6"), Some(true));
    }

    #[test]
    fn missing_element_is_reported() {
        let surface = RecordingSurface {
            missing: vec!["like-active-2".to_string()],
            ..Default::default()
        };
        let err = apply_summary(&surface, &ReviewId::from(2), ReactionKind::Like, &summary(true, false))
            .unwrap_err();
        assert!(matches!(err, ReactionError::MissingElement(id) if id == "like-active-2"));
        // counts were already written before the missing icon was reached
        assert_eq!(surface.text("like-count-2").as_deref(), Some("12"));
    }
}
