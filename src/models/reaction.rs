use std::fmt;

use serde::{Deserialize, Serialize};

/// Which reaction a toggle applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Dislike => "dislike",
        }
    }

    /// The kind a toggle of `self` clears on the server.
    pub fn opposite(self) -> Self {
        match self {
            ReactionKind::Like => ReactionKind::Dislike,
            ReactionKind::Dislike => ReactionKind::Like,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's standing on one review.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReactionState {
    Liked,
    Disliked,
    #[default]
    Neutral,
}

impl ReactionState {
    /// Whether the active icon of `kind` should be shown.
    pub fn is_active(self, kind: ReactionKind) -> bool {
        matches!(
            (self, kind),
            (ReactionState::Liked, ReactionKind::Like)
                | (ReactionState::Disliked, ReactionKind::Dislike)
        )
    }
}

/// Template-driven endpoints come in add/remove pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionAction {
    Add,
    Remove,
}

impl ReactionAction {
    /// Pages render the current state as the literal string `"true"` or
    /// `"false"`; only an exact `"true"` means the reaction is already set.
    pub fn from_current_state(current: &str) -> Self {
        if current == "true" {
            ReactionAction::Remove
        } else {
            ReactionAction::Add
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReactionAction::Add => "add",
            ReactionAction::Remove => "remove",
        }
    }

    /// URL name of the templated endpoint, e.g. `remove_dislike`.
    pub fn url_name(self, kind: ReactionKind) -> String {
        format!("{}_{}", self.as_str(), kind.as_str())
    }
}

/// Body returned by `POST /reviews/{id}/{kind}/`.
///
/// The like endpoint only reports `liked` and the dislike endpoint only
/// `disliked`, so a missing flag reads as `false`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionSummary {
    pub like_count: u64,
    pub dislike_count: u64,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub disliked: bool,
}

impl ReactionSummary {
    pub fn count(&self, kind: ReactionKind) -> u64 {
        match kind {
            ReactionKind::Like => self.like_count,
            ReactionKind::Dislike => self.dislike_count,
        }
    }

    /// State after toggling `kind`. The opposite reaction is always gone
    /// once the server has processed the toggle.
    pub fn state_after(&self, kind: ReactionKind) -> ReactionState {
        match kind {
            ReactionKind::Like if self.liked => ReactionState::Liked,
            ReactionKind::Dislike if self.disliked => ReactionState::Disliked,
            _ => ReactionState::Neutral,
        }
    }

    /// State as rendered on first load, when both flags are trusted.
    pub fn state(&self) -> ReactionState {
        if self.liked {
            ReactionState::Liked
        } else if self.disliked {
            ReactionState::Disliked
        } else {
            ReactionState::Neutral
        }
    }
}
