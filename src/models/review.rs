// src/models/review.rs
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use wasm_bindgen::JsValue;

use crate::models::reaction::ReactionSummary;

/// Opaque identifier of a review, never validated client-side.
///
/// Click handlers may pass a number or a string and the request body has to
/// carry the same JSON type back, so `"007"` and `7` stay distinct. Both
/// variants hold the id as JavaScript renders it into a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReviewId {
    Number(String),
    Text(String),
}

impl ReviewId {
    pub fn new(id: impl Into<String>) -> Self {
        ReviewId::Text(id.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            ReviewId::Number(text) | ReviewId::Text(text) => text,
        }
    }

    /// Converts whatever a click handler passed in, rendering it the way a
    /// template literal would (`1e21` becomes `"1e+21"`, `undefined` becomes
    /// `"undefined"`).
    pub fn from_js(value: &JsValue) -> Self {
        if let Some(text) = value.as_string() {
            return ReviewId::Text(text);
        }
        let rendered = String::from(js_sys::JsString::from("").concat(value));
        if value.as_f64().is_some() {
            ReviewId::Number(rendered)
        } else {
            ReviewId::Text(rendered)
        }
    }

    /// JSON form used in request bodies, same type as the caller passed.
    /// Non-finite numbers serialize as `null`, like `JSON.stringify`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ReviewId::Number(text) => serde_json::from_str::<serde_json::Number>(text)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            ReviewId::Text(text) => serde_json::Value::from(text.clone()),
        }
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<i64> for ReviewId {
    fn from(id: i64) -> Self {
        ReviewId::Number(id.to_string())
    }
}

impl From<&str> for ReviewId {
    fn from(id: &str) -> Self {
        ReviewId::Text(id.to_string())
    }
}

impl Serialize for ReviewId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ReviewId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => ReviewId::Number(n.to_string()),
            RawId::Text(s) => ReviewId::Text(s),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ReviewId,        // ID of the review reactions are applied to
    pub author: String,      // Critic who wrote the review
    pub content: String,     // Content of the review
    #[serde(default)]
    pub reactions: ReactionSummary,
}
