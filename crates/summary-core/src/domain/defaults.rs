//! The persisted defaults document.
//!
//! The config file is a small JSON object such as
//!
//! ```json
//! {
//!     "default_name": "Ada Lovelace",
//!     "default_topic": "Engines"
//! }
//! ```
//!
//! Either key may be absent.  The document is kept as the full JSON object
//! read from disk: keys this program does not know about, explicit `null`s
//! and the original key order are all written back unchanged, so a
//! hand-edited file never loses data when the defaults are updated.
//!
//! A stored default that is not a string (say `"default_name": 42`) is
//! ignored during resolution and replaced by the next `apply`.
//!
//! # Resolution order
//!
//! When a summary is generated, each of name and topic is taken from the
//! first non-empty source in this order:
//!
//! 1. the value supplied with the request;
//! 2. the stored default;
//! 3. the built-in fallback ([`FALLBACK_NAME`] / [`FALLBACK_TOPIC`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name used when neither the request nor the config supplies one.
pub const FALLBACK_NAME: &str = "Example User";

/// Topic used when neither the request nor the config supplies one.
pub const FALLBACK_TOPIC: &str = "General";

const NAME_KEY: &str = "default_name";
const TOPIC_KEY: &str = "default_topic";

/// The JSON object stored in the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Defaults {
    entries: Map<String, Value>,
}

impl Defaults {
    /// Stored default name, if it is a string.
    pub fn default_name(&self) -> Option<&str> {
        self.entries.get(NAME_KEY).and_then(Value::as_str)
    }

    /// Stored default topic, if it is a string.
    pub fn default_topic(&self) -> Option<&str> {
        self.entries.get(TOPIC_KEY).and_then(Value::as_str)
    }

    /// Resolves the name to use for a new summary.
    pub fn resolve_name(&self, requested: Option<&str>) -> String {
        first_non_empty(requested, self.default_name(), FALLBACK_NAME)
    }

    /// Resolves the topic to use for a new summary.
    pub fn resolve_topic(&self, requested: Option<&str>) -> String {
        first_non_empty(requested, self.default_topic(), FALLBACK_TOPIC)
    }

    /// Overwrites the stored defaults with any non-empty argument.
    ///
    /// Empty strings are treated the same as `None` and leave the existing
    /// value in place.  An existing key keeps its position in the document;
    /// a new one is appended.
    pub fn apply(&mut self, name: Option<&str>, topic: Option<&str>) {
        if let Some(name) = non_empty(name) {
            self.entries.insert(NAME_KEY.to_string(), Value::from(name));
        }
        if let Some(topic) = non_empty(topic) {
            self.entries.insert(TOPIC_KEY.to_string(), Value::from(topic));
        }
    }
}

/// Returns `true` when neither argument carries a usable value.
pub fn is_nothing_to_configure(name: Option<&str>, topic: Option<&str>) -> bool {
    non_empty(name).is_none() && non_empty(topic).is_none()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn first_non_empty(requested: Option<&str>, stored: Option<&str>, fallback: &str) -> String {
    non_empty(requested)
        .or_else(|| non_empty(stored))
        .unwrap_or(fallback)
        .to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
