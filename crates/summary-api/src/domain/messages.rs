//! JSON request and response bodies for the HTTP API.
//!
//! # Routes
//!
//! | Method | Path         | Request body         | Response body           |
//! |--------|--------------|----------------------|-------------------------|
//! | GET    | `/health`    | (none)               | [`HealthResponse`]      |
//! | GET    | `/summaries` | (none)               | [`SummaryListResponse`] |
//! | POST   | `/generate`  | [`NameTopicRequest`] | [`GenerateResponse`]    |
//! | POST   | `/config`    | [`NameTopicRequest`] | [`ConfigResponse`]      |
//!
//! Failures use [`ErrorResponse`]: `{"error": "..."}`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use summary_core::{Defaults, SummaryEntry};

/// Optional `name` / `topic` pair accepted by `/generate` and `/config`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTopicRequest {
    pub name: Option<String>,
    pub topic: Option<String>,
}

impl NameTopicRequest {
    /// Parses a request body leniently.
    ///
    /// An empty body, invalid JSON, or a JSON value that is not an object all
    /// yield an empty request.  A `name` or `topic` that is not a string is
    /// ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use summary_api::domain::NameTopicRequest;
    ///
    /// let req = NameTopicRequest::from_body(br#"{"name": "Ada", "topic": 7}"#);
    /// assert_eq!(req.name.as_deref(), Some("Ada"));
    /// assert_eq!(req.topic, None);
    ///
    /// assert_eq!(NameTopicRequest::from_body(b"not json"), NameTopicRequest::default());
    /// ```
    pub fn from_body(body: &[u8]) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };
        let field = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            name: field("name"),
            topic: field("topic"),
        }
    }
}

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// `GET /summaries`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryListResponse {
    pub count: usize,
    pub summaries: Vec<SummaryEntry>,
}

impl From<Vec<SummaryEntry>> for SummaryListResponse {
    fn from(summaries: Vec<SummaryEntry>) -> Self {
        Self {
            count: summaries.len(),
            summaries,
        }
    }
}

/// `POST /generate` (201 Created)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub message: String,
    pub name: String,
    pub topic: String,
    pub path: PathBuf,
}

/// `POST /config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub message: String,
    pub config: Defaults,
}

/// Body of every 4xx/5xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
