//! The four API use cases.
//!
//! Each function is synchronous and framework-free so it can be unit-tested
//! directly; the HTTP layer runs them on Tokio's blocking pool.

use summary_core::{ServiceError, SummaryService};
use thiserror::Error;

use crate::domain::messages::{
    ConfigResponse, GenerateResponse, HealthResponse, NameTopicRequest, SummaryListResponse,
};

/// Message returned by `/config` when the request carries no usable value.
pub const NOTHING_TO_CONFIGURE: &str = "Nothing to configure. Provide 'name' and/or 'topic'.";

/// Error type for API use cases.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client sent a request that cannot be acted on.
    #[error("{0}")]
    BadRequest(String),

    /// A file-system or JSON failure inside the service.
    #[error(transparent)]
    Service(ServiceError),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NothingToConfigure => Self::BadRequest(NOTHING_TO_CONFIGURE.to_string()),
            other => Self::Service(other),
        }
    }
}

/// `GET /health`
pub fn health() -> HealthResponse {
    HealthResponse::ok()
}

/// `GET /summaries`
pub fn list_summaries(service: &SummaryService) -> Result<SummaryListResponse, ApiError> {
    Ok(service.list()?.into())
}

/// `POST /generate`
pub fn generate(
    service: &SummaryService,
    request: &NameTopicRequest,
) -> Result<GenerateResponse, ApiError> {
    let summary = service.generate(request.name.as_deref(), request.topic.as_deref())?;
    Ok(GenerateResponse {
        message: "summary created".to_string(),
        name: summary.name,
        topic: summary.topic,
        path: summary.path,
    })
}

/// `POST /config`
pub fn configure(
    service: &SummaryService,
    request: &NameTopicRequest,
) -> Result<ConfigResponse, ApiError> {
    let config = service.configure_defaults(request.name.as_deref(), request.topic.as_deref())?;
    Ok(ConfigResponse {
        message: "configuration saved".to_string(),
        config,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use summary_core::Workspace;
    use tempfile::{tempdir, TempDir};

    fn service_in(dir: &TempDir) -> SummaryService {
        SummaryService::new(Workspace {
            output_dir: dir.path().join("outputs"),
            config_file: dir.path().join("config.json"),
        })
    }

    fn request(name: Option<&str>, topic: Option<&str>) -> NameTopicRequest {
        NameTopicRequest {
            name: name.map(str::to_string),
            topic: topic.map(str::to_string),
        }
    }

    #[test]
    fn test_configure_without_values_is_bad_request() {
        // Arrange
        let dir = tempdir().unwrap();

        // Act
        let err = configure(&service_in(&dir), &request(None, None)).unwrap_err();

        // Assert
        assert!(matches!(&err, ApiError::BadRequest(msg) if msg == NOTHING_TO_CONFIGURE));
    }

    #[test]
    fn test_configure_returns_merged_config() {
        let dir = tempdir().unwrap();
        let service = service_in(&dir);

        configure(&service, &request(Some("Ada"), None)).unwrap();
        let response = configure(&service, &request(None, Some("Engines"))).unwrap();

        assert_eq!(response.message, "configuration saved");
        assert_eq!(response.config.default_name(), Some("Ada"));
        assert_eq!(response.config.default_topic(), Some("Engines"));
    }

    #[test]
    fn test_generate_fills_from_defaults() {
        let dir = tempdir().unwrap();
        let service = service_in(&dir);

        let response = generate(&service, &request(None, Some("Engines"))).unwrap();

        assert_eq!(response.message, "summary created");
        assert_eq!(response.name, "Example User");
        assert_eq!(response.topic, "Engines");
        assert!(response.path.is_absolute());
    }

    #[test]
    fn test_list_summaries_counts_generated_files() {
        let dir = tempdir().unwrap();
        let service = service_in(&dir);
        generate(&service, &request(Some("Ada"), None)).unwrap();

        let response = list_summaries(&service).unwrap();

        assert_eq!(response.count, 1);
        assert!(response.summaries[0].name.starts_with("summary_Ada_"));
    }

    #[test]
    fn test_service_failure_maps_to_service_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "garbage").unwrap();

        let err = generate(&service_in(&dir), &request(None, None)).unwrap_err();

        assert!(matches!(err, ApiError::Service(_)));
    }
}
