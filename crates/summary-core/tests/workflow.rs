//! Integration tests for the summary workflow.
//!
//! These tests exercise `SummaryService` end-to-end against a real temporary
//! directory: configure defaults, generate summaries, list them.

use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use summary_core::{Clock, Defaults, ServiceError, SummaryService, Workspace};
use tempfile::{tempdir, TempDir};

/// Clock that advances one second per reading.
struct SteppingClock {
    next: Mutex<NaiveDateTime>,
}

impl SteppingClock {
    fn starting_at(start: NaiveDateTime) -> Self {
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> NaiveDateTime {
        let mut next = self.next.lock().unwrap();
        let current = *next;
        *next = current + chrono::Duration::seconds(1);
        current
    }
}

fn service_in(dir: &TempDir) -> SummaryService {
    let start = NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(23, 59, 58)
        .unwrap();
    SummaryService::with_clock(
        Workspace {
            output_dir: dir.path().join("outputs"),
            config_file: dir.path().join("config.json"),
        },
        Arc::new(SteppingClock::starting_at(start)),
    )
}

#[test]
fn test_configure_generate_list_round() {
    // Arrange
    let dir = tempdir().unwrap();
    let service = service_in(&dir);

    // Act
    service
        .configure_defaults(Some("Ada Lovelace"), Some("Analytical Engine"))
        .unwrap();
    let first = service.generate(None, None).unwrap();
    let second = service.generate(Some("Grace Hopper"), Some("Compilers")).unwrap();
    let third = service.generate(None, Some("Notes")).unwrap();
    let listed = service.list().unwrap();

    // Assert
    assert_eq!(first.name, "Ada Lovelace");
    assert_eq!(first.topic, "Analytical Engine");
    assert_eq!(second.name, "Grace Hopper");
    assert_eq!(third.topic, "Notes");

    let names: Vec<&str> = listed.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "summary_Ada_Lovelace_2024-03-09_23-59-58.txt",
            "summary_Ada_Lovelace_2024-03-10_00-00-00.txt",
            "summary_Grace_Hopper_2024-03-09_23-59-59.txt",
        ]
    );
}

#[test]
fn test_generated_file_content_matches_returned_values() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir);

    let summary = service.generate(Some("Ada"), Some("Engines")).unwrap();
    let content = std::fs::read_to_string(&summary.path).unwrap();

    assert_eq!(
        content,
        "Simple Summary Generator\n\
         ==========================\n\
         \n\
         Name: Ada\n\
         Topic: Engines\n\
         Created: 2024-03-09T23:59:58\n"
    );
}

#[test]
fn test_config_file_keeps_unrelated_keys() {
    // Arrange: a config file with a key this program does not manage
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, r#"{"default_topic": "Old", "editor": "vim"}"#).unwrap();
    let service = service_in(&dir);

    // Act
    let saved = service.configure_defaults(Some("Ada"), None).unwrap();

    // Assert
    assert_eq!(saved.default_topic(), Some("Old"));
    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(on_disk["editor"], "vim");
    assert_eq!(on_disk["default_name"], "Ada");
}

#[test]
fn test_nothing_to_configure_is_reported() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir);

    let err = service.configure_defaults(None, None).unwrap_err();

    assert!(matches!(err, ServiceError::NothingToConfigure));
}

#[test]
fn test_load_config_on_fresh_workspace_is_empty() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir);

    assert_eq!(service.load_config().unwrap(), Defaults::default());
    assert!(service.list().unwrap().is_empty());
}

#[test]
fn test_non_string_default_does_not_block_generate_or_repair() {
    // Arrange: valid JSON, but the stored name is a number
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, r#"{"default_name": 42}"#).unwrap();
    let service = service_in(&dir);

    // Act: explicit values never consult the bad default
    let summary = service.generate(Some("Ada"), Some("Engines")).unwrap();

    // Assert
    assert_eq!(summary.name, "Ada");
    assert_eq!(summary.topic, "Engines");

    // Act: configuring a name replaces the bad value
    let repaired = service.configure_defaults(Some("Ada"), None).unwrap();

    // Assert
    assert_eq!(repaired.default_name(), Some("Ada"));
    assert_eq!(
        std::fs::read_to_string(&config_path).unwrap(),
        "{\n    \"default_name\": \"Ada\"\n}"
    );
}

#[test]
fn test_non_string_default_falls_back_when_generating() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"default_topic": ["x"]}"#).unwrap();
    let service = service_in(&dir);

    let summary = service.generate(None, None).unwrap();

    assert_eq!(summary.topic, "General");
}

#[test]
fn test_config_rewrite_keeps_key_order_and_nulls() {
    // Arrange
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, r#"{"zeta":1,"alpha":2,"default_topic":null}"#).unwrap();
    let service = service_in(&dir);

    // Act
    service.configure_defaults(Some("José"), None).unwrap();

    // Assert
    assert_eq!(
        std::fs::read_to_string(&config_path).unwrap(),
        "{\n    \"zeta\": 1,\n    \"alpha\": 2,\n    \"default_topic\": null,\n    \"default_name\": \"José\"\n}"
    );
}
