use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::*;

// ==================== JobState Tests ====================

#[test]
fn test_job_state_wire_names() {
    let state: JobState = serde_json::from_str(r#""METADATA_RETRIEVAL""#).unwrap();
    assert_eq!(state, JobState::MetadataRetrieval);

    let state: JobState = serde_json::from_str(r#""ENGINE_START""#).unwrap();
    assert_eq!(state, JobState::EngineStart);

    assert_eq!(
        serde_json::to_string(&JobState::ExecutionPlanning).unwrap(),
        r#""EXECUTION_PLANNING""#
    );
}

#[test]
fn test_job_state_terminal_set() {
    assert!(JobState::Completed.is_terminal());
    assert!(JobState::Cancelled.is_terminal());
    assert!(JobState::Failed.is_terminal());

    assert!(!JobState::Pending.is_terminal());
    assert!(!JobState::Queued.is_terminal());
    assert!(!JobState::Running.is_terminal());
}

#[test]
fn test_job_state_display_matches_wire_name() {
    assert_eq!(JobState::MetadataRetrieval.to_string(), "METADATA_RETRIEVAL");
    assert_eq!(JobState::Failed.to_string(), "FAILED");
    assert_eq!(JobState::Completed.to_string(), "COMPLETED");
}

// ==================== JobStatus Tests ====================

#[test]
fn test_job_status_deserializes_camel_case() {
    let status: JobStatus = serde_json::from_value(json!({
        "jobState": "RUNNING",
        "queryType": "REST",
        "startedAt": "2024-03-01T12:00:00.000Z",
        "rowCount": 1234
    }))
    .unwrap();

    assert_eq!(status.job_state, JobState::Running);
    assert_eq!(status.query_type.as_deref(), Some("REST"));
    assert!(status.started_at.is_some());
    assert!(status.ended_at.is_none());
    assert_eq!(status.row_count, Some(1234));
    assert!(status.error_message.is_none());
}

#[test]
fn test_job_status_minimal_body() {
    // Early polls only carry the state
    let status: JobStatus = serde_json::from_value(json!({ "jobState": "PENDING" })).unwrap();
    assert_eq!(status.job_state, JobState::Pending);
    assert!(status.query_type.is_none());
    assert!(status.acceleration.is_none());
}

#[test]
fn test_job_status_failed_with_message() {
    let status: JobStatus = serde_json::from_value(json!({
        "jobState": "FAILED",
        "errorMessage": "syntax error"
    }))
    .unwrap();
    assert_eq!(status.job_state, JobState::Failed);
    assert_eq!(status.error_message.as_deref(), Some("syntax error"));
}

// ==================== DatasetField Tests ====================

#[test]
fn test_dataset_field_simple_type() {
    let field: DatasetField = serde_json::from_value(json!({
        "name": "trip_count",
        "type": { "name": "BIGINT" }
    }))
    .unwrap();
    assert_eq!(field.name, "trip_count");
    assert_eq!(field.field_type.name, DatasetFieldType::BigInt);
    assert!(field.field_type.sub_schema.is_none());
}

#[test]
fn test_dataset_field_decimal_precision_scale() {
    let field: DatasetField = serde_json::from_value(json!({
        "name": "fare_amount",
        "type": { "name": "DECIMAL", "precision": 10, "scale": 2 }
    }))
    .unwrap();
    assert_eq!(field.field_type.name, DatasetFieldType::Decimal);
    assert_eq!(field.field_type.precision, Some(10));
    assert_eq!(field.field_type.scale, Some(2));
}

#[test]
fn test_dataset_field_recursive_sub_schema() {
    let field: DatasetField = serde_json::from_value(json!({
        "name": "pickups",
        "type": {
            "name": "LIST",
            "subSchema": {
                "name": "pickup",
                "type": { "name": "VARCHAR" }
            }
        }
    }))
    .unwrap();

    let sub = field.field_type.sub_schema.expect("sub-schema present");
    assert_eq!(sub.name, "pickup");
    assert_eq!(sub.field_type.name, DatasetFieldType::Varchar);
}

#[test]
fn test_dataset_field_interval_type_names() {
    let ty: DatasetFieldType = serde_json::from_str(r#""INTERVAL DAY TO SECOND""#).unwrap();
    assert_eq!(ty, DatasetFieldType::IntervalDayToSecond);
    assert_eq!(
        serde_json::to_string(&DatasetFieldType::IntervalYearToMonth).unwrap(),
        r#""INTERVAL YEAR TO MONTH""#
    );
}

// ==================== JobResult Tests ====================

#[test]
fn test_job_result_default_rows_are_json() {
    let result: JobResult = serde_json::from_value(json!({
        "rowCount": 2,
        "schema": [
            { "name": "id", "type": { "name": "BIGINT" } },
            { "name": "city", "type": { "name": "VARCHAR" } }
        ],
        "rows": [
            { "id": 1, "city": "Berlin" },
            { "id": 2, "city": "Oslo" }
        ]
    }))
    .unwrap();

    assert_eq!(result.row_count, 2);
    assert_eq!(result.column_names(), vec!["id", "city"]);
    assert_eq!(result.rows[1]["city"], "Oslo");
}

#[test]
fn test_job_result_typed_rows() {
    #[derive(Debug, Deserialize)]
    struct Trip {
        id: u64,
        city: String,
    }

    let result: JobResult<Trip> = serde_json::from_value(json!({
        "rowCount": 1,
        "rows": [ { "id": 7, "city": "Lima" } ]
    }))
    .unwrap();

    // schema may be omitted by the server for row-only responses
    assert!(result.schema.is_empty());
    assert_eq!(result.rows[0].id, 7);
    assert_eq!(result.rows[0].city, "Lima");
}

// ==================== QueryConfig Tests ====================

#[test]
fn test_query_config_defaults() {
    let config = QueryConfig::default();
    assert!(config.timeout.is_none(), "timeout should default to None (wait forever)");
    assert_eq!(config.offset, 0, "offset should default to 0");
    assert_eq!(config.limit, 100, "limit should default to 100");
}

#[test]
fn test_query_config_partial_override() {
    // Overriding one knob keeps the defaults for the others
    let config = QueryConfig::new().with_timeout(Duration::from_millis(500));
    assert_eq!(config.timeout, Some(Duration::from_millis(500)));
    assert_eq!(config.offset, 0);
    assert_eq!(config.limit, 100);
}

#[test]
fn test_query_config_builder_pattern() {
    let config = QueryConfig::new()
        .with_timeout(Duration::from_secs(10))
        .with_offset(200)
        .with_limit(50);
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    assert_eq!(config.offset, 200);
    assert_eq!(config.limit, 50);
}
