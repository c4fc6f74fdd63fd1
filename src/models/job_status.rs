use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Execution state reported for a job.
///
/// `Completed`, `Cancelled` and `Failed` are terminal; every other state
/// means the job is still moving through the execution pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    Pending,
    MetadataRetrieval,
    Planning,
    Queued,
    EngineStart,
    ExecutionPlanning,
    Starting,
    Running,
    Completed,
    Cancelled,
    Failed,
}

impl JobState {
    /// Whether no further state changes are expected for this job.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            JobState::Completed | JobState::Cancelled | JobState::Failed
        )
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobState::Pending => "PENDING",
            JobState::MetadataRetrieval => "METADATA_RETRIEVAL",
            JobState::Planning => "PLANNING",
            JobState::Queued => "QUEUED",
            JobState::EngineStart => "ENGINE_START",
            JobState::ExecutionPlanning => "EXECUTION_PLANNING",
            JobState::Starting => "STARTING",
            JobState::Running => "RUNNING",
            JobState::Completed => "COMPLETED",
            JobState::Cancelled => "CANCELLED",
            JobState::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

/// Point-in-time snapshot of a job, as returned by the status endpoint.
///
/// Each poll supersedes the previous snapshot; only the most recent one
/// is ever inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub job_state: JobState,

    /// Origin of the query (UI run, JDBC, REST, ...). Passed through
    /// untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,

    /// Number of rows produced, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u64>,

    /// Reflection/acceleration details. Passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceleration: Option<JsonValue>,

    /// Failure description, set by the server for failed jobs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
