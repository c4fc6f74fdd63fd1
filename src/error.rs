//! Error types for the datahub-link client.

use std::time::Duration;

use thiserror::Error;

use crate::models::JobState;

/// Result type for datahub-link operations
pub type Result<T> = std::result::Result<T, DataHubLinkError>;

/// Failure of a single API request, before any lifecycle meaning is
/// attached to it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect failure, timeout,
    /// protocol error).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status code. `message` is
    /// the `errorMessage` field of the body when present, otherwise the
    /// raw body text.
    #[error("server error (status {status_code}): {message}")]
    Server { status_code: u16, message: String },

    /// A success response carried a body that did not match the
    /// expected shape.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors surfaced by query execution and the job lifecycle.
#[derive(Debug, Error)]
pub enum DataHubLinkError {
    #[error("configuration error: {0}")]
    ConfigurationError(String),

    /// Query submission failed; no job was created.
    #[error("query submission failed: {0}")]
    SubmissionError(#[source] ApiError),

    /// A job status fetch failed. Never retried: the poll loop only
    /// repeats on a not-yet-terminal state.
    #[error("job status fetch failed: {0}")]
    StatusFetchError(#[source] ApiError),

    /// The job reached the CANCELLED state on the server.
    #[error("query job was cancelled")]
    JobCancelled,

    /// The job failed remotely and reported an error message.
    #[error("query job failed: {0}")]
    RemoteJobError(String),

    /// The job ended in a failure state without an error message.
    #[error("query job failed, status: {0}")]
    JobFailed(JobState),

    /// The configured timeout fired before the job settled; the job was
    /// cancelled on the server.
    #[error("query timed out after {0:?}")]
    QueryTimeout(Duration),

    /// The configured timeout fired and the cancel request itself
    /// failed. The remote job may still be running.
    #[error("query timed out after {timeout:?} but the job could not be cancelled: {source}")]
    QueryTimeoutCancelUnrecoverable {
        timeout: Duration,
        #[source]
        source: ApiError,
    },

    /// Fetching rows for a completed job failed.
    #[error("result fetch failed: {0}")]
    ResultFetchError(#[source] ApiError),

    /// An explicit cancel request failed.
    #[error("cancel request failed: {0}")]
    CancelRequestError(#[source] ApiError),
}

impl DataHubLinkError {
    /// Whether this failure leaves a job possibly still executing on the
    /// server. Callers should warn the user in that case, since the job
    /// keeps consuming remote resources until it finishes on its own.
    pub fn job_may_still_be_running(&self) -> bool {
        matches!(self, DataHubLinkError::QueryTimeoutCancelUnrecoverable { .. })
    }
}
