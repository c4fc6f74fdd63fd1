//! Wire-level operations on the job endpoints.
//!
//! One method per endpoint, each issuing exactly one request. Retry and
//! lifecycle policy live in the poller and query runner above this layer.

use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

use crate::error::{ApiError, DataHubLinkError, Result};
use crate::models::{Job, JobResult, JobStatus};
use crate::transport::{decode_response, Transport};

/// Typed access to the four job endpoints.
#[derive(Clone)]
pub struct JobsApi {
    transport: Arc<dyn Transport>,
}

impl JobsApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&JsonValue>,
    ) -> std::result::Result<T, ApiError> {
        let response = self.transport.fetch(method, path, body).await?;
        decode_response(response)
    }

    /// Submit a SQL statement for execution. `POST /job/sql`.
    ///
    /// Fails with [`DataHubLinkError::SubmissionError`] without retrying;
    /// no job exists on the server in that case.
    pub async fn submit(&self, sql: &str) -> Result<Job> {
        let body = json!({ "sql": sql });
        let job: Job = self
            .request(Method::POST, "/job/sql", Some(&body))
            .await
            .map_err(DataHubLinkError::SubmissionError)?;
        debug!("[HUB_JOBS] Submitted query as job id={}", job.id);
        Ok(job)
    }

    /// Fetch the current status snapshot of a job. `GET /job/{jobId}`.
    pub async fn status(&self, job_id: &str) -> Result<JobStatus> {
        let status: JobStatus = self
            .request(Method::GET, &format!("/job/{}", job_id), None)
            .await
            .map_err(DataHubLinkError::StatusFetchError)?;
        debug!("[HUB_JOBS] Job id={} state={}", job_id, status.job_state);
        Ok(status)
    }

    /// Fetch one page of rows for a completed job.
    /// `GET /job/{jobId}/results?offset=&limit=`.
    ///
    /// Offset and limit pass through verbatim; no pagination looping is
    /// performed here — the caller requests subsequent pages itself.
    pub async fn results<T: DeserializeOwned>(
        &self,
        job_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<JobResult<T>> {
        let path = format!("/job/{}/results?offset={}&limit={}", job_id, offset, limit);
        let result: JobResult<T> = self
            .request(Method::GET, &path, None)
            .await
            .map_err(DataHubLinkError::ResultFetchError)?;
        debug!(
            "[HUB_JOBS] Fetched {} rows for job id={} (offset={})",
            result.rows.len(),
            job_id,
            offset
        );
        Ok(result)
    }

    /// Request cancellation of a job. `POST /job/{jobId}/cancel`.
    ///
    /// The success payload shape is service-defined, so it is returned as
    /// raw JSON. The error is left unwrapped for the caller to attach
    /// lifecycle meaning ([`DataHubLinkError::CancelRequestError`] for a
    /// direct cancel, the timeout variants inside the query runner).
    pub async fn cancel(&self, job_id: &str) -> std::result::Result<JsonValue, ApiError> {
        let payload = self
            .request(Method::POST, &format!("/job/{}/cancel", job_id), None)
            .await?;
        debug!("[HUB_JOBS] Cancel requested for job id={}", job_id);
        Ok(payload)
    }
}
