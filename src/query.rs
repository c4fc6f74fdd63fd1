//! Query execution over the asynchronous job lifecycle.
//!
//! Submits a statement, waits for the resulting job to settle, and
//! fetches the first page of rows. A configured timeout races the poll;
//! when the timeout fires first the job is cancelled on the server.

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::error::{DataHubLinkError, Result};
use crate::jobs::JobsApi;
use crate::models::{JobResult, JobState, JobStatus, QueryConfig};
use crate::poller::JobPoller;

/// Runs queries end to end: submit → poll/timeout race → results.
#[derive(Clone)]
pub struct QueryRunner {
    jobs: JobsApi,
    poller: JobPoller,
}

impl QueryRunner {
    pub(crate) fn new(jobs: JobsApi, poller: JobPoller) -> Self {
        Self { jobs, poller }
    }

    /// Run `sql` to completion and return one page of rows.
    ///
    /// Exactly one of the following happens per call: the job completes
    /// and its results are fetched, the job settles in a non-completed
    /// terminal state and the matching error is returned, or the timeout
    /// fires and the job is cancelled on the server. The loser of the
    /// poll/timeout race is dropped; nothing further is scheduled for it.
    pub async fn run<T: DeserializeOwned>(
        &self,
        sql: &str,
        config: &QueryConfig,
    ) -> Result<JobResult<T>> {
        if config.limit == 0 {
            return Err(DataHubLinkError::ConfigurationError(
                "limit must be positive".to_string(),
            ));
        }

        let job = self.jobs.submit(sql).await?;
        debug!(
            "[HUB_QUERY] Running job id={} timeout={:?} offset={} limit={}",
            job.id, config.timeout, config.offset, config.limit
        );

        let status = match config.timeout {
            Some(timeout) => {
                let result = tokio::select! {
                    // Poll the status branch first so a terminal status
                    // that is ready at the deadline still wins the race.
                    biased;
                    status = self.poller.poll_until_terminal(&job.id) => status,
                    _ = tokio::time::sleep(timeout) => {
                        warn!(
                            "[HUB_QUERY] Job id={} timed out after {:?}, cancelling",
                            job.id, timeout
                        );
                        return match self.jobs.cancel(&job.id).await {
                            Ok(_) => Err(DataHubLinkError::QueryTimeout(timeout)),
                            Err(source) => Err(DataHubLinkError::QueryTimeoutCancelUnrecoverable {
                                timeout,
                                source,
                            }),
                        };
                    }
                };
                result?
            }
            // No deadline: the timer is never armed.
            None => self.poller.poll_until_terminal(&job.id).await?,
        };

        self.settle::<T>(&job.id, status, config).await
    }

    /// Map a terminal status to its outcome: fetch results for a
    /// completed job, fail otherwise.
    async fn settle<T: DeserializeOwned>(
        &self,
        job_id: &str,
        status: JobStatus,
        config: &QueryConfig,
    ) -> Result<JobResult<T>> {
        match status.job_state {
            JobState::Completed => self.jobs.results(job_id, config.offset, config.limit).await,
            JobState::Cancelled => Err(DataHubLinkError::JobCancelled),
            state => match status.error_message {
                Some(message) => Err(DataHubLinkError::RemoteJobError(message)),
                None => Err(DataHubLinkError::JobFailed(state)),
            },
        }
    }
}
