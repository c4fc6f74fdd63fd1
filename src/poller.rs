//! Job status polling.

use log::debug;
use std::time::Duration;

use crate::backoff::Backoff;
use crate::error::Result;
use crate::jobs::JobsApi;
use crate::models::JobStatus;

/// Drives status polling for submitted jobs.
///
/// Each poll issues one status request. A non-terminal state schedules
/// the next attempt after the next backoff delay; a fetch failure aborts
/// the poll immediately and is never treated as "not yet terminal".
#[derive(Clone)]
pub struct JobPoller {
    jobs: JobsApi,
    initial_delay: Duration,
    max_delay: Duration,
}

impl JobPoller {
    pub(crate) fn new(jobs: JobsApi, initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            jobs,
            initial_delay,
            max_delay,
        }
    }

    /// Fetch status until the job reaches COMPLETED, CANCELLED or FAILED.
    ///
    /// Resolves exactly once, with the first terminal status observed.
    /// Dropping the returned future abandons the poll: no further
    /// requests are scheduled, though a request already in flight is not
    /// recalled. Each call starts a fresh backoff sequence.
    pub async fn poll_until_terminal(&self, job_id: &str) -> Result<JobStatus> {
        let mut backoff = Backoff::new(self.initial_delay, self.max_delay);
        loop {
            let status = self.jobs.status(job_id).await?;
            if status.job_state.is_terminal() {
                debug!(
                    "[HUB_POLL] Job id={} reached terminal state {}",
                    job_id, status.job_state
                );
                return Ok(status);
            }
            // The backoff sequence is infinite; the fallback arm is never hit.
            let delay = backoff.next().unwrap_or(self.max_delay);
            debug!(
                "[HUB_POLL] Job id={} still {}, next poll in {:?}",
                job_id, status.job_state, delay
            );
            tokio::time::sleep(delay).await;
        }
    }
}
