//! Main DataHub client with builder pattern.
//!
//! Provides the primary interface for connecting to a DataHub service
//! and running SQL queries as remote jobs.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::auth::AuthProvider;
use crate::backoff::{DEFAULT_INITIAL_DELAY, DEFAULT_MAX_DELAY};
use crate::error::{DataHubLinkError, Result};
use crate::jobs::JobsApi;
use crate::models::{Job, JobResult, JobStatus, QueryConfig};
use crate::poller::JobPoller;
use crate::query::QueryRunner;
use crate::transport::{HttpTransport, Transport};

/// Main DataHub client.
///
/// Use [`DataHubLinkClient::builder`] to construct instances with custom
/// configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use datahub_link::{DataHubLinkClient, QueryConfig};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DataHubLinkClient::builder()
///     .base_url("http://localhost:9047/api/v3")
///     .timeout(Duration::from_secs(30))
///     .build()?;
///
/// let config = QueryConfig::new().with_timeout(Duration::from_secs(60));
/// let result = client
///     .run_query::<serde_json::Value>("SELECT 1", &config)
///     .await?;
/// println!("Rows: {:?}", result.rows);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DataHubLinkClient {
    jobs: JobsApi,
    poller: JobPoller,
    runner: QueryRunner,
}

impl DataHubLinkClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> DataHubLinkClientBuilder {
        DataHubLinkClientBuilder::new()
    }

    /// Run a SQL query end to end: submit it, wait for the job to
    /// settle (bounded by `config.timeout`), and fetch the page of rows
    /// selected by `config.offset` / `config.limit`.
    pub async fn run_query<T: DeserializeOwned>(
        &self,
        sql: &str,
        config: &QueryConfig,
    ) -> Result<JobResult<T>> {
        self.runner.run(sql, config).await
    }

    /// Submit a query without waiting for it; returns the job handle.
    pub async fn submit_query(&self, sql: &str) -> Result<Job> {
        self.jobs.submit(sql).await
    }

    /// Fetch a single status snapshot for a job.
    pub async fn job_status(&self, job_id: &str) -> Result<JobStatus> {
        self.jobs.status(job_id).await
    }

    /// Poll a job until it reaches a terminal state and return that
    /// status. Dropping the returned future abandons the poll.
    pub async fn wait_for_job(&self, job_id: &str) -> Result<JobStatus> {
        self.poller.poll_until_terminal(job_id).await
    }

    /// Fetch one page of results for a completed job.
    pub async fn job_results<T: DeserializeOwned>(
        &self,
        job_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<JobResult<T>> {
        self.jobs.results(job_id, offset, limit).await
    }

    /// Cancel a job. The returned payload is service-defined JSON.
    pub async fn cancel_job(&self, job_id: &str) -> Result<JsonValue> {
        self.jobs
            .cancel(job_id)
            .await
            .map_err(DataHubLinkError::CancelRequestError)
    }
}

/// Builder for configuring [`DataHubLinkClient`] instances.
pub struct DataHubLinkClientBuilder {
    base_url: Option<String>,
    auth: AuthProvider,
    timeout: Duration,
    connect_timeout: Duration,
    poll_initial_delay: Duration,
    poll_max_delay: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl DataHubLinkClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            auth: AuthProvider::none(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            poll_initial_delay: DEFAULT_INITIAL_DELAY,
            poll_max_delay: DEFAULT_MAX_DELAY,
            transport: None,
        }
    }

    /// Set the base URL of the DataHub API, including the deployment's
    /// API prefix (e.g. `http://host:9047/api/v3`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set authentication provider directly
    pub fn auth(mut self, auth: AuthProvider) -> Self {
        self.auth = auth;
        self
    }

    /// Set Bearer token authentication
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthProvider::bearer_token(token.into());
        self
    }

    /// Set the per-request timeout (each status poll, submit, fetch and
    /// cancel request individually — not the whole query lifecycle; that
    /// is [`QueryConfig::timeout`]). Default: 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection timeout (TCP + TLS handshake).
    /// Default: 10 seconds.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the poll backoff window: delay starts at `initial` and
    /// doubles up to `max`. Defaults: 300 ms and 30 s.
    pub fn poll_backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.poll_initial_delay = initial;
        self.poll_max_delay = max;
        self
    }

    /// Replace the HTTP transport entirely. `base_url`, `auth` and the
    /// HTTP timeouts are ignored when a custom transport is supplied.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DataHubLinkClient> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => {
                let base_url = self.base_url.ok_or_else(|| {
                    DataHubLinkError::ConfigurationError("base_url is required".into())
                })?;

                // Pooled keep-alive connections; polls reuse one socket.
                let http_client = reqwest::Client::builder()
                    .timeout(self.timeout)
                    .connect_timeout(self.connect_timeout)
                    .pool_max_idle_per_host(10)
                    .pool_idle_timeout(Duration::from_secs(90))
                    .build()
                    .map_err(|e| DataHubLinkError::ConfigurationError(e.to_string()))?;

                debug!("[CLIENT] Connecting to {}", base_url);
                Arc::new(HttpTransport::new(base_url, http_client, self.auth))
            }
        };

        let jobs = JobsApi::new(transport);
        let poller = JobPoller::new(jobs.clone(), self.poll_initial_delay, self.poll_max_delay);
        let runner = QueryRunner::new(jobs.clone(), poller.clone());

        Ok(DataHubLinkClient {
            jobs,
            poller,
            runner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_requires_base_url() {
        let result = DataHubLinkClient::builder().build();
        assert!(matches!(
            result.err(),
            Some(DataHubLinkError::ConfigurationError(_))
        ));
    }

    #[tokio::test]
    async fn test_builder_with_base_url() {
        let client = DataHubLinkClient::builder()
            .base_url("http://localhost:9047/api/v3")
            .build();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_builder_with_auth_and_timeouts() {
        let client = DataHubLinkClient::builder()
            .base_url("http://localhost:9047/api/v3")
            .auth(AuthProvider::basic_auth("alice".into(), "secret".into()))
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .poll_backoff(Duration::from_millis(50), Duration::from_secs(1))
            .build();
        assert!(client.is_ok());
    }
}
