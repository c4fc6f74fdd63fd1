use std::time::Duration;

/// Default page size for result retrieval.
const DEFAULT_LIMIT: u64 = 100;

/// Per-query execution options.
///
/// `timeout` bounds the whole submit/poll/fetch lifecycle; `None` waits
/// for the job indefinitely. `offset` and `limit` select the result page
/// fetched once the job completes.
///
/// # Example
///
/// ```rust
/// use datahub_link::QueryConfig;
/// use std::time::Duration;
///
/// let config = QueryConfig::new()
///     .with_timeout(Duration::from_secs(30))
///     .with_offset(200)
///     .with_limit(50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Overall deadline for the query run.
    /// Default: None — no deadline, the run waits for a terminal state.
    pub timeout: Option<Duration>,

    /// Index of the first row to fetch. Default: 0.
    pub offset: u64,

    /// Maximum number of rows in the fetched page. Must be positive.
    /// Default: 100.
    pub limit: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QueryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overall deadline for the query run.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the index of the first row to fetch.
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the page size for result retrieval.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }
}
