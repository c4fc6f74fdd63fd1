//! # datahub-link: DataHub Query Client Library
//!
//! Async client for a DataHub SQL job service. Queries run as remote jobs:
//! the client submits a statement, polls the job until it settles, then pages
//! through the rows.
//!
//! ## Features
//!
//! - **Query Execution**: Submit SQL and await one page of results
//! - **Job Lifecycle**: Status polling with capped exponential backoff
//! - **Timeouts**: Per-query deadline with server-side job cancellation
//! - **Pagination**: Offset/limit result retrieval
//! - **Authentication**: HTTP Basic and Bearer token support
//! - **Connection Pooling**: Automatic HTTP connection reuse
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use datahub_link::{DataHubLinkClient, QueryConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DataHubLinkClient::builder()
//!         .base_url("http://localhost:9047/api/v3")
//!         .build()?;
//!
//!     let config = QueryConfig::new()
//!         .with_timeout(Duration::from_secs(60))
//!         .with_limit(50);
//!
//!     let result = client
//!         .run_query::<serde_json::Value>("SELECT * FROM samples.trips", &config)
//!         .await?;
//!     println!("{} of {} rows", result.rows.len(), result.row_count);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! ```rust,no_run
//! use datahub_link::{AuthProvider, DataHubLinkClient};
//!
//! # fn example() -> datahub_link::Result<()> {
//! // HTTP Basic Auth
//! let client = DataHubLinkClient::builder()
//!     .base_url("http://localhost:9047/api/v3")
//!     .auth(AuthProvider::basic_auth("alice".to_string(), "secret".to_string()))
//!     .build()?;
//!
//! // Bearer token
//! let client = DataHubLinkClient::builder()
//!     .base_url("http://localhost:9047/api/v3")
//!     .bearer_token("eyJhbGc...")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod backoff;
pub mod client;
pub mod error;
pub mod jobs;
pub mod models;
pub mod poller;
pub mod query;
pub mod transport;

// Re-export main types for convenience
pub use auth::AuthProvider;
pub use backoff::Backoff;
pub use client::{DataHubLinkClient, DataHubLinkClientBuilder};
pub use error::{ApiError, DataHubLinkError, Result};
pub use jobs::JobsApi;
pub use models::{
    DatasetField, DatasetFieldType, FieldType, Job, JobResult, JobState, JobStatus, QueryConfig,
};
pub use poller::JobPoller;
pub use query::QueryRunner;
pub use transport::{HttpTransport, RawResponse, Transport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
