//! Data models for the datahub-link client.
//!
//! Wire structures for job submission, status polling and result
//! retrieval, plus the per-query configuration.

pub mod dataset_field;
pub mod job;
pub mod job_result;
pub mod job_status;
pub mod query_config;

#[cfg(test)]
mod tests;

pub use dataset_field::{DatasetField, DatasetFieldType, FieldType};
pub use job::Job;
pub use job_result::JobResult;
pub use job_status::{JobState, JobStatus};
pub use query_config::QueryConfig;
