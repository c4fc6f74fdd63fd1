use serde::{Deserialize, Serialize};

/// Handle for a submitted query job.
///
/// The id is an opaque identifier assigned by the service on submission;
/// every other job operation takes it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
}
