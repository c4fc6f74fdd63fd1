use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::dataset_field::DatasetField;

/// One page of rows from a completed job.
///
/// Holds exactly the page requested via offset/limit; fetching the next
/// page is a separate request. `row_count` is the total number of rows
/// the job produced, not the page size.
///
/// Rows deserialize into any `T` the caller picks; the default keeps
/// them as raw JSON values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResult<T = JsonValue> {
    /// Total number of rows produced by the job.
    pub row_count: u64,

    /// Ordered column descriptors for the rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schema: Vec<DatasetField>,

    /// The rows in this page, in result order.
    pub rows: Vec<T>,
}

impl<T> JobResult<T> {
    /// Get column names from the schema, in schema order.
    pub fn column_names(&self) -> Vec<&str> {
        self.schema.iter().map(|field| field.name.as_str()).collect()
    }
}
