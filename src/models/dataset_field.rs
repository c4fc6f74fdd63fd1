use serde::{Deserialize, Serialize};

/// Data type of a field in a query result schema.
///
/// # Example JSON
///
/// ```json
/// "BIGINT"
/// "INTERVAL DAY TO SECOND"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetFieldType {
    #[serde(rename = "STRUCT")]
    Struct,
    #[serde(rename = "LIST")]
    List,
    #[serde(rename = "UNION")]
    Union,
    #[serde(rename = "INTEGER")]
    Integer,
    #[serde(rename = "BIGINT")]
    BigInt,
    #[serde(rename = "FLOAT")]
    Float,
    #[serde(rename = "DOUBLE")]
    Double,
    #[serde(rename = "VARCHAR")]
    Varchar,
    #[serde(rename = "VARBINARY")]
    Varbinary,
    #[serde(rename = "BOOLEAN")]
    Boolean,
    #[serde(rename = "DECIMAL")]
    Decimal,
    #[serde(rename = "TIME")]
    Time,
    #[serde(rename = "DATE")]
    Date,
    #[serde(rename = "TIMESTAMP")]
    Timestamp,
    #[serde(rename = "INTERVAL DAY TO SECOND")]
    IntervalDayToSecond,
    #[serde(rename = "INTERVAL YEAR TO MONTH")]
    IntervalYearToMonth,
}

/// Type descriptor for a schema field.
///
/// Structured types (`STRUCT`, `LIST`, `UNION`) carry a nested
/// sub-schema; `DECIMAL` carries precision and scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldType {
    pub name: DatasetFieldType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_schema: Option<Box<DatasetField>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

/// A column in a query result schema.
///
/// # Example JSON
///
/// ```json
/// {
///   "name": "fare_amount",
///   "type": { "name": "DECIMAL", "precision": 10, "scale": 2 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetField {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,
}
