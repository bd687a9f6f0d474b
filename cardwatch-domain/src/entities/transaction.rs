// Transaction entity
// One row of the transactions table, before and after the display transform.

use chrono::NaiveDateTime;
use clickhouse::Row;
use serde::{Deserialize, Serialize};

use crate::value_objects::Rgba;

/// Source row as materialized from the query. Every column arrives as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Row)]
pub struct RawTransaction {
    pub transaction_id: String,
    pub transaction_date: String,
    pub location: String,
    pub latitude: String,
    pub longitude: String,
}

/// Transaction with normalized date, numeric coordinates and derived columns.
/// Serializes with the upper-case column names the map layer binds to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub transaction_date: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub class: u8,
    pub probability: f64,
    pub result: String,
    pub color: Rgba,
    #[serde(skip)]
    pub normalized_at: NaiveDateTime,
}

/// Projection shown in the prediction table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PredictionRow {
    pub transaction_id: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub class: u8,
    pub probability: f64,
    pub result: String,
}

impl From<&TransactionRecord> for PredictionRow {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            transaction_id: record.transaction_id.clone(),
            location: record.location.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            class: record.class,
            probability: record.probability,
            result: record.result.clone(),
        }
    }
}
