/// Core data types for the air quality trends service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O — only types.

use serde::Serialize;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Measurement types
// ---------------------------------------------------------------------------

/// A single daily measurement from an OpenAQ sensor.
///
/// Corresponds to one entry in the `results[]` array of an OpenAQ v3
/// `/sensors/{id}/measurements/daily` response, enriched with the sensor id
/// from the enclosing request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub sensor_id: i64,
    pub date: String, // ISO 8601, e.g. "2024-01-01T00:00:00+00:00"
    pub parameter: String,
    pub value: f64,
    pub unit: String,
}

// ---------------------------------------------------------------------------
// Chart data types
// ---------------------------------------------------------------------------

/// One aggregated per-day entry of the wide chart table.
///
/// `values` holds one entry per parameter observed on that day. A parameter
/// absent from the map means "no data point" for that series on that date —
/// consumers must not substitute zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub date: String, // calendar day, "YYYY-MM-DD"
    pub values: HashMap<String, f64>,
}

/// Full output of one aggregation pass, ready for a time-series chart.
///
/// `rows` is sorted ascending by date. `parameters` lists distinct parameter
/// identifiers in order of first appearance in the input, one rendered series
/// per entry. `units` maps every parameter present in any row to the unit
/// string of the first input record bearing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub rows: Vec<ChartRow>,
    pub parameters: Vec<String>,
    pub units: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or aggregating air quality data.
#[derive(Debug, Clone, PartialEq)]
pub enum AqError {
    /// Non-2xx HTTP response from the OpenAQ API.
    Http(u16),
    /// Transport-level failure reaching the data source.
    Fetch(String),
    /// The response body could not be deserialized.
    Parse(String),
    /// The record batch was empty (or every record was unusable).
    /// This is the normal "no data yet" state, not a fatal failure.
    EmptyInput,
    /// A record's date field could not be split into a calendar-day key.
    MalformedDate(String),
    /// OPENAQ_API_KEY is not set in the environment.
    MissingApiKey,
    /// The configuration file exists but could not be read or parsed.
    Config(String),
}

impl std::fmt::Display for AqError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AqError::Http(code) => write!(f, "HTTP error: {}", code),
            AqError::Fetch(msg) => write!(f, "Fetch error: {}", msg),
            AqError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AqError::EmptyInput => write!(f, "No measurements in batch"),
            AqError::MalformedDate(date) => write!(f, "Malformed date: {}", date),
            AqError::MissingApiKey => write!(f, "OPENAQ_API_KEY is not set"),
            AqError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AqError {}
