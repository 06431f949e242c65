/// OpenAQ v3 Data API Client
///
/// Retrieves air quality sensor data from the OpenAQ platform: first the
/// sensors attached to a monitored location, then the recent daily
/// measurement rollups for each sensor, flattened into one record list
/// for aggregation.
///
/// API Documentation: https://docs.openaq.org/
/// Requires an API key, sent as the X-API-Key header on every request.

use chrono::{Duration, Utc};
use serde::Deserialize;

use crate::config::ServiceConfig;
use crate::logging;
use crate::model::{AqError, Measurement};

// ============================================================================
// OpenAQ API Response Structures
// ============================================================================

/// Response from `/v3/locations/{id}/sensors`
#[derive(Debug, Deserialize)]
pub struct SensorsResponse {
    pub results: Vec<SensorEntry>,
}

/// One sensor attached to a location
#[derive(Debug, Deserialize)]
pub struct SensorEntry {
    pub id: i64,
    pub name: Option<String>,
}

/// Response from `/v3/sensors/{id}/measurements/daily`
#[derive(Debug, Deserialize)]
pub struct MeasurementsResponse {
    pub results: Vec<DailyMeasurement>,
}

/// One daily measurement rollup
#[derive(Debug, Deserialize)]
pub struct DailyMeasurement {
    pub value: f64,
    pub parameter: ParameterInfo,
    pub period: MeasurementPeriod,
}

#[derive(Debug, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    pub units: String,
}

#[derive(Debug, Deserialize)]
pub struct MeasurementPeriod {
    #[serde(rename = "datetimeFrom")]
    pub datetime_from: PeriodTimestamp,
}

#[derive(Debug, Deserialize)]
pub struct PeriodTimestamp {
    pub utc: String, // ISO 8601
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Fetch the sensor ids attached to the configured location.
pub fn fetch_sensor_ids(
    client: &reqwest::blocking::Client,
    config: &ServiceConfig,
) -> Result<Vec<i64>, AqError> {
    let url = format!(
        "{}/v3/locations/{}/sensors",
        config.api_base, config.location_id
    );

    let response = client
        .get(&url)
        .header("X-API-Key", &config.api_key)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| AqError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AqError::Http(response.status().as_u16()));
    }

    let body = response.text().map_err(|e| AqError::Fetch(e.to_string()))?;
    parse_sensors_response(&body)
}

/// Fetch the recent daily measurements for a single sensor.
///
/// The request window covers `config.lookback_days` days ending now,
/// capped at `config.result_limit` rollups per sensor.
pub fn fetch_measurements(
    client: &reqwest::blocking::Client,
    config: &ServiceConfig,
    sensor_id: i64,
) -> Result<Vec<Measurement>, AqError> {
    let till = Utc::now();
    let from = till - Duration::days(config.lookback_days);

    let url = format!(
        "{}/v3/sensors/{}/measurements/daily",
        config.api_base, sensor_id
    );

    let response = client
        .get(&url)
        .header("X-API-Key", &config.api_key)
        .header("Accept", "application/json")
        .query(&[
            ("limit", config.result_limit.to_string()),
            ("datetime_from", from.to_rfc3339()),
            ("datetime_to", till.to_rfc3339()),
        ])
        .send()
        .map_err(|e| AqError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AqError::Http(response.status().as_u16()));
    }

    let body = response.text().map_err(|e| AqError::Fetch(e.to_string()))?;
    parse_measurements_response(&body, sensor_id)
}

/// Fetch the full record batch for the configured location: all sensors,
/// all recent daily measurements, flattened in request order.
///
/// A failing sensor is logged and skipped so one dead sensor cannot poison
/// the batch. The result may be empty; the aggregator treats that as the
/// normal "no data" state.
pub fn fetch_all_measurements(
    client: &reqwest::blocking::Client,
    config: &ServiceConfig,
) -> Result<Vec<Measurement>, AqError> {
    let sensor_ids = fetch_sensor_ids(client, config)?;

    let mut all = Vec::new();
    for sensor_id in sensor_ids {
        match fetch_measurements(client, config, sensor_id) {
            Ok(measurements) => all.extend(measurements),
            Err(e) => logging::log_fetch_failure(Some(sensor_id), "measurement fetch", &e),
        }
    }

    Ok(all)
}

// ============================================================================
// Response Parsing
// ============================================================================

/// Parse a `/locations/{id}/sensors` response body into sensor ids.
pub fn parse_sensors_response(body: &str) -> Result<Vec<i64>, AqError> {
    let response: SensorsResponse =
        serde_json::from_str(body).map_err(|e| AqError::Parse(e.to_string()))?;
    Ok(response.results.into_iter().map(|s| s.id).collect())
}

/// Parse a `/sensors/{id}/measurements/daily` response body into the flat
/// record form the aggregator consumes.
pub fn parse_measurements_response(
    body: &str,
    sensor_id: i64,
) -> Result<Vec<Measurement>, AqError> {
    let response: MeasurementsResponse =
        serde_json::from_str(body).map_err(|e| AqError::Parse(e.to_string()))?;

    Ok(response
        .results
        .into_iter()
        .map(|m| Measurement {
            sensor_id,
            date: m.period.datetime_from.utc,
            parameter: m.parameter.name,
            value: m.value,
            unit: m.parameter.units,
        })
        .collect())
}

// ============================================================================
// Tests
// ============================================================================
