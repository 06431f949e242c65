/// Measurement aggregation: flat record list → per-date chart rows.
///
/// One aggregation pass rebuilds all derived structures wholesale from a
/// freshly fetched batch; there is no incremental update. Conflict policies
/// are deliberately asymmetric and must stay that way:
///   - row values: last-write-wins per (date, parameter) in input order
///   - unit map: first-write-wins per parameter
///
/// Malformed dates are skipped per-record (reported through the logging
/// sink) rather than aborting the batch — one bad record must not blank
/// the whole dashboard.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::logging::{self, DataSource};
use crate::model::{AqError, ChartData, ChartRow, Measurement};

// ---------------------------------------------------------------------------
// Date key derivation
// ---------------------------------------------------------------------------

/// Derives the calendar-day grouping key from an ISO 8601 timestamp.
///
/// Splits at the first `'T'` and validates the prefix as a `YYYY-MM-DD`
/// date. Returns `MalformedDate` if the separator is missing or the prefix
/// is not a real calendar date — callers decide whether to skip or abort.
pub fn date_key(timestamp: &str) -> Result<&str, AqError> {
    let (day, _) = timestamp
        .split_once('T')
        .ok_or_else(|| AqError::MalformedDate(timestamp.to_string()))?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|_| AqError::MalformedDate(timestamp.to_string()))?;
    Ok(day)
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Pivots a flat measurement batch into chart data.
///
/// Single left-to-right pass; rows keep first-insertion order of date keys
/// until the final chronological sort. Returns `EmptyInput` for an empty
/// batch, or when every record was skipped as malformed.
pub fn aggregate(records: &[Measurement]) -> Result<ChartData, AqError> {
    if records.is_empty() {
        return Err(AqError::EmptyInput);
    }

    // (parsed date, key string) pairs in first-insertion order; the parsed
    // date drives the final sort so ordering is chronological, not lexical.
    let mut row_order: Vec<(NaiveDate, String)> = Vec::new();
    let mut values_by_date: HashMap<String, HashMap<String, f64>> = HashMap::new();
    let mut parameters: Vec<String> = Vec::new();
    let mut units: HashMap<String, String> = HashMap::new();
    let mut skipped = 0usize;

    for record in records {
        let day = match date_key(&record.date) {
            Ok(day) => day.to_string(),
            Err(e) => {
                skipped += 1;
                logging::warn(
                    DataSource::System,
                    None,
                    &format!("skipping '{}' record: {}", record.parameter, e),
                );
                continue;
            }
        };

        if !values_by_date.contains_key(&day) {
            // date_key already validated the prefix, so this parse holds.
            if let Ok(parsed) = NaiveDate::parse_from_str(&day, "%Y-%m-%d") {
                row_order.push((parsed, day.clone()));
            }
        }
        values_by_date
            .entry(day)
            .or_default()
            .insert(record.parameter.clone(), record.value);

        if !units.contains_key(&record.parameter) {
            units.insert(record.parameter.clone(), record.unit.clone());
        }
        if !parameters.contains(&record.parameter) {
            parameters.push(record.parameter.clone());
        }
    }

    if skipped > 0 {
        logging::warn(
            DataSource::System,
            None,
            &format!("{} of {} records had malformed dates", skipped, records.len()),
        );
    }

    if values_by_date.is_empty() {
        return Err(AqError::EmptyInput);
    }

    row_order.sort_by_key(|(parsed, _)| *parsed);

    let rows = row_order
        .into_iter()
        .filter_map(|(_, day)| {
            values_by_date.remove(&day).map(|values| ChartRow { date: day, values })
        })
        .collect();

    Ok(ChartData {
        rows,
        parameters,
        units,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
