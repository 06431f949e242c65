/// Service entry point: one fetch → aggregate cycle.
///
/// Fetches the full measurement batch for the configured location,
/// aggregates it into chart data, and emits the result as JSON on stdout
/// for the rendering collaborator. Fetch or aggregation failures leave the
/// service in the "no data yet" state with a report on stderr — never a
/// panic, and the run stays retryable.

use std::path::Path;
use std::time::Duration;

use serde_json::json;

use aqmon_service::analysis::grouping;
use aqmon_service::config;
use aqmon_service::display::{format_parameter_label, series_color};
use aqmon_service::ingest::openaq;
use aqmon_service::locations;
use aqmon_service::logging::{self, DataSource, LogLevel};
use aqmon_service::model::{AqError, ChartData};

fn main() {
    logging::init_logger(LogLevel::Info, None);

    let config = match config::load(Path::new("aqmon.toml")) {
        Ok(config) => config,
        Err(e) => {
            logging::error(DataSource::System, None, &format!("configuration: {}", e));
            return;
        }
    };

    let location_name = locations::find_location(config.location_id)
        .map(|l| l.name)
        .unwrap_or("unknown location");
    logging::info(
        DataSource::System,
        None,
        &format!("fetching measurements for {} ({})", location_name, config.location_id),
    );

    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            logging::error(DataSource::System, None, &format!("HTTP client: {}", e));
            return;
        }
    };

    let records = match openaq::fetch_all_measurements(&client, &config) {
        Ok(records) => records,
        Err(e) => {
            logging::log_fetch_failure(None, "batch fetch", &e);
            return;
        }
    };

    match grouping::aggregate(&records) {
        Ok(data) => {
            logging::info(
                DataSource::OpenAq,
                None,
                &format!(
                    "{} records aggregated into {} rows, {} parameters",
                    records.len(),
                    data.rows.len(),
                    data.parameters.len()
                ),
            );
            print_chart_data(location_name, &data);
        }
        Err(AqError::EmptyInput) => {
            // Normal "no data" state: report and exit cleanly.
            logging::warn(DataSource::OpenAq, None, "no air quality data found");
        }
        Err(e) => {
            logging::error(DataSource::System, None, &format!("aggregation: {}", e));
        }
    }
}

/// Emit the chart data plus per-series display metadata as one JSON
/// document on stdout.
fn print_chart_data(location_name: &str, data: &ChartData) {
    let series: Vec<_> = data
        .parameters
        .iter()
        .enumerate()
        .map(|(index, parameter)| {
            json!({
                "parameter": parameter,
                "label": format_parameter_label(parameter),
                "color": series_color(index),
                "unit": data.units.get(parameter),
            })
        })
        .collect();

    let document = json!({
        "location": location_name,
        "rows": data.rows,
        "parameters": data.parameters,
        "units": data.units,
        "series": series,
    });

    match serde_json::to_string_pretty(&document) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => logging::error(DataSource::System, None, &format!("serialization: {}", e)),
    }
}
