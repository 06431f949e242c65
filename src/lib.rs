/// Air quality trends aggregation service.
///
/// Fetches daily pollutant measurements for a monitored location from the
/// OpenAQ v3 API and pivots the flat record list into a wide, date-indexed
/// table for multi-series time-series visualization, plus the lookup
/// structures (distinct parameter list, parameter→unit map) and display
/// helpers the rendering layer consumes.
///
/// The rendering layer itself (chart drawing, legend, tooltips) is an
/// external collaborator; this crate ends at the data-shaping contract.

pub mod analysis;
pub mod config;
pub mod display;
pub mod ingest;
pub mod locations;
pub mod logging;
pub mod model;
