/// Service configuration.
///
/// The data-source endpoint, monitored location, and fetch window come from
/// an optional `aqmon.toml` next to the binary; anything unset falls back
/// to the defaults below. The API key is deliberately kept out of the file:
/// it is read from the OPENAQ_API_KEY environment variable (a `.env` file
/// is honored via dotenv).

use serde::Deserialize;
use std::path::Path;

use crate::model::AqError;

/// Default OpenAQ API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openaq.org";

/// Default monitored location: Köln, Germany (OpenAQ location 2162203).
pub const DEFAULT_LOCATION_ID: i64 = 2_162_203;

/// Default fetch window, in days.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 5;

/// Default cap on daily rollups requested per sensor.
pub const DEFAULT_RESULT_LIMIT: u32 = 10;

// ---------------------------------------------------------------------------
// Configuration types
// ---------------------------------------------------------------------------

/// Resolved configuration for one service run.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_base: String,
    pub location_id: i64,
    pub lookback_days: i64,
    pub result_limit: u32,
    pub api_key: String,
}

/// Shape of the optional `aqmon.toml` file. Every field is optional;
/// missing fields take the compiled-in defaults.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_base: Option<String>,
    location_id: Option<i64>,
    lookback_days: Option<i64>,
    result_limit: Option<u32>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from `path` (skipped if the file does not exist) and
/// the environment. Fails only when the API key is missing or the file is
/// present but unreadable.
pub fn load(path: &Path) -> Result<ServiceConfig, AqError> {
    dotenv::dotenv().ok();

    let file = if path.exists() {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AqError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        toml::from_str::<FileConfig>(&raw)
            .map_err(|e| AqError::Config(format!("{}: {}", path.display(), e)))?
    } else {
        FileConfig::default()
    };

    let api_key = std::env::var("OPENAQ_API_KEY").map_err(|_| AqError::MissingApiKey)?;

    Ok(ServiceConfig {
        api_base: file.api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        location_id: file.location_id.unwrap_or(DEFAULT_LOCATION_ID),
        lookback_days: file.lookback_days.unwrap_or(DEFAULT_LOOKBACK_DAYS),
        result_limit: file.result_limit.unwrap_or(DEFAULT_RESULT_LIMIT),
        api_key,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
