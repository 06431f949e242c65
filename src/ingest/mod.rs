/// Data-source clients.
///
/// Submodules:
/// - `openaq` — OpenAQ v3 API client (sensor discovery + daily measurements).

pub mod openaq;
