/// Data organization utilities for the air quality trends service.
///
/// This module turns the flat ingest output into the wide, date-indexed
/// table the chart consumes. Rendering (series drawing, legends, tooltips)
/// is handled by the external visualization layer, which reads the
/// structures produced here as-is.
///
/// Submodules:
/// - `grouping` — pivots flat measurement lists into per-date chart rows.

pub mod grouping;
