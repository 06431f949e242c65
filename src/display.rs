/// Display helpers for chart consumers: parameter labels and series colors.
///
/// Pure string/slice logic, no I/O. The rendering layer calls
/// `format_parameter_label` wherever a parameter identifier is shown
/// (series names, legend entries, tooltip rows) and `series_color` to
/// assign each series a stable color by its position in the parameter list.

// ---------------------------------------------------------------------------
// Label formatting
// ---------------------------------------------------------------------------

/// Converts ASCII digits in a parameter identifier to Unicode subscripts,
/// e.g. "NO2" → "NO₂", "PM2.5" → "PM₂.₅". All other characters pass
/// through unchanged; strings without digits come back identical.
pub fn format_parameter_label(identifier: &str) -> String {
    identifier
        .chars()
        .map(|c| match c {
            '0' => '₀',
            '1' => '₁',
            '2' => '₂',
            '3' => '₃',
            '4' => '₄',
            '5' => '₅',
            '6' => '₆',
            '7' => '₇',
            '8' => '₈',
            '9' => '₉',
            other => other,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------

/// Fixed bright palette for chart series, one color per parameter.
pub const SERIES_PALETTE: [&str; 6] = [
    "#FF5733", "#33FFCE", "#FF33F6", "#33A1FF", "#FFBD33", "#75FF33",
];

/// Returns the display color for the series at `index` in the parameter
/// list, wrapping around when there are more series than palette entries.
pub fn series_color(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_pollutant_labels() {
        assert_eq!(format_parameter_label("NO2"), "NO₂");
        assert_eq!(format_parameter_label("O3"), "O₃");
        assert_eq!(format_parameter_label("SO2"), "SO₂");
        assert_eq!(format_parameter_label("PM2.5"), "PM₂.₅");
        assert_eq!(format_parameter_label("PM10"), "PM₁₀");
    }

    #[test]
    fn test_no_digits_passes_through_unchanged() {
        assert_eq!(format_parameter_label("ABC"), "ABC");
        assert_eq!(format_parameter_label("co"), "co");
    }

    #[test]
    fn test_empty_string_stays_empty() {
        assert_eq!(format_parameter_label(""), "");
    }

    #[test]
    fn test_every_digit_has_a_subscript() {
        assert_eq!(format_parameter_label("0123456789"), "₀₁₂₃₄₅₆₇₈₉");
    }

    #[test]
    fn test_non_ascii_input_is_preserved() {
        // Unit-like strings with non-ASCII characters must survive intact.
        assert_eq!(format_parameter_label("µg/m3"), "µg/m₃");
    }

    #[test]
    fn test_formatting_already_subscripted_label_is_stable() {
        // Subscript glyphs are not ASCII digits, so a second pass is a no-op.
        let once = format_parameter_label("NO2");
        assert_eq!(format_parameter_label(&once), once);
    }

    #[test]
    fn test_series_colors_wrap_around_palette() {
        assert_eq!(series_color(0), SERIES_PALETTE[0]);
        assert_eq!(series_color(5), SERIES_PALETTE[5]);
        assert_eq!(series_color(6), SERIES_PALETTE[0]);
        assert_eq!(series_color(13), SERIES_PALETTE[1]);
    }
}
