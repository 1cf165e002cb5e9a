//! Label text derivation for the thumb

/// Maximum fractional digits shown for non-integral values
pub const MAX_FRACTION_DIGITS: usize = 4;

/// Text shown on the thumb label
///
/// An explicit override wins verbatim; otherwise the value is formatted with
/// [`format_value`].
pub fn thumb_label_text(thumb_text: Option<&str>, value: f64) -> String {
    match thumb_text {
        Some(text) => text.to_string(),
        None => format_value(value),
    }
}

/// Format a value for display
///
/// Integral values (`value == value.floor()`) render without a decimal point.
/// Fractional values keep up to [`MAX_FRACTION_DIGITS`] digits with trailing
/// zeros trimmed, so `50.2` renders as `"50.2"` rather than `"50.2000"`.
pub fn format_value(value: f64) -> String {
    let text = if value == value.floor() {
        format!("{value:.0}")
    } else {
        let fixed = format!("{value:.prec$}", prec = MAX_FRACTION_DIGITS);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    };

    // -0.0 and tiny negatives rounded to zero
    if text == "-0" { "0".to_string() } else { text }
}
