//! Numeric parsing and rounding helpers shared by the calculator and UI.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9.\-]").expect("non-numeric scrubber pattern is valid")
});

/// Round to two decimal places, the precision every displayed figure uses.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a single damage-ratio entry such as `"150"` or `"150%"`.
///
/// Returns `None` for anything that is not a finite number once a trailing
/// percent sign is stripped.
#[must_use]
pub fn parse_ratio(entry: &str) -> Option<f64> {
    let trimmed = entry.trim().trim_end_matches('%');
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Parse a number out of loosely formatted text, stripping thousands
/// separators and any other non-numeric characters first.
#[must_use]
pub fn parse_loose(text: &str) -> Option<f64> {
    let scrubbed = NON_NUMERIC.replace_all(text, "");
    match scrubbed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Parse a user-entered reduction field, defaulting to 0 when unparsable.
#[must_use]
pub fn parse_or_zero(field: &str) -> f64 {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_snaps_to_two_decimals() {
        assert!((round2(75.005) - 75.01).abs() < 1e-9);
        assert!((round2(0.0) - 0.0).abs() < f64::EPSILON);
        assert!((round2(149.994) - 149.99).abs() < 1e-9);
    }

    #[test]
    fn parse_ratio_accepts_percent_suffix() {
        assert_eq!(parse_ratio("150%"), Some(150.0));
        assert_eq!(parse_ratio(" 50 "), Some(50.0));
        assert_eq!(parse_ratio("abc"), None);
        assert_eq!(parse_ratio(""), None);
    }

    #[test]
    fn parse_loose_scrubs_separators_and_units() {
        assert_eq!(parse_loose("1,234"), Some(1234.0));
        assert_eq!(parse_loose("12,345.5 dmg"), Some(12345.5));
        assert_eq!(parse_loose("n/a"), None);
    }

    #[test]
    fn parse_or_zero_defaults_on_garbage() {
        assert!((parse_or_zero("0.25") - 0.25).abs() < f64::EPSILON);
        assert!((parse_or_zero("") - 0.0).abs() < f64::EPSILON);
        assert!((parse_or_zero("xyz") - 0.0).abs() < f64::EPSILON);
        assert!((parse_or_zero("NaN") - 0.0).abs() < f64::EPSILON);
    }
}
