//! Number formatting for calculator readouts.

/// Render a total the way the keypad readout shows it.
///
/// Magnitudes in `[1e-3, 1e7)` (and zero) print in decimal, keeping one
/// fractional digit for integral values (`8.0`). Anything outside that range
/// switches to exponent form with at least one mantissa fraction digit
/// (`1.0E7`, `1.234E-5`). Infinities render as `Infinity` / `-Infinity` and
/// NaN as `NaN`. Digits are the shortest that round-trip.
pub fn plain(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e7).contains(&magnitude) {
        return exponent_form(value);
    }

    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn exponent_form(value: f64) -> String {
    let text = format!("{:E}", value);
    match text.split_once('E') {
        Some((mantissa, exp)) if !mantissa.contains('.') => format!("{mantissa}.0E{exp}"),
        _ => text,
    }
}

/// Render a total with `,` thousand separators.
///
/// The fraction is limited to ten places with trailing zeros dropped.
/// Non-finite values fall back to [`plain`].
pub fn with_separators(value: f64) -> String {
    if !value.is_finite() {
        return plain(value);
    }

    let fixed = format!("{:.10}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    // "-0" after rounding away the fraction reads better as "0"
    let sign = if int_part == "0" && frac_part.is_empty() {
        ""
    } else {
        sign
    };

    format!("{sign}{}{frac_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integral() {
        assert_eq!(plain(0.0), "0.0");
        assert_eq!(plain(8.0), "8.0");
        assert_eq!(plain(-12.0), "-12.0");
        assert_eq!(plain(-0.0), "-0.0");
        assert_eq!(plain(1e20), "1.0E20");
    }

    #[test]
    fn test_plain_exponent_boundaries() {
        assert_eq!(plain(9999999.0), "9999999.0");
        assert_eq!(plain(9999999.5), "9999999.5");
        assert_eq!(plain(1e7), "1.0E7");
        assert_eq!(plain(-1.5e7), "-1.5E7");
        assert_eq!(plain(1.234e10), "1.234E10");

        assert_eq!(plain(0.001), "0.001");
        assert_eq!(plain(0.000999), "9.99E-4");
        assert_eq!(plain(1e-4), "1.0E-4");
        assert_eq!(plain(-2.5e-9), "-2.5E-9");
    }

    #[test]
    fn test_plain_fractional() {
        assert_eq!(plain(1.23), "1.23");
        assert_eq!(plain(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_plain_non_finite() {
        assert_eq!(plain(f64::INFINITY), "Infinity");
        assert_eq!(plain(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(plain(f64::NAN), "NaN");
    }

    #[test]
    fn test_separators() {
        assert_eq!(with_separators(0.0), "0");
        assert_eq!(with_separators(999.0), "999");
        assert_eq!(with_separators(1000.0), "1,000");
        assert_eq!(with_separators(1234567.5), "1,234,567.5");
        assert_eq!(with_separators(-1000000.0), "-1,000,000");
        assert!(with_separators(1.0 / 3.0).starts_with("0.333"));
    }

    #[test]
    fn test_separators_non_finite() {
        assert_eq!(with_separators(f64::INFINITY), "Infinity");
        assert_eq!(with_separators(f64::NAN), "NaN");
    }
}
