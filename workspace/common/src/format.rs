//! Price formatting in the Turkish locale: `.` groups thousands, amounts are
//! whole lira.

const GROUP_SEPARATOR: char = '.';
const CURRENCY_SUFFIX: &str = " TL";

/// Rounds half-way values towards positive infinity, keeping the sign of
/// negative values that round to zero.
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    if rounded == 0.0 && value.is_sign_negative() {
        -0.0
    } else {
        rounded
    }
}

/// Format an amount as a grouped whole number, e.g. `1234567.4` -> `1.234.567`.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = round_half_up(value);
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

/// Same as [`format_amount`] with the lira suffix, e.g. `1.000.000 TL`.
pub fn format_lira(value: f64) -> String {
    format!("{}{}", format_amount(value), CURRENCY_SUFFIX)
}

/// Percentage with the sign in front, as Turkish writes it: `%86`.
pub fn format_percent(value: f64) -> String {
    format!("%{}", format_amount(value))
}
