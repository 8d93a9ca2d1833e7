//! Number-to-text primitives shared by every display string.

/// Fractional digits used for values on the periodic table grid.
pub const GRID_DIGITS: usize = 4;

/// Fractional digits used for values in the detail view.
pub const DETAIL_DIGITS: usize = 8;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Formats `value` with at most `max_fraction_digits` fractional digits, rounding the last
/// kept digit and trimming trailing zeros (and a dangling decimal point).
///
/// `format_decimal(2.34567891, 4)` yields `"2.3457"`, `format_decimal(12.0, 4)` yields
/// `"12"`. A result that rounds to zero never carries a minus sign.
pub fn format_decimal(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.*}", max_fraction_digits, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Renders each decimal digit of `value` as its Unicode superscript counterpart.
pub fn superscript(value: u32) -> String {
    value
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| SUPERSCRIPT_DIGITS[d as usize])
        .collect()
}
