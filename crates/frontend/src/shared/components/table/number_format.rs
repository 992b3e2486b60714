//! Number formatting for table cells and stat cards

/// Formats a number with a thousands separator (`,`) and the given number of
/// decimals.
///
/// # Examples
///
/// ```
/// # use smm_admin::shared::components::table::format_number_with_decimals;
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals.min(6) as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Two decimals with a thousands separator.
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Money with the dollar sign, e.g. `$1,234.50` or `-$12.00`.
pub fn format_usd(value: f64) -> String {
    let money = format_money(value.abs());
    if value < 0.0 && money != "0.00" {
        format!("-${}", money)
    } else {
        format!("${}", money)
    }
}

/// Integer with a thousands separator.
pub fn format_count(value: u64) -> String {
    format_number_with_decimals(value as f64, 0)
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number_with_decimals(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.89), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1,234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(123.0, 0), "123");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
    }

    #[test]
    fn test_format_usd_and_count() {
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(-12.0), "-$12.00");
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_percent(12.345), "12.3%");
    }
}
