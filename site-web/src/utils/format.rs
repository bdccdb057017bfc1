//! # Formatting Utilities
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`format_usd`] - Format a token price in US dollars

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// ```rust
/// use site_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_number(-1000.0, 0), "-1,000");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Format a USD price. Sub-dollar prices keep four decimals so that
/// fractions of a cent stay visible.
///
/// ```rust
/// use site_web::utils::format::format_usd;
///
/// assert_eq!(format_usd(64000.5), "$64,000.50");
/// assert_eq!(format_usd(0.05), "$0.0500");
/// ```
pub fn format_usd(price: f64) -> String {
    let decimals = if price.abs() < 1.0 { 4 } else { 2 };
    format!("${}", format_number(price, decimals))
}
