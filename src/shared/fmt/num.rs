//! Number formatting utilities for human-readable display.
//!
//! Fixed decimal places with comma thousands separators, e.g. `1234.5` at two
//! decimals becomes `"1,234.50"`.

/// Adds thousands separators to the integer part of an already formatted
/// number. The fractional part and sign are kept as-is.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let integer_part = integer
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(f) => format!("{}{}.{}", sign, integer_part, f),
        None => format!("{}{}", sign, integer_part),
    }
}

/// Format an f64 with exactly `decimals` fractional digits and separators.
pub fn display_with_decimals(amount: f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    group_thousands(&format!("{:.1$}", amount, decimals))
}

/// Format an f64 as a dollar amount: `"$"` + grouped value with 2 decimals.
pub fn usd(amount: f64) -> String {
    format!("${}", display_with_decimals(amount, 2))
}
