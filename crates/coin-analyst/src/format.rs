//! Display Formatting
//!
//! Helpers for the report's display strings. The summarization engine's
//! instructions are tuned to these exact renderings, so the rules are
//! pinned here and tested exactly:
//!
//! - prices and percentages: 2 decimal places
//! - spread: 4 decimal places
//! - rounding: half away from zero (2.345 -> "2.35")
//! - volumes and counts: thousands separators, fractional digits kept

use rust_decimal::{Decimal, RoundingStrategy};

/// "$X.XX"
pub fn usd(value: Decimal) -> String {
    format!("${}", fixed(value, 2))
}

/// "$X.XXXX" - used for the spread, which needs the extra precision
pub fn usd_precise(value: Decimal) -> String {
    format!("${}", fixed(value, 4))
}

/// "X.XX%"
pub fn percent(value: Decimal) -> String {
    format!("{}%", fixed(value, 2))
}

/// Fixed-point rendering with exactly `places` fractional digits,
/// midpoints rounded away from zero.
pub fn fixed(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.places$}", places = places as usize)
}

/// Thousands-separated rendering: the integer digits are grouped in
/// threes, trailing fractional zeros are dropped, remaining fractional
/// digits are kept as-is.
pub fn thousands(value: Decimal) -> String {
    let text = value.normalize().to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
