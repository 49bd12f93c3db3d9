//! Execution band formatter
//!
//! The trader is instructed to execute within a fixed 5-point window above
//! the base price.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Width of the execution window above the base price
pub const BAND_WIDTH: Decimal = dec!(5);

/// Parse a raw price field into a Decimal
///
/// Empty or non-numeric input yields None.
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Render a price the way it appears in alerts: whole numbers without a
/// fractional part, everything else fixed to two decimals.
pub fn format_price(value: Decimal) -> String {
    if value.fract().is_zero() {
        value.trunc().normalize().to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Band for an already-parsed base price
pub fn band_of(low: Decimal) -> String {
    let high = low + BAND_WIDTH;
    format!("{} - {}", format_price(low), format_price(high))
}

/// `"low - high"` band for a raw price field, or None when there is no
/// parseable number to build a range from
pub fn band(raw: &str) -> Option<String> {
    parse_price(raw).map(band_of)
}
