//! Weekly expiry calculator
//!
//! Nifty weekly contracts expire on Tuesday. The label shown in alerts is
//! the next Tuesday strictly after "today": on a Tuesday the label already
//! points at next week's contract.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use chrono_tz::Tz;

use crate::common::errors::{GatewayError, Result};

/// Weekday the weekly contract expires on
pub const EXPIRY_WEEKDAY: Weekday = Weekday::Tue;

/// Today's date on the market-timezone calendar
pub fn today_in(timezone: &str) -> Result<NaiveDate> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| GatewayError::Configuration(format!("invalid timezone: {timezone}")))?;
    Ok(chrono::Utc::now().with_timezone(&tz).date_naive())
}

/// Next weekly expiry date, strictly after `today`
pub fn next_expiry(today: NaiveDate) -> NaiveDate {
    let days_ahead = (EXPIRY_WEEKDAY.num_days_from_monday() + 7
        - today.weekday().num_days_from_monday())
        % 7;
    let days_ahead = if days_ahead == 0 { 7 } else { days_ahead };
    today + Duration::days(i64::from(days_ahead))
}

/// Short "DD Mon" label for an expiry date
pub fn expiry_label(date: NaiveDate) -> String {
    date.format("%d %b")
        .to_string()
        .trim_end_matches('.')
        .to_string()
}
