//! Parsing of date and month arguments

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{MokaError, MokaResult};
use crate::models::MonthPeriod;

/// Parse a `YYYY-MM-DD` date as midnight UTC; no date means now
pub fn parse_date(input: Option<&str>) -> MokaResult<DateTime<Utc>> {
    let Some(raw) = input else {
        return Ok(Utc::now());
    };

    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        MokaError::invalid_input(format!("invalid date '{}', expected YYYY-MM-DD", raw))
    })?;
    Ok(date.and_time(NaiveTime::default()).and_utc())
}

/// Parse a month: `YYYY-MM`, `current` or `last`; no month means current
pub fn parse_month(input: Option<&str>) -> MokaResult<MonthPeriod> {
    match input.map(str::trim) {
        None | Some("current") => Ok(MonthPeriod::current()),
        Some("last") | Some("prev") => Ok(MonthPeriod::current().prev()),
        Some(raw) => raw.parse(),
    }
}
