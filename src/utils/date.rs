use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a `YYYY-MM` month selector into the first day of that month.
/// The engine only needs a reference date inside the month.
pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

/// Human title for a report month, e.g. "March 2025".
pub fn month_title(d: NaiveDate) -> String {
    format!("{} {}", month_name(d.month()), d.year())
}

/// Whether a date falls inside a `YYYY[-MM[-DD]]` period selector.
pub fn in_period(d: NaiveDate, period: &str) -> bool {
    d.format("%Y-%m-%d").to_string().starts_with(period)
}
