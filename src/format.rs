use chrono::{DateTime, Utc};

pub const DATE_TBC: &str = "Date to be confirmed";

/// Short form for feeds, e.g. `Sat 19 Oct`. Kickoffs are shown in UTC.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%a %-d %b").to_string())
        .unwrap_or_else(|| DATE_TBC.to_string())
}

/// Long form with kickoff time, e.g. `Sat 19 October, 14:00`.
pub fn format_full_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%a %-d %B, %H:%M").to_string())
        .unwrap_or_else(|| DATE_TBC.to_string())
}
