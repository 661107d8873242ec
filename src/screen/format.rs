use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Render an API timestamp as `DD-MM-YYYY`.
///
/// Accepts RFC 3339 (the calendar date in UTC), a naive `YYYY-MM-DDTHH:MM:SS[.f]`
/// or a bare `YYYY-MM-DD`. Anything else comes back unchanged.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.naive_utc().date())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%d-%m-%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
