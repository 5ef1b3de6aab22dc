use chrono::{DateTime, Local, TimeZone};

/// Render a unix timestamp as `YY/MM/DD` in the given timezone.
///
/// Returns an empty string for timestamps chrono cannot represent.
pub fn format_short_date<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match to_datetime(timestamp, tz) {
        Some(dt) => dt.format("%y/%m/%d").to_string(),
        None => String::new(),
    }
}

/// Render a unix timestamp with the platform's preferred date layout (`%x`).
pub fn format_locale_date<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match to_datetime(timestamp, tz) {
        Some(dt) => dt.format("%x").to_string(),
        None => String::new(),
    }
}

/// Both renderings in local time, as `(locale, short)`.
pub fn local_dates(timestamp: i64) -> (String, String) {
    (
        format_locale_date(timestamp, &Local),
        format_short_date(timestamp, &Local),
    )
}

fn to_datetime<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(tz))
}
