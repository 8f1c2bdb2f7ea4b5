//! Display helpers for timestamps, dates and money.
//!
//! Times coming from the backend are UTC; the UI shows them in the browser's local
//! zone. The `_in` variants take an explicit zone so they can be tested.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// 12-hour clock time in the local zone, e.g. `02:30 PM`.
pub fn format_time(dt: &DateTime<Utc>) -> String {
    format_time_in(dt, &Local)
}

pub fn format_time_in<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format("%I:%M %p").to_string()
}

/// `02:00 PM – 02:35 PM`
pub fn format_time_range(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    format!("{} – {}", format_time(start), format_time(end))
}

/// Local calendar date of a timestamp as `YYYY-MM-DD`.
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// e.g. `Saturday, June 1`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Wall-clock `HH:MM` on `date` in the local zone, as a UTC instant.
pub fn local_datetime(date: NaiveDate, hhmm: &str) -> Option<DateTime<Utc>> {
    local_datetime_in(date, hhmm, &Local)
}

/// `None` for a malformed time or one skipped by a DST jump.
pub fn local_datetime_in<Tz: TimeZone>(date: NaiveDate, hhmm: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let time = NaiveTime::parse_from_str(hhmm.trim(), "%H:%M").ok()?;
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Amount with two decimals and the currency symbol (`PEN` shows as `S/.`).
pub fn format_money(amount: f64, currency: &str) -> String {
    let symbol = match currency {
        "" | "PEN" => "S/.",
        "USD" => "$",
        "EUR" => "€",
        other => other,
    };
    format!("{symbol} {amount:.2}")
}
