use crate::model::Granularity;
use chrono::{Datelike, Duration, NaiveDateTime};

pub fn period_key(timestamp: &NaiveDateTime, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => timestamp.format("%Y-%m-%d").to_string(),
        Granularity::Week => week_key(timestamp),
        Granularity::Month => timestamp.format("%Y-%m").to_string(),
        Granularity::Year => timestamp.format("%Y").to_string(),
    }
}

/// Monday-anchored week key. The date is snapped back to its Monday, which is
/// then formatted with `%W` (weeks counted from the start of the year, days
/// before the first Monday falling in week 00). Not ISO week numbering.
pub fn week_key(timestamp: &NaiveDateTime) -> String {
    let days_from_monday = timestamp.weekday().num_days_from_monday();
    let monday = timestamp.date() - Duration::days(days_from_monday as i64);
    monday.format("%Y-W%W").to_string()
}
