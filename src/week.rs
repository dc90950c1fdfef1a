use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone};

/// ISO-8601 week number for today's local date.
pub fn current_week_number() -> u32 {
    week_number_at(&Local::now())
}

/// ISO-8601 week number of the calendar date `now` falls on in its own zone.
pub fn week_number_at<Tz: TimeZone>(now: &DateTime<Tz>) -> u32 {
    week_number(now.date_naive())
}

pub fn week_number(date: NaiveDate) -> u32 {
    // Thursday of the same Monday-based week decides which year the week belongs to.
    let days_from_monday = i64::from(date.weekday().num_days_from_monday());
    let thursday = date + Duration::days(3 - days_from_monday);

    let week1 = thursday - Duration::days(i64::from(thursday.ordinal0()) - 3);
    let week1_offset = i64::from(week1.weekday().num_days_from_monday());

    let days = (thursday - week1).num_days();
    let weeks = (days - 3 + week1_offset) as f64 / 7.0;

    1 + weeks.round() as u32
}
