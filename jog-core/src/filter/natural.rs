use chrono::{DateTime, Days, Local, NaiveTime, TimeDelta, TimeZone, Utc};

/// Parses relative time expressions: `now`, `today`, `yesterday` and
/// `<n> <unit> ago` (`30s ago`, `5 minutes ago`, `2 days ago`).
///
/// Returns `None` when the expression is not relative, so callers can fall
/// back to an absolute timestamp parser.
pub fn parse_relative(expr: &str, now: DateTime<Local>) -> Option<DateTime<Utc>> {
    let expr = expr.trim().to_lowercase();

    match expr.as_str() {
        "now" => return Some(now.with_timezone(&Utc)),
        "today" => return start_of_day(now, 0),
        "yesterday" => return start_of_day(now, 1),
        _ => {}
    }

    let amount = expr.strip_suffix("ago")?.trim();
    let split = amount
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(amount.len());
    let (count, unit) = amount.split_at(split);
    let count: i64 = count.parse().ok()?;

    let delta = match unit.trim() {
        "s" | "sec" | "secs" | "second" | "seconds" => TimeDelta::try_seconds(count),
        "m" | "min" | "mins" | "minute" | "minutes" => TimeDelta::try_minutes(count),
        "h" | "hr" | "hrs" | "hour" | "hours" => TimeDelta::try_hours(count),
        "d" | "day" | "days" => TimeDelta::try_days(count),
        "w" | "week" | "weeks" => TimeDelta::try_weeks(count),
        _ => None,
    }?;

    now.checked_sub_signed(delta).map(|t| t.with_timezone(&Utc))
}

fn start_of_day(now: DateTime<Local>, days_back: u64) -> Option<DateTime<Utc>> {
    let date = now.date_naive().checked_sub_days(Days::new(days_back))?;
    Local
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .map(|t| t.with_timezone(&Utc))
}
