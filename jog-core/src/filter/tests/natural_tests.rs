use crate::filter::parse_relative;
use chrono::{DateTime, Local, TimeZone, Utc};
use pretty_assertions::assert_eq;

fn now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 10, 15, 30, 0).unwrap()
}

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn parses_keywords() {
    assert_eq!(parse_relative("now", now()), Some(now().with_timezone(&Utc)));
    assert_eq!(parse_relative("Today", now()), Some(local(2024, 5, 10, 0, 0)));
    assert_eq!(parse_relative("yesterday", now()), Some(local(2024, 5, 9, 0, 0)));
}

#[test]
fn parses_amounts_ago() {
    assert_eq!(parse_relative("5 minutes ago", now()), Some(local(2024, 5, 10, 15, 25)));
    assert_eq!(parse_relative("2h ago", now()), Some(local(2024, 5, 10, 13, 30)));
    assert_eq!(parse_relative("1 day ago", now()), Some(local(2024, 5, 9, 15, 30)));
}

#[test]
fn other_text_is_not_relative() {
    assert_eq!(parse_relative("2024-05-01", now()), None);
    assert_eq!(parse_relative("ago", now()), None);
    assert_eq!(parse_relative("5 fortnights ago", now()), None);
}
