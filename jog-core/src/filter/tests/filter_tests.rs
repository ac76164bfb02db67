use crate::conf::{ConfigError, ConfigSource, load_config_str};
use crate::error::JogError;
use crate::field::FieldSchema;
use crate::filter::{Filter, FilterRequest};
use crate::record::RecordParser;
use chrono::{Local, TimeZone};
use pretty_assertions::assert_eq;
use std::sync::Arc;

const CONFIG: &str = r#"
fields:
  standards:
    timestamp:
      alias: [ts]
      type: time
      timezone: UTC
    level:
      enums:
        default: info
        values:
          debug: {}
          info: {}
          warn: { alias: [warning] }
          error: { alias: [err] }
"#;

fn parser() -> RecordParser {
    let loaded = load_config_str(CONFIG, ConfigSource::Embedded).unwrap();
    let schema = FieldSchema::from_config(&loaded.config.fields).unwrap();
    RecordParser::new(Arc::new(schema), Default::default())
}

fn request(levels: &[&str], before: Option<&str>, after: Option<&str>) -> FilterRequest {
    FilterRequest {
        levels: levels.iter().map(|l| l.to_string()).collect(),
        before: before.map(str::to_string),
        after: after.map(str::to_string),
    }
}

fn filter(parser: &RecordParser, request: &FilterRequest) -> Result<Filter, ConfigError> {
    let now = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    Filter::with_clock(parser.schema(), request, now)
}

fn matches(filter: &Filter, parser: &RecordParser, line: &str) -> bool {
    filter.matches(&parser.parse(1, line)).unwrap()
}

//-----------------------------------------------------------------------------
// Level
//-----------------------------------------------------------------------------
#[test]
fn empty_request_accepts_everything() {
    let parser = parser();
    let filter = filter(&parser, &FilterRequest::default()).unwrap();

    assert!(!filter.is_active());
    assert!(matches(&filter, &parser, r#"{"level":"debug"}"#));
}

#[test]
fn level_filter_matches_canonical_values_and_aliases() {
    // Arrange
    let parser = parser();
    let filter = filter(&parser, &request(&["WARNING", "err"], None, None)).unwrap();

    // Act
    let warn = matches(&filter, &parser, r#"{"level":"warn"}"#);
    let error = matches(&filter, &parser, r#"{"level":"ERROR"}"#);
    let info = matches(&filter, &parser, r#"{"level":"info"}"#);

    // Assert
    let wanted = filter.level().map(|l| l.wanted().to_vec()).unwrap_or_default();
    assert_eq!(wanted, vec!["warn".to_string(), "error".to_string()]);
    assert_eq!((warn, error, info), (true, true, false));
}

#[test]
fn unresolvable_record_level_uses_the_default() {
    let parser = parser();
    let filter = filter(&parser, &request(&["info"], None, None)).unwrap();

    assert!(matches(&filter, &parser, r#"{"level":"chatty"}"#));
}

#[test]
fn record_without_level_does_not_match() {
    let parser = parser();
    let filter = filter(&parser, &request(&["info"], None, None)).unwrap();

    assert!(!matches(&filter, &parser, r#"{"msg":"no level"}"#));
}

#[test]
fn unknown_requested_level_is_rejected() {
    let parser = parser();

    let err = filter(&parser, &request(&["verbose"], None, None)).unwrap_err();

    assert!(matches!(err, ConfigError::UnknownLevel { level } if level == "verbose"));
}

#[test]
fn unknown_and_blank_lines_bypass_filters() {
    let parser = parser();
    let filter = filter(&parser, &request(&["error"], Some("now"), None)).unwrap();

    assert!(matches(&filter, &parser, "at com.example.Main.run(Main.java:10)"));
    assert!(matches(&filter, &parser, ""));
}

//-----------------------------------------------------------------------------
// Time
//-----------------------------------------------------------------------------
#[test]
fn time_bounds_are_strict() {
    // Arrange
    let parser = parser();
    let filter = filter(
        &parser,
        &request(&[], Some("2024-05-01T10:00:00Z"), Some("2024-05-01T09:00:00Z")),
    )
    .unwrap();

    // Act
    let at_after = matches(&filter, &parser, r#"{"ts":"2024-05-01T09:00:00Z"}"#);
    let inside = matches(&filter, &parser, r#"{"ts":"2024-05-01T09:30:00Z"}"#);
    let at_before = matches(&filter, &parser, r#"{"ts":"2024-05-01T10:00:00Z"}"#);

    // Assert
    assert_eq!((at_after, inside, at_before), (false, true, false));
}

#[test]
fn before_earlier_than_after_is_rejected() {
    let parser = parser();

    let err = filter(
        &parser,
        &request(&[], Some("2024-05-01T09:00:00Z"), Some("2024-05-01T10:00:00Z")),
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::ContradictoryTimeRange { .. }));
}

#[test]
fn relative_bounds_use_the_clock() {
    let parser = parser();
    let filter = filter(&parser, &request(&[], None, Some("1 hour ago"))).unwrap();

    let expected = Local
        .with_ymd_and_hms(2024, 5, 1, 11, 0, 0)
        .unwrap()
        .with_timezone(&chrono::Utc);
    assert_eq!(filter.time().and_then(|t| t.after()), Some(expected));
}

#[test]
fn invalid_bound_is_rejected() {
    let parser = parser();

    let err = filter(&parser, &request(&[], Some("next tuesday"), None)).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidTimeExpr { expr, .. } if expr == "next tuesday"));
}

#[test]
fn record_without_timestamp_does_not_match() {
    let parser = parser();
    let filter = filter(&parser, &request(&[], None, Some("2024-01-01"))).unwrap();

    assert!(!matches(&filter, &parser, r#"{"msg":"x"}"#));
}

#[test]
fn unparseable_record_timestamp_is_an_error() {
    // Arrange
    let parser = parser();
    let filter = filter(&parser, &request(&[], None, Some("2024-01-01"))).unwrap();
    let record = parser.parse(9, r#"{"ts":"not a time"}"#);

    // Act
    let err = filter.matches(&record).unwrap_err();

    // Assert
    assert!(matches!(err, JogError::Timestamp { line_no: 9, .. }));
}

#[test]
fn level_and_time_combine() {
    let parser = parser();
    let filter = filter(&parser, &request(&["error"], None, Some("2024-05-01T00:00:00Z"))).unwrap();

    assert!(matches(
        &filter,
        &parser,
        r#"{"level":"error","ts":"2024-05-01T01:00:00Z"}"#
    ));
    assert!(!matches(
        &filter,
        &parser,
        r#"{"level":"info","ts":"2024-05-01T01:00:00Z"}"#
    ));
    assert!(!matches(
        &filter,
        &parser,
        r#"{"level":"error","ts":"2024-04-30T23:00:00Z"}"#
    ));
}
