use crate::conf::Config;
use crate::field::{FieldDescriptor, FieldSchema, OthersStyle, Replacements};
use crate::record::{RecordKind, RecordParser};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn parser() -> RecordParser {
    let schema = FieldSchema::new(
        vec![
            FieldDescriptor::new("level", vec!["severity".to_string()], false),
            FieldDescriptor::new("message", vec!["msg".to_string()], false),
        ],
        OthersStyle::default(),
    )
    .unwrap();
    RecordParser::new(Arc::new(schema), Replacements::new([("\\n", "\n")]))
}

fn standard_names(record: &crate::record::Record) -> Vec<&str> {
    record.standards.iter().map(|(f, _)| f.name()).collect()
}

#[test]
fn splits_prefix_and_json_body() {
    // Arrange
    let parser = parser();

    // Act
    let record = parser.parse(1, r#"ok {"level":"WARN","message":"hi"}"#);

    // Assert
    assert_eq!(record.kind, RecordKind::Parsed);
    assert_eq!(record.prefix.as_deref(), Some("ok "));
    assert_eq!(standard_names(&record), vec!["level", "message"]);
    assert_eq!(record.standard("message").map(|v| v.text()), Some("hi"));
    assert!(record.others.is_empty());
}

#[test]
fn plain_text_is_unknown() {
    let record = parser().parse(3, "Exception in thread main");

    assert_eq!(record.kind, RecordKind::Unknown);
    assert_eq!(record.raw, "Exception in thread main");
    assert_eq!(record.line_no, 3);
}

#[test]
fn whitespace_only_line_is_blank() {
    let record = parser().parse(1, "   \t");

    assert!(record.is_blank());
    assert!(record.standards.is_empty());
}

#[test]
fn broken_json_is_unknown() {
    let record = parser().parse(1, r#"{"level": "info", "#);

    assert!(record.is_unknown());
}

#[test]
fn non_object_json_is_unknown() {
    let record = parser().parse(1, "[1, {\"a\": 2}]");

    assert!(record.is_unknown());
}

#[test]
fn escaped_quotes_are_repaired() {
    // Arrange
    let line = r#"{\"level\":\"info\",\"msg\":\"started\"}"#;

    // Act
    let record = parser().parse(1, line);

    // Assert
    assert_eq!(record.kind, RecordKind::Parsed);
    assert_eq!(record.standard("message").map(|v| v.text()), Some("started"));
}

#[test]
fn aliases_resolve_case_insensitively_and_unmatched_keys_are_others() {
    let record = parser().parse(1, r#"{"SEVERITY":"error","user":"bob","count":3}"#);

    assert_eq!(standard_names(&record), vec!["level"]);
    let others: Vec<(&str, &str)> = record
        .others
        .iter()
        .map(|(k, v)| (k.as_str(), v.text()))
        .collect();
    assert_eq!(others, vec![("count", "3"), ("user", "bob")]);
}

#[test]
fn standard_fields_keep_input_order() {
    let record = parser().parse(1, r#"{"msg":"m","level":"info"}"#);

    assert_eq!(standard_names(&record), vec!["message", "level"]);
}

#[test]
fn replacements_apply_to_values() {
    let record = parser().parse(1, r#"{"msg":"a\\nb"}"#);

    assert_eq!(record.standard("message").map(|v| v.text()), Some("a\nb"));
}

#[test]
fn trailing_whitespace_is_trimmed() {
    let record = parser().parse(1, "{\"msg\":\"x\"}  \r");

    assert_eq!(record.raw, "{\"msg\":\"x\"}");
    assert!(record.prefix.is_none());
}

#[test]
fn startup_marker_flags_the_record() {
    let parser = parser().with_startup_marker("Started Application in");

    let startup = parser.parse(1, r#"{"msg":"Started Application in 3.2 seconds"}"#);
    let regular = parser.parse(2, r#"{"msg":"ready"}"#);

    assert!(startup.startup);
    assert!(!regular.startup);
}

#[test]
fn parsing_is_deterministic() {
    let parser = parser();
    let line = r#"pre {"level":"info","b":1,"a":2}"#;

    let first = parser.parse(5, line);
    let second = parser.parse(5, line);

    assert_eq!(first.raw, second.raw);
    assert_eq!(first.prefix, second.prefix);
    assert_eq!(standard_names(&first), standard_names(&second));
    assert_eq!(first.others, second.others);
}

#[test]
fn builds_from_default_config() {
    // Arrange
    let cfg = Config::default();
    let schema = Arc::new(FieldSchema::from_config(&cfg.fields).unwrap());

    // Act
    let parser = RecordParser::from_config(&cfg, Arc::clone(&schema)).unwrap();
    let record = parser.parse(1, r#"{"anything":"x"}"#);

    // Assert
    assert!(Arc::ptr_eq(parser.schema(), &schema));
    assert_eq!(record.other("anything").map(|v| v.text()), Some("x"));
}
