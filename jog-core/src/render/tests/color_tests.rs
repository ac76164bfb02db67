use crate::conf::ConfigError;
use crate::render::ColorSpec;
use pretty_assertions::assert_eq;

#[test]
fn empty_and_default_specs_are_plain() {
    assert!(ColorSpec::parse("").unwrap().is_plain());
    assert!(ColorSpec::parse("default").unwrap().is_plain());
    assert!(ColorSpec::parse(" , none").unwrap().is_plain());
}

#[test]
fn accepts_token_spellings() {
    for spec in [
        "red",
        "bright_blue",
        "Light-Green",
        "gray",
        "bg_yellow",
        "onBlue",
        "FgRed,BgBlue,OpBold",
        "red, bold, underline",
    ] {
        let parsed = ColorSpec::parse(spec);
        assert!(parsed.is_ok(), "{spec}: {parsed:?}");
        assert!(!parsed.unwrap().is_plain(), "{spec}");
    }
}

#[test]
fn unknown_token_is_rejected() {
    let err = ColorSpec::parse("red,sparkly").unwrap_err();

    match err {
        ConfigError::InvalidColor { spec, token } => {
            assert_eq!(spec, "red,sparkly");
            assert_eq!(token, "sparkly");
        }
        other => panic!("Expected InvalidColor, got {:?}", other),
    }
}

#[test]
fn paint_respects_the_enabled_flag() {
    let red = ColorSpec::parse("red").unwrap();

    assert_eq!(red.paint("x", false), "x");
    assert_ne!(red.paint("x", true), "x");
    assert!(red.paint("x", true).contains('x'));
}

#[test]
fn empty_text_is_never_painted() {
    let red = ColorSpec::parse("red").unwrap();

    assert_eq!(red.paint("", true), "");
}
