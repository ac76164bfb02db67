use crate::cli::view::ViewArgs;
use crate::logging::ColorMode;
use clap::{CommandFactory, Parser};
use pretty_assertions::assert_eq;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    view: ViewArgs,
}

#[test]
fn explicit_color_modes_override_the_config() {
    assert!(ColorMode::Always.resolve(false));
    assert!(!ColorMode::Never.resolve(true));
    assert!(!ColorMode::Auto.resolve(false));
}

#[test]
fn color_help_says_it_overrides_the_config() {
    // Arrange
    let mut command = TestCli::command();

    // Act
    let help = command.render_long_help().to_string();
    let help = help.split_whitespace().collect::<Vec<_>>().join(" ");

    // Assert
    assert!(help.contains("override the config"), "{help}");
    assert!(help.contains("Color even when the config disables it"), "{help}");
}

#[test]
fn parses_view_flags() {
    // Act
    let cli = TestCli::try_parse_from([
        "jog", "-f", "-n", "20", "-l", "warn,error", "--color", "always", "app.log",
    ])
    .unwrap();

    // Assert
    let options = cli.view.tail_options();
    assert!(options.follow);
    assert_eq!(options.lines, Some(20));
    assert_eq!(cli.view.filter_request().levels, vec!["warn", "error"]);
    assert_eq!(cli.view.color, ColorMode::Always);
    assert_eq!(cli.view.file.as_deref(), Some(std::path::Path::new("app.log")));
}
