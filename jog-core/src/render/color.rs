use crate::conf::ConfigError;
use owo_colors::{OwoColorize, Style};

/// A parsed color specification such as `"red,bold"` or `"FgRed,OpBold"`.
///
/// An empty specification paints nothing.
#[derive(Debug, Clone, Default)]
pub struct ColorSpec {
    style: Option<Style>,
}

impl ColorSpec {
    pub fn parse(spec: &str) -> Result<Self, ConfigError> {
        let spec = spec.trim();
        let mut style = Style::new();
        let mut styled = false;

        for raw in spec.split(',') {
            let token = normalize(raw);
            if token.is_empty() || token == "default" || token == "none" {
                continue;
            }

            style = apply_token(style, &token).ok_or_else(|| ConfigError::InvalidColor {
                spec: spec.to_string(),
                token: raw.trim().to_string(),
            })?;
            styled = true;
        }

        Ok(Self {
            style: styled.then_some(style),
        })
    }

    pub fn is_plain(&self) -> bool {
        self.style.is_none()
    }

    pub fn paint(&self, text: &str, enabled: bool) -> String {
        match self.style {
            Some(style) if enabled && !text.is_empty() => text.style(style).to_string(),
            _ => text.to_string(),
        }
    }
}

fn normalize(token: &str) -> String {
    token
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn apply_token(style: Style, token: &str) -> Option<Style> {
    if let Some(color) = token.strip_prefix("bg").or_else(|| token.strip_prefix("on")) {
        let (bright, name) = split_bright(color);
        return background(style, name, bright);
    }

    let token = token.strip_prefix("fg").unwrap_or(token);
    let token = token.strip_prefix("op").unwrap_or(token);

    let with_option = match token {
        "bold" => Some(style.bold()),
        "dim" | "dimmed" | "faint" | "fuzzy" => Some(style.dimmed()),
        "italic" => Some(style.italic()),
        "underline" | "underscore" => Some(style.underline()),
        "blink" => Some(style.blink()),
        "reverse" | "reversed" => Some(style.reversed()),
        "hidden" | "concealed" => Some(style.hidden()),
        "strikethrough" => Some(style.strikethrough()),
        _ => None,
    };
    if with_option.is_some() {
        return with_option;
    }

    let (bright, name) = split_bright(token);
    foreground(style, name, bright)
}

fn split_bright(token: &str) -> (bool, &str) {
    if let Some(rest) = token.strip_prefix("bright") {
        (true, rest)
    } else if let Some(rest) = token.strip_prefix("light") {
        (true, rest)
    } else {
        (false, token)
    }
}

fn foreground(style: Style, name: &str, bright: bool) -> Option<Style> {
    Some(match (name, bright) {
        ("black", false) => style.black(),
        ("black", true) | ("gray", _) | ("grey", _) => style.bright_black(),
        ("red", false) => style.red(),
        ("red", true) => style.bright_red(),
        ("green", false) => style.green(),
        ("green", true) => style.bright_green(),
        ("yellow", false) => style.yellow(),
        ("yellow", true) => style.bright_yellow(),
        ("blue", false) => style.blue(),
        ("blue", true) => style.bright_blue(),
        ("magenta", false) => style.magenta(),
        ("magenta", true) => style.bright_magenta(),
        ("cyan", false) => style.cyan(),
        ("cyan", true) => style.bright_cyan(),
        ("white", false) => style.white(),
        ("white", true) => style.bright_white(),
        _ => return None,
    })
}

fn background(style: Style, name: &str, bright: bool) -> Option<Style> {
    Some(match (name, bright) {
        ("black", false) => style.on_black(),
        ("black", true) | ("gray", _) | ("grey", _) => style.on_bright_black(),
        ("red", false) => style.on_red(),
        ("red", true) => style.on_bright_red(),
        ("green", false) => style.on_green(),
        ("green", true) => style.on_bright_green(),
        ("yellow", false) => style.on_yellow(),
        ("yellow", true) => style.on_bright_yellow(),
        ("blue", false) => style.on_blue(),
        ("blue", true) => style.on_bright_blue(),
        ("magenta", false) => style.on_magenta(),
        ("magenta", true) => style.on_bright_magenta(),
        ("cyan", false) => style.on_cyan(),
        ("cyan", true) => style.on_bright_cyan(),
        ("white", false) => style.on_white(),
        ("white", true) => style.on_bright_white(),
        _ => return None,
    })
}
