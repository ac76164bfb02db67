use crate::conf::{Config, ConfigError};
use crate::field::{AnyValue, FieldDescriptor, FieldSchema};
use crate::record::{Record, RecordKind};
use crate::render::element::{Element, StartupStyle};
use crate::render::template::Template;
use std::collections::HashMap;
use std::sync::Arc;

pub const OTHERS_PLACEHOLDER: &str = "others";
const OTHERS_DELIMITER: &str = ", ";

/// Renders parsed records into output lines.
#[derive(Debug)]
pub struct Renderer {
    schema: Arc<FieldSchema>,
    template: Template,
    colorize: bool,
    line_no: Element,
    unknown_line: Element,
    prefix: Element,
    startup: StartupStyle,
}

impl Renderer {
    pub fn new(schema: Arc<FieldSchema>, template: Template, colorize: bool) -> Self {
        Self {
            schema,
            template,
            colorize,
            line_no: Element::default(),
            unknown_line: Element::default(),
            prefix: Element::default(),
            startup: StartupStyle::default(),
        }
    }

    /// `colorize` is the effective setting: the config flag combined with
    /// the command line and terminal detection.
    pub fn from_config(
        cfg: &Config,
        schema: Arc<FieldSchema>,
        colorize: bool,
    ) -> Result<Self, ConfigError> {
        let mut renderer = Self::new(schema, Template::parse(&cfg.pattern), colorize);
        renderer.line_no = Element::from_config(&cfg.line_no)?;
        renderer.unknown_line = Element::from_config(&cfg.unknown_line)?;
        renderer.prefix = Element::from_config(&cfg.prefix)?;
        renderer.startup = StartupStyle::from_config(&cfg.startup_line)?;
        Ok(renderer)
    }

    pub fn with_line_no(mut self, element: Element) -> Self {
        self.line_no = element;
        self
    }

    pub fn with_unknown_line(mut self, element: Element) -> Self {
        self.unknown_line = element;
        self
    }

    pub fn with_prefix(mut self, element: Element) -> Self {
        self.prefix = element;
        self
    }

    pub fn with_startup(mut self, startup: StartupStyle) -> Self {
        self.startup = startup;
        self
    }

    /// Renders a record. An empty result means nothing should be printed.
    pub fn render(&self, record: &Record) -> String {
        match record.kind {
            RecordKind::Blank => String::new(),
            RecordKind::Unknown => self.unknown_line.render(&record.raw, self.colorize),
            RecordKind::Parsed => self.render_parsed(record),
        }
    }

    fn render_parsed(&self, record: &Record) -> String {
        // The startup line is painted as a whole, not per field.
        let colorize = self.colorize && !record.startup;
        let mut out = String::new();

        if record.startup {
            out.push_str(&self.startup.before);
        }

        out.push_str(&self.line_no.render(&record.line_no.to_string(), colorize));

        if let Some(prefix) = &record.prefix {
            out.push_str(&self.prefix.render(prefix, colorize));
        }

        let mut rendered: HashMap<&str, String> = HashMap::new();
        for (field, value) in &record.standards {
            rendered
                .entry(field.name())
                .or_insert_with(|| render_field(field, value, colorize));
        }
        rendered
            .entry(OTHERS_PLACEHOLDER)
            .or_insert_with(|| self.render_others(record, colorize));

        out.push_str(
            &self
                .template
                .render(|name| rendered.get(name).map(String::as_str)),
        );

        if record.startup {
            out.push_str(&self.startup.after);
            return self.startup.color.paint(&out, self.colorize);
        }

        out
    }

    /// `name=value, name=value` for keys outside the schema.
    fn render_others(&self, record: &Record, colorize: bool) -> String {
        let style = self.schema.others();

        record
            .others
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}{}{}",
                    style.name.paint(name, colorize),
                    style.separator_color.paint(&style.separator, colorize),
                    style.value.paint(value.text(), colorize),
                )
            })
            .collect::<Vec<_>>()
            .join(OTHERS_DELIMITER)
    }
}

fn render_field(field: &FieldDescriptor, value: &AnyValue, colorize: bool) -> String {
    field
        .display_color(value)
        .paint(&field.display_text(value), colorize)
}
