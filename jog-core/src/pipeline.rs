use crate::conf::{Config, ConfigError};
use crate::error::JogError;
use crate::field::FieldSchema;
use crate::filter::{Filter, FilterRequest};
use crate::record::RecordParser;
use crate::render::Renderer;
use crate::tail::LineHandler;
use std::io::Write;
use std::sync::Arc;

/// Per-line processing: parse, filter, then render or pass through.
pub struct Pipeline<W> {
    parser: RecordParser,
    filter: Filter,
    renderer: Renderer,
    raw_json: bool,
    out: W,
}

impl<W: Write> Pipeline<W> {
    pub fn new(parser: RecordParser, filter: Filter, renderer: Renderer, out: W) -> Self {
        Self {
            parser,
            filter,
            renderer,
            raw_json: false,
            out,
        }
    }

    /// Builds the schema, parser, filter and renderer described by `cfg`.
    /// `colorize` is the effective setting and overrides `cfg.colorization`.
    pub fn from_config(
        cfg: &Config,
        request: &FilterRequest,
        colorize: bool,
        out: W,
    ) -> Result<Self, ConfigError> {
        let schema = Arc::new(FieldSchema::from_config(&cfg.fields)?);
        let parser = RecordParser::from_config(cfg, Arc::clone(&schema))?;
        let filter = Filter::new(&schema, request)?;
        let renderer = Renderer::from_config(cfg, schema, colorize)?;

        Ok(Self::new(parser, filter, renderer, out))
    }

    /// Write accepted lines unchanged instead of rendering them.
    pub fn with_raw_json(mut self, raw_json: bool) -> Self {
        self.raw_json = raw_json;
        self
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn process(&mut self, line_no: usize, raw: &str) -> Result<(), JogError> {
        let record = self.parser.parse(line_no, raw);
        if !self.filter.matches(&record)? {
            return Ok(());
        }

        if self.raw_json {
            return self.emit(raw);
        }

        let text = self.renderer.render(&record);
        if text.is_empty() {
            return Ok(());
        }
        self.emit(&text)
    }

    fn emit(&mut self, text: &str) -> Result<(), JogError> {
        writeln!(self.out, "{text}").map_err(|source| JogError::Write { source })
    }
}

impl<W: Write> LineHandler for Pipeline<W> {
    fn handle(&mut self, line_no: usize, raw: &str) -> Result<(), JogError> {
        self.process(line_no, raw)
    }
}
