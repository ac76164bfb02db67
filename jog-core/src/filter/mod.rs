//! Record filters.
//!
//! Only parsed records are filtered; blank and unknown lines always pass so
//! that stack traces and banners interleaved with JSON stay visible.

mod level;
mod natural;
mod time;

#[cfg(test)]
mod tests;

pub use level::{LEVEL_FIELD, LevelFilter};
pub use natural::parse_relative;
pub use time::{TIMESTAMP_FIELD, TimeFilter};

use crate::conf::ConfigError;
use crate::error::JogError;
use crate::field::FieldSchema;
use crate::record::{Record, RecordKind};
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    pub levels: Vec<String>,
    pub before: Option<String>,
    pub after: Option<String>,
}

#[derive(Debug, Default)]
pub struct Filter {
    level: Option<LevelFilter>,
    time: Option<TimeFilter>,
}

impl Filter {
    pub fn new(schema: &FieldSchema, request: &FilterRequest) -> Result<Self, ConfigError> {
        Self::with_clock(schema, request, Local::now())
    }

    /// Like [`Filter::new`], resolving relative expressions against `now`.
    pub fn with_clock(
        schema: &FieldSchema,
        request: &FilterRequest,
        now: DateTime<Local>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            level: LevelFilter::new(schema, &request.levels)?,
            time: TimeFilter::new(
                schema,
                request.before.as_deref(),
                request.after.as_deref(),
                now,
            )?,
        })
    }

    pub fn is_active(&self) -> bool {
        self.level.is_some() || self.time.is_some()
    }

    pub fn level(&self) -> Option<&LevelFilter> {
        self.level.as_ref()
    }

    pub fn time(&self) -> Option<&TimeFilter> {
        self.time.as_ref()
    }

    pub fn matches(&self, record: &Record) -> Result<bool, JogError> {
        if record.kind != RecordKind::Parsed {
            return Ok(true);
        }

        if let Some(level) = &self.level {
            if !level.matches(record) {
                return Ok(false);
            }
        }

        match &self.time {
            Some(time) => time.matches(record),
            None => Ok(true),
        }
    }
}
