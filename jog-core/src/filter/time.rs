use crate::conf::ConfigError;
use crate::error::JogError;
use crate::field::{FieldDescriptor, FieldSchema};
use crate::filter::natural::parse_relative;
use crate::record::Record;
use chrono::{DateTime, Local, Utc};
use std::sync::Arc;

pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Accepts records strictly inside `(after, before)`.
#[derive(Debug)]
pub struct TimeFilter {
    field: Arc<FieldDescriptor>,
    before: Option<DateTime<Utc>>,
    after: Option<DateTime<Utc>>,
}

impl TimeFilter {
    /// `None` when neither bound was requested.
    pub fn new(
        schema: &FieldSchema,
        before: Option<&str>,
        after: Option<&str>,
        now: DateTime<Local>,
    ) -> Result<Option<Self>, ConfigError> {
        if before.is_none() && after.is_none() {
            return Ok(None);
        }

        let field = schema
            .field(TIMESTAMP_FIELD)
            .cloned()
            .ok_or_else(|| ConfigError::MissingFilterField {
                field: TIMESTAMP_FIELD.to_string(),
            })?;

        let before = before.map(|e| resolve_bound(&field, e, now)).transpose()?;
        let after = after.map(|e| resolve_bound(&field, e, now)).transpose()?;

        if let (Some(b), Some(a)) = (before, after) {
            if b < a {
                return Err(ConfigError::ContradictoryTimeRange {
                    before: b.to_rfc3339(),
                    after: a.to_rfc3339(),
                });
            }
        }

        Ok(Some(Self {
            field,
            before,
            after,
        }))
    }

    pub fn before(&self) -> Option<DateTime<Utc>> {
        self.before
    }

    pub fn after(&self) -> Option<DateTime<Utc>> {
        self.after
    }

    /// A record without a timestamp never matches; one whose timestamp
    /// cannot be parsed is an error.
    pub fn matches(&self, record: &Record) -> Result<bool, JogError> {
        let Some(value) = record.standard(self.field.name()) else {
            return Ok(false);
        };

        let at = self
            .field
            .parse_timestamp(value.text())
            .map_err(|source| JogError::Timestamp {
                line_no: record.line_no,
                source,
            })?;

        let before_ok = self.before.is_none_or(|b| at < b);
        let after_ok = self.after.is_none_or(|a| at > a);
        Ok(before_ok && after_ok)
    }
}

fn resolve_bound(
    field: &FieldDescriptor,
    expr: &str,
    now: DateTime<Local>,
) -> Result<DateTime<Utc>, ConfigError> {
    if let Some(at) = parse_relative(expr, now) {
        return Ok(at);
    }

    field
        .parse_timestamp(expr)
        .map_err(|e| ConfigError::InvalidTimeExpr {
            expr: expr.to_string(),
            reason: e.reason,
        })
}
