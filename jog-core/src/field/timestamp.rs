use crate::conf::ConfigError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Layouts carrying their own UTC offset.
const ZONED_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%d/%b/%Y:%H:%M:%S %z",
];

/// Layouts interpreted in the configured timezone.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S,%3f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d-%m-%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S%.f",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot parse timestamp '{value}': {reason}")]
pub struct TimestampError {
    pub value: String,
    pub reason: String,
}

impl TimestampError {
    fn new(value: &str, reason: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Timezone {
    Utc,
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Timezone {
    pub fn parse(field: &str, text: &str) -> Result<Self, ConfigError> {
        let trimmed = text.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "utc" | "z" | "gmt" => Ok(Timezone::Utc),
            "local" | "" => Ok(Timezone::Local),
            _ => trimmed
                .parse::<FixedOffset>()
                .map(Timezone::Fixed)
                .map_err(|_| ConfigError::InvalidTimezone {
                    field: field.to_string(),
                    timezone: text.to_string(),
                }),
        }
    }

    fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Timezone::Utc => Some(naive.and_utc()),
            Timezone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|t| t.with_timezone(&Utc)),
            Timezone::Fixed(offset) => offset
                .from_local_datetime(&naive)
                .single()
                .map(|t| t.with_timezone(&Utc)),
        }
    }
}

/// How the values of a time-typed field are turned into instants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeRule {
    format: Option<String>,
    timezone: Timezone,
}

impl TimeRule {
    pub fn new(
        field: &str,
        format: Option<&str>,
        timezone: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let format = format.map(str::trim).filter(|f| !f.is_empty());
        if let Some(format) = format {
            let invalid = StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
            if invalid {
                return Err(ConfigError::InvalidTimeFormat {
                    field: field.to_string(),
                    format: format.to_string(),
                });
            }
        }

        let timezone = match timezone {
            Some(tz) => Timezone::parse(field, tz)?,
            None => Timezone::default(),
        };

        Ok(Self {
            format: format.map(str::to_string),
            timezone,
        })
    }

    /// Auto-detecting rule in the local timezone.
    pub fn auto() -> Self {
        Self::default()
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }

    pub fn parse(&self, text: &str) -> Result<DateTime<Utc>, TimestampError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TimestampError::new(text, "empty value"));
        }

        match &self.format {
            Some(format) => self.parse_with(text, format),
            None => self.detect(text),
        }
    }

    fn parse_with(&self, text: &str, format: &str) -> Result<DateTime<Utc>, TimestampError> {
        if let Ok(zoned) = DateTime::parse_from_str(text, format) {
            return Ok(zoned.with_timezone(&Utc));
        }

        let naive = match NaiveDateTime::parse_from_str(text, format) {
            Ok(naive) => naive,
            Err(err) => NaiveDate::parse_from_str(text, format)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .ok_or_else(|| {
                    TimestampError::new(text, format!("does not match '{format}': {err}"))
                })?,
        };

        self.timezone
            .localize(naive)
            .ok_or_else(|| TimestampError::new(text, "does not exist in the configured timezone"))
    }

    fn detect(&self, text: &str) -> Result<DateTime<Utc>, TimestampError> {
        if let Some(epoch) = parse_epoch(text) {
            return Ok(epoch);
        }

        if let Ok(t) = DateTime::parse_from_rfc3339(text) {
            return Ok(t.with_timezone(&Utc));
        }
        if let Ok(t) = DateTime::parse_from_rfc2822(text) {
            return Ok(t.with_timezone(&Utc));
        }

        for layout in ZONED_LAYOUTS {
            if let Ok(t) = DateTime::parse_from_str(text, layout) {
                return Ok(t.with_timezone(&Utc));
            }
        }

        let naive = NAIVE_LAYOUTS
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
            .or_else(|| {
                DATE_LAYOUTS
                    .iter()
                    .find_map(|layout| NaiveDate::parse_from_str(text, layout).ok())
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            });

        naive
            .and_then(|naive| self.timezone.localize(naive))
            .ok_or_else(|| TimestampError::new(text, "unrecognized timestamp format"))
    }
}

/// Unix epoch in seconds, milliseconds, microseconds or nanoseconds,
/// chosen by digit count.
fn parse_epoch(text: &str) -> Option<DateTime<Utc>> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(fraction) = fraction {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    let value: i64 = whole.parse().ok()?;
    match whole.len() {
        1..=10 => {
            let nanos = fraction
                .map(|f| {
                    let digits: String = f.chars().chain(std::iter::repeat('0')).take(9).collect();
                    digits.parse::<u32>().unwrap_or(0)
                })
                .unwrap_or(0);
            DateTime::from_timestamp(value, nanos)
        }
        13 => DateTime::from_timestamp_millis(value),
        16 => DateTime::from_timestamp_micros(value),
        19 => Some(DateTime::from_timestamp_nanos(value)),
        _ => None,
    }
}
