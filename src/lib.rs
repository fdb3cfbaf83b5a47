pub mod config;
pub mod error;
pub mod exporter;
pub mod format;

use crate::error::ExportError;

/// Granularity of a [`MetricEvent`] timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimeUnit {
    /// Whole seconds since the epoch; sub-second precision is truncated,
    /// not rounded.
    pub fn to_unix_seconds(self, value: i64) -> i64 {
        match self {
            TimeUnit::Seconds => value,
            TimeUnit::Milliseconds => value / 1_000,
            TimeUnit::Microseconds => value / 1_000_000,
            TimeUnit::Nanoseconds => value / 1_000_000_000,
        }
    }
}

/// One metric observation handed over by an upstream publisher.
///
/// `fields` and `tags` keep insertion order. The first field's value is the
/// gauge sample; any further fields are ignored.
#[derive(Debug, Clone)]
pub struct MetricEvent {
    pub name: String,
    pub timestamp: i64,
    pub unit: TimeUnit,
    pub fields: Vec<(String, String)>,
    pub tags: Vec<(String, String)>,
}

impl MetricEvent {
    pub fn new(name: &str, timestamp: i64, unit: TimeUnit) -> Self {
        Self {
            name: name.into(),
            timestamp,
            unit,
            fields: vec![],
            tags: vec![],
        }
    }
}

/// Capability a publisher holds to deliver events, one call per event.
pub trait MetricSink {
    fn submit(&self, event: &MetricEvent) -> Result<(), ExportError>;
}
