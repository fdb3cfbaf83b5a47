use serde::Serialize;

use crate::{error::FormatError, MetricEvent};

/// One submission body for the v1 series endpoint. Built fresh per event,
/// never reused.
#[derive(Debug, Serialize)]
pub struct SubmissionDocument {
    pub series: Vec<Series>,
}

#[derive(Debug, Serialize)]
pub struct Series {
    pub metric: String,
    pub points: Vec<(i64, f64)>,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Gauge,
}

/// Builds the submission document for one event: exactly one series with
/// exactly one gauge point.
///
/// The sample is the first field's value; a non-finite value is rejected
/// here so it never reaches the network layer (serde_json would emit
/// `null` for it). Tags are rendered straight into their final `"key:value"`
/// form, so there is no separator to trim.
pub fn format(event: &MetricEvent) -> Result<SubmissionDocument, FormatError> {
    let (field, raw) = event.fields.first().ok_or(FormatError::MissingField)?;
    let value = raw
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FormatError::InvalidNumber {
            field: field.clone(),
            value: raw.clone(),
        })?;
    let time = event.unit.to_unix_seconds(event.timestamp);
    let tags = event
        .tags
        .iter()
        .map(|(key, value)| format!("{key}:{value}"))
        .collect();
    Ok(SubmissionDocument {
        series: vec![Series {
            metric: event.name.clone(),
            points: vec![(time, value)],
            metric_type: MetricType::Gauge,
            tags,
        }],
    })
}
