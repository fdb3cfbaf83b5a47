use std::time::Duration;

use tracing::{debug, warn};

use crate::{
    config::ExporterConfig,
    error::{ExportError, TransmitError},
    format::{format, SubmissionDocument},
    MetricEvent, MetricSink,
};

/// Upper bound on one submission; a stalled connection must not block the
/// publisher forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pushes gauge samples to the Datadog series endpoint.
///
/// Holds no mutable state, so one exporter may be shared across threads;
/// each submission is independent of the previous one.
#[derive(Debug)]
pub struct DatadogExporter {
    client: ureq::Agent,
    config: ExporterConfig,
}

impl DatadogExporter {
    pub fn new(config: ExporterConfig) -> Self {
        let client = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self { client, config }
    }

    /// Blocking I/O
    ///
    /// A non-2xx response is read, logged and treated as success: this
    /// component has no retry machinery and its callers are told to drop
    /// failed events, so only transport-level failures surface as errors.
    fn send(&self, doc: &SubmissionDocument) -> Result<(), TransmitError> {
        let body = serde_json::to_string(doc)?;
        let resp = self
            .client
            .post(&self.config.endpoint())
            .set("Content-Type", "application/json")
            .send_string(&body);
        match resp {
            Ok(resp) => {
                debug!(status = resp.status(), "series accepted");
                Ok(())
            }
            Err(ureq::Error::Status(status, resp)) => {
                warn!(
                    status,
                    reason = resp.status_text(),
                    "series rejected by ingestion endpoint"
                );
                Ok(())
            }
            Err(ureq::Error::Transport(err)) => Err(TransmitError::Network(err)),
        }
    }

    /// Entry point for publishers that cannot act on a failed submission:
    /// the failure is logged and the event dropped, nothing propagates.
    pub fn export(&self, event: &MetricEvent) {
        if let Err(err) = self.submit(event) {
            warn!(metric = %event.name, error = %err, "metric dropped");
        }
    }
}

impl MetricSink for DatadogExporter {
    fn submit(&self, event: &MetricEvent) -> Result<(), ExportError> {
        let doc = format(event)?;
        self.send(&doc)?;
        Ok(())
    }
}
