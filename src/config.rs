use crate::error::ConfigError;

/// Datadog v1 series ingestion endpoint.
pub const DEFAULT_BASE_URL: &str = "https://app.datadoghq.com/api/v1/series";

/// Immutable exporter configuration, built once and held for the process
/// lifetime.
#[derive(Clone)]
pub struct ExporterConfig {
    api_key: String,
    base_url: String,
}

impl ExporterConfig {
    pub fn new(api_key: &str) -> Result<Self, ConfigError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the exporter at a different ingestion host, e.g. another
    /// Datadog site or a local stub.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, ConfigError> {
        if api_key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if !api_key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::MalformedApiKey);
        }
        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Full submission URL, key included as a query parameter. The charset
    /// check in the constructor keeps the key query-safe without an
    /// urlencoding pass.
    pub fn endpoint(&self) -> String {
        format!("{}?api_key={}", self.base_url, self.api_key)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl core::fmt::Debug for ExporterConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExporterConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
