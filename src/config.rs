//! Client configuration: base URL constants and the default header table.

use anyhow::{Context, Result};
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderName, HeaderValue};

/// Base URL of the public HAPI FHIR R4 test server.
///
/// The single slash after the scheme is kept as published. reqwest's URL
/// parser accepts it for `https` and normalizes it to `https://`.
pub const FHIR_BASE_URL: &str = "https:/hapi.fhir.org/baseR4/";

/// Base URL of a locally running HAPI FHIR JPA server.
pub const LOCAL_FHIR_BASE_URL: &str = "http://localhost:8080/fhir/";

/// Configuration a [`FhirClient`](crate::http::FhirClient) is built from.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Prefix prepended to every relative request path
    pub base_url: String,
    /// Headers sent with every request unless the request sets its own
    pub default_headers: HeaderMap,
}

impl ClientConfig {
    /// Configuration for `base_url` with the default header table.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_headers: default_headers(),
        }
    }

    /// Adds or replaces a default header.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .with_context(|| format!("Invalid header name: {}", name))?;
        let value = HeaderValue::from_str(value)
            .with_context(|| format!("Invalid value for header {}", name))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(FHIR_BASE_URL)
    }
}

/// `Cache-Control: no-cache`, so the HAPI server skips its search cache.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers
}
