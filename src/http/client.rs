//! HTTP client bound to a base URL and a default header set.

use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Method, RequestBuilder, header::HeaderMap};

use crate::config::ClientConfig;

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Preconfigured handle for talking to a FHIR server.
///
/// Every request is sent to `base_url` joined with the given path and carries
/// the configured default headers. Request failures come straight from
/// reqwest; this type adds no error handling of its own.
#[derive(Debug, Clone)]
pub struct FhirClient {
    client: Client,
    base_url: String,
    default_headers: HeaderMap,
}

impl FhirClient {
    /// Builds a client from `config`.
    ///
    /// Nothing goes over the network here, and the base URL is not validated;
    /// a malformed URL only surfaces when a request is sent.
    #[tracing::instrument(skip(config), fields(base_url = %config.base_url))]
    pub fn new(config: ClientConfig) -> Result<Self> {
        let ClientConfig {
            base_url,
            default_headers,
        } = config;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers.clone())
            .build()
            .context("Failed to build HTTP client")?;

        debug!(
            "Created FHIR client for {} with {} default header(s)",
            base_url,
            default_headers.len()
        );

        Ok(Self {
            client,
            base_url,
            default_headers,
        })
    }

    /// Returns the base URL every relative path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the headers applied to every request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Resolves `path` against the base URL.
    ///
    /// Up to two trailing slashes are dropped from the base and all leading
    /// slashes from the path before joining them with a single `/`.
    /// Absolute URLs (`scheme://...` or `//host/...`) are returned unchanged.
    pub fn url(&self, path: &str) -> String {
        if path.is_empty() {
            return self.base_url.clone();
        }
        if is_absolute_url(path) {
            return path.to_string();
        }
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        let base = base.strip_suffix('/').unwrap_or(base);
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Starts a request with `method` to `path`, resolved against the base URL.
    #[tracing::instrument(skip(self))]
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    pub fn head(&self, path: &str) -> RequestBuilder {
        self.request(Method::HEAD, path)
    }
}

/// True for `scheme://...` and protocol-relative `//...` URLs.
fn is_absolute_url(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }
    let Some((scheme, rest)) = path.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_alpha
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && rest.starts_with("//")
}
