//! Shared, preconfigured HTTP client for a FHIR server.
//!
//! ```no_run
//! # async fn run() -> Result<(), reqwest::Error> {
//! let _response = fhir_api::http::fhir_api().get("Patient?_count=1").send().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod http;

pub use config::{ClientConfig, FHIR_BASE_URL, LOCAL_FHIR_BASE_URL};
pub use http::{FHIR_API, FhirClient, fhir_api};
