//! HTTP client for the FHIR server and the process-wide shared instance.

mod client;
mod shared;

pub use client::FhirClient;
pub use shared::{FHIR_API, fhir_api};
