//! Process-wide FHIR client shared by every caller.

use std::sync::LazyLock;

use super::FhirClient;
use crate::config::ClientConfig;

/// Shared client for [`FHIR_BASE_URL`](crate::config::FHIR_BASE_URL) with
/// `Cache-Control: no-cache` on every request.
///
/// Built on first access and never replaced. Cloning the inner reqwest
/// client is cheap, but callers can simply borrow this one.
pub static FHIR_API: LazyLock<FhirClient> = LazyLock::new(|| {
    // Only fails if the TLS backend cannot be initialized.
    FhirClient::new(ClientConfig::default()).expect("failed to initialize shared FHIR client")
});

/// Returns the shared [`FhirClient`].
#[inline]
pub fn fhir_api() -> &'static FhirClient {
    &FHIR_API
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FHIR_BASE_URL;
    use reqwest::header::CACHE_CONTROL;

    #[test]
    fn test_shared_client_base_url() {
        assert_eq!(fhir_api().base_url(), FHIR_BASE_URL);
    }

    #[test]
    fn test_shared_client_cache_control() {
        assert_eq!(fhir_api().default_headers()[CACHE_CONTROL], "no-cache");
    }

    #[tokio::test]
    async fn test_shared_client_sends_cache_control() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/metadata")
            .match_header("cache-control", "no-cache")
            .with_status(200)
            .create_async()
            .await;

        // Absolute URLs bypass the base, so the shared client can reach the mock.
        fhir_api()
            .get(&format!("{}/metadata", server.url()))
            .send()
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[test]
    fn test_shared_client_is_singleton() {
        assert!(std::ptr::eq(fhir_api(), fhir_api()));
        assert!(std::ptr::eq(fhir_api(), &*FHIR_API));
    }

    #[test]
    fn test_shared_client_is_singleton_across_threads() {
        let addrs: Vec<usize> = (0..4)
            .map(|_| std::thread::spawn(|| fhir_api() as *const FhirClient as usize))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();

        let here = fhir_api() as *const FhirClient as usize;
        assert!(addrs.iter().all(|&addr| addr == here));
    }
}
