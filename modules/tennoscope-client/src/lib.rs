pub mod error;

pub use error::{FetchError, Result};

use std::time::Duration;

use rquest::Impersonate;
use tracing::{info, warn};

/// Fixed per-request timeout. Exceeding it surfaces as `Transport`.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// One-shot client for the worldstate endpoint.
///
/// The endpoint sits behind an anti-bot edge that fingerprints the TLS
/// ClientHello (cipher order, extensions, groups, ALPN) and drops anything
/// that doesn't look like a real browser, so the client impersonates the
/// full Chrome 120 handshake profile rather than using a stock TLS stack.
pub struct WorldStateClient {
    client: rquest::Client,
}

impl WorldStateClient {
    pub fn new() -> Self {
        let client = rquest::Client::builder()
            .impersonate(Impersonate::Chrome120)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Fetch the raw worldstate body. One GET, no retries; every failure
    /// path terminates in a `FetchError` variant.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        info!(url, "Fetching worldstate via impersonated TLS handshake");

        let resp = self.client.get(url).send().await?;

        let status = resp.status().as_u16();
        if let Some(err) = status_failure(status) {
            if matches!(err, FetchError::AntiBotBlocked) {
                warn!(url, "Edge returned 403 despite TLS impersonation");
            }
            return Err(err);
        }

        Ok(resp.text().await?)
    }
}

impl Default for WorldStateClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify an HTTP status into a failure, or `None` for success.
/// 403 means the fingerprint passed but the IP reputation didn't — a
/// different remediation than a generic upstream error, so it gets its
/// own variant.
pub fn status_failure(status: u16) -> Option<FetchError> {
    match status {
        200 => None,
        403 => Some(FetchError::AntiBotBlocked),
        status => Some(FetchError::Http { status }),
    }
}
