//! HTTP clients for the upstream vulnerability databases.
//!
//! One client type per upstream, each a thin wrapper over a blocking
//! `reqwest` client plus a config struct carrying its base URL and timeout.
//! A search issues at most one GET per client; there are no retries and no
//! caching.

mod cvedb;
mod gateway;
mod mitre;
mod nvd;

pub use cvedb::{CvedbClient, CvedbClientConfig};
pub use gateway::{GatewayClient, GatewayClientConfig, GatewayDetail, GatewayHit, GatewayResponse};
pub use mitre::{MitreClient, MitreClientConfig, MitreRecord};
pub use nvd::{NvdClient, NvdClientConfig, NvdSearchResponse, SearchHit};

use crate::error::{CvescopeError, LookupErrorKind};
use std::time::Duration;

/// Default request timeout shared by all clients.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a blocking HTTP client with the crate's user agent.
pub(crate) fn build_client(timeout: Duration) -> crate::error::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .map_err(|e| network_error("Failed to create HTTP client", &e))
}

/// Helper to convert reqwest errors to lookup errors
pub(crate) fn network_error(msg: &str, err: &reqwest::Error) -> CvescopeError {
    CvescopeError::lookup(msg, LookupErrorKind::NetworkError(err.to_string()))
}

/// Helper to create API errors
pub(crate) fn api_error(context: &str, msg: impl Into<String>) -> CvescopeError {
    CvescopeError::lookup(context, LookupErrorKind::ApiError(msg.into()))
}

/// Helper to create invalid-response errors
pub(crate) fn invalid_response(context: &str, err: &reqwest::Error) -> CvescopeError {
    CvescopeError::lookup(context, LookupErrorKind::InvalidResponse(err.to_string()))
}

/// Percent-encode a URL for embedding as a relay suffix.
///
/// Unreserved characters pass through; everything else is `%XX`-escaped,
/// matching what a browser's `encodeURIComponent` produces for URLs.
pub(crate) fn encode_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len() * 3);
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    encoded
}
