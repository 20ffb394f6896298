//! Aggregation-endpoint client.
//!
//! Alternative front-end over a backend exposing `GET /api/search/{term}`:
//! the server runs the identifier-or-keyword dispatch itself and returns
//! either one combined detail object or a numerically keyed result map.

use super::{api_error, build_client, invalid_response, network_error};
use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gateway client configuration.
#[derive(Debug, Clone)]
pub struct GatewayClientConfig {
    /// Base URL of the aggregation backend
    pub api_base: String,
    /// Request timeout
    pub timeout: Duration,
}

impl GatewayClientConfig {
    /// Config for a gateway at the given base URL.
    pub fn for_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            timeout: super::DEFAULT_TIMEOUT,
        }
    }
}

/// Combined detail object for a single CVE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayDetail {
    /// Human title (the backend falls back to the CVE id)
    pub title: String,
    /// CVE identifier
    pub cve: String,
    /// Free-text summary
    pub summary: String,
    /// KEV listing as display text ("Yes" / "No")
    #[serde(default)]
    pub is_kev: Option<String>,
    /// Exploit-hunting links
    #[serde(default)]
    pub exploits: Vec<String>,
    /// Reference URLs
    #[serde(default)]
    pub references: Vec<String>,
}

/// One keyword-search result from the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayHit {
    /// CVE identifier
    pub cve: String,
    /// Free-text summary
    pub summary: String,
}

/// The two response shapes the gateway produces.
///
/// The result map is keyed by stringified indices; document order is
/// preserved.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GatewayResponse {
    Detail(Box<GatewayDetail>),
    Results(IndexMap<String, GatewayHit>),
}

/// HTTP client for the aggregation endpoint.
pub struct GatewayClient {
    client: reqwest::blocking::Client,
    config: GatewayClientConfig,
}

impl GatewayClient {
    /// Create a new gateway client.
    pub fn new(config: GatewayClientConfig) -> Result<Self> {
        let client = build_client(config.timeout)?;
        Ok(Self { client, config })
    }

    /// Search through the gateway with an already-normalized term.
    pub fn search(&self, term: &str) -> Result<GatewayResponse> {
        let url = format!(
            "{}/api/search/{}",
            self.config.api_base.trim_end_matches('/'),
            term
        );
        tracing::debug!("searching via gateway: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| network_error("Failed to query gateway", &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(
                "gateway search",
                format!("Gateway returned status {}", status.as_u16()),
            ));
        }

        response
            .json()
            .map_err(|e| invalid_response("parsing gateway response", &e))
    }
}
