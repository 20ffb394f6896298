//! Shodan CVEDB client: the primary CVE detail source.

use super::{api_error, build_client, encode_component, invalid_response, network_error};
use crate::error::Result;
use crate::model::CveRecord;
use std::time::Duration;

/// CVEDB client configuration.
#[derive(Debug, Clone)]
pub struct CvedbClientConfig {
    /// Base URL for the CVE database
    pub api_base: String,
    /// Optional relay prefix; the target URL is percent-encoded and
    /// appended to it (CORS-proxy style)
    pub relay: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for CvedbClientConfig {
    fn default() -> Self {
        Self {
            api_base: "https://cvedb.shodan.io".to_string(),
            relay: None,
            timeout: super::DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for the Shodan CVEDB API.
pub struct CvedbClient {
    client: reqwest::blocking::Client,
    config: CvedbClientConfig,
}

impl CvedbClient {
    /// Create a new CVEDB client.
    pub fn new(config: CvedbClientConfig) -> Result<Self> {
        let client = build_client(config.timeout)?;
        Ok(Self { client, config })
    }

    /// Build the request URL for a CVE id, applying the relay if set.
    fn record_url(&self, cve_id: &str) -> String {
        let target = format!("{}/cve/{}", self.config.api_base, cve_id);
        match &self.config.relay {
            Some(relay) => format!("{}{}", relay, encode_component(&target)),
            None => target,
        }
    }

    /// Fetch the raw record for a validated CVE identifier.
    ///
    /// Any transport failure, non-2xx status, or malformed body is fatal
    /// for the search.
    pub fn fetch(&self, cve_id: &str) -> Result<CveRecord> {
        let url = self.record_url(cve_id);
        tracing::debug!("fetching CVE record from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| network_error("Failed to fetch CVE record", &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(
                "fetching CVE record",
                format!("CVE database returned status {}", status.as_u16()),
            ));
        }

        let mut record: CveRecord = response
            .json()
            .map_err(|e| invalid_response("parsing CVE record", &e))?;

        // Some relay responses omit the id field; backfill from the query
        if record.cve_id.is_none() {
            record.cve_id = Some(cve_id.to_string());
        }

        Ok(record)
    }
}
