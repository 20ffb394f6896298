//! NVD keyword search client.

use super::{api_error, build_client, invalid_response, network_error};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shown when a record carries no English description.
const NO_DESCRIPTION: &str = "No description available";

/// NVD client configuration.
#[derive(Debug, Clone)]
pub struct NvdClientConfig {
    /// Base URL for the NVD REST API
    pub api_base: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for NvdClientConfig {
    fn default() -> Self {
        Self {
            api_base: "https://services.nvd.nist.gov".to_string(),
            timeout: super::DEFAULT_TIMEOUT,
        }
    }
}

/// One keyword-search result: identifier plus English description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// CVE identifier
    pub id: String,
    /// English description text
    pub description: String,
}

/// NVD search response, reduced to the fields we read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NvdSearchResponse {
    #[serde(default)]
    pub vulnerabilities: Vec<NvdVulnerability>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NvdVulnerability {
    pub cve: NvdCve,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NvdCve {
    pub id: String,
    #[serde(default)]
    pub descriptions: Vec<NvdDescription>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NvdDescription {
    pub lang: String,
    pub value: String,
}

impl NvdSearchResponse {
    /// Flatten the nested response into search hits, keeping the first
    /// English description per record.
    pub fn into_hits(self) -> Vec<SearchHit> {
        self.vulnerabilities
            .into_iter()
            .map(|vuln| {
                let description = vuln
                    .cve
                    .descriptions
                    .into_iter()
                    .find(|d| d.lang == "en")
                    .map(|d| d.value)
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string());
                SearchHit {
                    id: vuln.cve.id,
                    description,
                }
            })
            .collect()
    }
}

/// HTTP client for the NVD keyword search API.
pub struct NvdClient {
    client: reqwest::blocking::Client,
    config: NvdClientConfig,
}

impl NvdClient {
    /// Create a new NVD client.
    pub fn new(config: NvdClientConfig) -> Result<Self> {
        let client = build_client(config.timeout)?;
        Ok(Self { client, config })
    }

    /// Run a keyword search.
    ///
    /// `term` is the already-normalized `+`-joined query. A non-2xx status
    /// is an error carrying the status code; the message is displayed to
    /// the user verbatim.
    pub fn search(&self, term: &str) -> Result<Vec<SearchHit>> {
        let url = format!(
            "{}/rest/json/cves/2.0?keywordSearch={}",
            self.config.api_base, term
        );
        tracing::debug!("searching NVD: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| network_error("Failed to query NVD", &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(
                "keyword search",
                format!("NVD returned status {}", status.as_u16()),
            ));
        }

        let parsed: NvdSearchResponse = response
            .json()
            .map_err(|e| invalid_response("parsing NVD response", &e))?;

        let hits = parsed.into_hits();
        tracing::info!("NVD keyword search returned {} results", hits.len());
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = NvdClientConfig::default();
        assert_eq!(config.api_base, "https://services.nvd.nist.gov");
    }

    #[test]
    fn test_hits_filter_to_english() {
        let response: NvdSearchResponse = serde_json::from_str(
            r#"{
                "vulnerabilities": [
                    {"cve": {"id": "CVE-2024-0001", "descriptions": [
                        {"lang": "es", "value": "descripcion"},
                        {"lang": "en", "value": "a heap overflow"}
                    ]}}
                ]
            }"#,
        )
        .unwrap();
        let hits = response.into_hits();
        assert_eq!(
            hits,
            vec![SearchHit {
                id: "CVE-2024-0001".to_string(),
                description: "a heap overflow".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_description_gets_placeholder() {
        let response: NvdSearchResponse = serde_json::from_str(
            r#"{"vulnerabilities": [{"cve": {"id": "CVE-2024-0002", "descriptions": []}}]}"#,
        )
        .unwrap();
        let hits = response.into_hits();
        assert_eq!(hits[0].description, NO_DESCRIPTION);
    }

    #[test]
    fn test_empty_response() {
        let response: NvdSearchResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.into_hits().is_empty());
    }
}
