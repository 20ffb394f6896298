//! MITRE CVE registry client: best-effort title lookup.

use super::build_client;
use crate::error::Result;
use serde::Deserialize;
use std::time::Duration;

/// Placeholder used whenever the registry yields no usable title.
pub const TITLE_FALLBACK: &str = "Title not found";

/// MITRE client configuration.
#[derive(Debug, Clone)]
pub struct MitreClientConfig {
    /// Base URL for the MITRE CVE registry
    pub api_base: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for MitreClientConfig {
    fn default() -> Self {
        Self {
            api_base: "https://cveawg.mitre.org".to_string(),
            timeout: super::DEFAULT_TIMEOUT,
        }
    }
}

/// MITRE CVE record, reduced to the fields we read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MitreRecord {
    #[serde(default)]
    pub containers: Option<MitreContainers>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MitreContainers {
    #[serde(default)]
    pub cna: Option<MitreCna>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MitreCna {
    #[serde(default)]
    pub title: Option<String>,
}

impl MitreRecord {
    /// Dig the human title out of the nested container structure.
    pub fn title(&self) -> Option<&str> {
        self.containers
            .as_ref()
            .and_then(|c| c.cna.as_ref())
            .and_then(|cna| cna.title.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// HTTP client for the MITRE CVE registry.
pub struct MitreClient {
    client: reqwest::blocking::Client,
    config: MitreClientConfig,
}

impl MitreClient {
    /// Create a new MITRE client.
    pub fn new(config: MitreClientConfig) -> Result<Self> {
        let client = build_client(config.timeout)?;
        Ok(Self { client, config })
    }

    /// Fetch the human title for a CVE.
    ///
    /// Strictly best-effort: every failure mode (transport, status, body
    /// shape) falls back to [`TITLE_FALLBACK`] and must never fail the
    /// surrounding search.
    pub fn fetch_title(&self, cve_id: &str) -> String {
        let url = format!("{}/api/cve/{}", self.config.api_base, cve_id);
        tracing::debug!("fetching CVE title from {url}");

        match self.try_fetch_title(&url) {
            Some(title) => title,
            None => {
                tracing::debug!("title lookup for {cve_id} failed, using placeholder");
                TITLE_FALLBACK.to_string()
            }
        }
    }

    fn try_fetch_title(&self, url: &str) -> Option<String> {
        let response = self.client.get(url).send().ok()?;
        if !response.status().is_success() {
            return None;
        }
        let record: MitreRecord = response.json().ok()?;
        record.title().map(str::to_string)
    }
}
