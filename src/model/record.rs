//! Raw CVE record as returned by the CVE database.

use serde::{Deserialize, Serialize};

/// A CVE record from the Shodan CVEDB API.
///
/// Every field is optional or defaulted: upstream records are sparse and
/// field availability varies by CVE vintage. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CveRecord {
    /// CVE identifier (e.g., "CVE-2021-44228")
    #[serde(default)]
    pub cve_id: Option<String>,

    /// Free-text vulnerability summary
    #[serde(default)]
    pub summary: Option<String>,

    /// Legacy CVSS score (version unspecified)
    #[serde(default)]
    pub cvss: Option<f64>,

    /// CVSS v2 base score
    #[serde(default)]
    pub cvss_v2: Option<f64>,

    /// CVSS v3 base score (preferred when present)
    #[serde(default)]
    pub cvss_v3: Option<f64>,

    /// CVSS version marker; upstream sends a number or a string depending
    /// on record vintage
    #[serde(default)]
    pub cvss_version: Option<serde_json::Value>,

    /// EPSS exploitation probability (0-1)
    #[serde(default)]
    pub epss: Option<f64>,

    /// EPSS percentile ranking (0-1)
    #[serde(default)]
    pub ranking_epss: Option<f64>,

    /// Listed in the CISA Known Exploited Vulnerabilities catalog
    #[serde(default)]
    pub kev: bool,

    /// Remediation action proposed by the upstream source
    #[serde(default)]
    pub propose_action: Option<String>,

    /// Known ransomware campaign association
    #[serde(default)]
    pub ransomware_campaign: Option<String>,

    /// Reference URLs
    #[serde(default)]
    pub references: Vec<String>,

    /// Affected CPE identifiers
    #[serde(default)]
    pub cpes: Vec<String>,

    /// Publication timestamp; may carry a trailing `]` artifact
    #[serde(default)]
    pub published_time: Option<String>,
}

impl CveRecord {
    /// Effective CVSS score: v3 preferred, then the legacy field, else 0.
    pub fn effective_cvss(&self) -> f64 {
        self.cvss_v3.or(self.cvss).unwrap_or(0.0)
    }

    /// Effective EPSS probability, else 0.
    pub fn effective_epss(&self) -> f64 {
        self.epss.unwrap_or(0.0)
    }

    /// CVSS version as a display string, defaulting to "3.0".
    pub fn cvss_version_label(&self) -> String {
        match &self.cvss_version {
            Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => "3.0".to_string(),
        }
    }
}
