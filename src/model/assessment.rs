//! Normalized risk assessment derived from a raw CVE record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative risk tier, ordered by ascending severity.
///
/// `CriticalKev` outranks everything: confirmed in-the-wild exploitation
/// trumps any score-derived tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
    CriticalKev,
}

impl RiskLevel {
    /// Display label, matching the wire form used in JSON output.
    pub fn label(self) -> &'static str {
        match self {
            Self::CriticalKev => "CRITICAL_KEV",
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Moderate => "MODERATE",
            Self::Low => "LOW",
        }
    }

    /// Whether this tier warrants a failing exit code in triage mode.
    pub fn is_critical(self) -> bool {
        matches!(self, Self::Critical | Self::CriticalKev)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Normalized risk assessment for a single CVE.
///
/// Created fresh per classification call and discarded after rendering;
/// carries no identity beyond the input record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// CVE identifier
    pub cve_id: String,
    /// Derived risk tier
    pub risk_level: RiskLevel,
    /// Numeric signals the tier was derived from
    pub metrics: RiskMetrics,
    /// Human-oriented details
    pub details: RiskDetails,
    /// Triage flags
    pub flags: RiskFlags,
}

/// Scoring signals backing an assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    /// Effective CVSS base score (v3 preferred)
    pub cvss: f64,
    /// CVSS version label
    pub cvss_version: String,
    /// EPSS exploitation probability (0-1)
    pub epss: f64,
    /// EPSS percentile as display text ("90.0%" or "N/A")
    pub epss_percentile: String,
    /// Listed in the CISA KEV catalog
    #[serde(rename = "isKEV")]
    pub is_kev: bool,
}

/// Human-oriented assessment details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskDetails {
    /// Free-text summary from the upstream record
    pub summary: String,
    /// Version mentions extracted from the summary, first occurrence kept
    pub affected_versions: Vec<String>,
    /// Reference URLs
    pub references: Vec<String>,
}

/// Triage flags derived alongside the tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFlags {
    /// KEV-listed or critical-scored: act now
    pub requires_immediate_action: bool,
    /// EPSS at or above the high-probability threshold
    pub high_exploit_probability: bool,
    /// CVSS at or above the high-impact threshold
    pub high_impact: bool,
}
