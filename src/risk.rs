//! Risk classification.
//!
//! Maps a raw CVE record to a [`RiskAssessment`]. The tier decision is a
//! pure function of `(cvss, epss, kev)` evaluated in strict priority order;
//! first match wins.

use crate::model::{CveRecord, RiskAssessment, RiskDetails, RiskFlags, RiskLevel, RiskMetrics};
use crate::utils::extract_affected_versions;

/// CVSS score at or above which impact is critical.
pub const CVSS_CRITICAL: f64 = 9.0;
/// CVSS score at or above which impact is high.
pub const CVSS_HIGH: f64 = 7.0;
/// EPSS probability at or above which exploitation is highly likely.
pub const EPSS_HIGH: f64 = 0.75;
/// EPSS probability at or above which exploitation is moderately likely.
pub const EPSS_MEDIUM: f64 = 0.5;

/// Derive the risk tier from the three scoring signals.
///
/// Priority order is a hard invariant: KEV listing outranks any score
/// combination, then critical, high, moderate, low.
pub fn risk_level_for(cvss: f64, epss: f64, is_kev: bool) -> RiskLevel {
    if is_kev {
        RiskLevel::CriticalKev
    } else if cvss >= CVSS_CRITICAL && epss >= EPSS_HIGH {
        RiskLevel::Critical
    } else if cvss >= CVSS_HIGH && epss >= EPSS_MEDIUM {
        RiskLevel::High
    } else if cvss >= CVSS_HIGH {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Format an EPSS percentile ranking for display.
///
/// `N/A` when the upstream record carries no ranking.
pub fn epss_percentile_label(ranking: Option<f64>) -> String {
    match ranking {
        Some(value) => format!("{:.1}%", value * 100.0),
        None => "N/A".to_string(),
    }
}

/// Classify a raw CVE record into a normalized risk assessment.
pub fn classify(record: &CveRecord) -> RiskAssessment {
    let cvss = record.effective_cvss();
    let epss = record.effective_epss();
    let is_kev = record.kev;

    let summary = record.summary.clone().unwrap_or_default();
    let affected_versions = extract_affected_versions(&summary);

    RiskAssessment {
        cve_id: record.cve_id.clone().unwrap_or_default(),
        risk_level: risk_level_for(cvss, epss, is_kev),
        metrics: RiskMetrics {
            cvss,
            cvss_version: record.cvss_version_label(),
            epss,
            epss_percentile: epss_percentile_label(record.ranking_epss),
            is_kev,
        },
        details: RiskDetails {
            summary,
            affected_versions,
            references: record.references.clone(),
        },
        flags: RiskFlags {
            requires_immediate_action: is_kev || cvss >= CVSS_CRITICAL,
            high_exploit_probability: epss >= EPSS_HIGH,
            high_impact: cvss >= CVSS_HIGH,
        },
    }
}
