//! Terminal text reports.
//!
//! Compact, human-readable output for detail and search views, in the
//! same line-assembly style as a shell `diff --stat`.

use super::links;
use crate::model::{CveRecord, RiskAssessment, RiskLevel};
use crate::sources::{GatewayDetail, GatewayHit, SearchHit};
use crate::utils::format_published;

/// Apply ANSI color formatting if colored output is enabled.
///
/// Unrecognized color names render the text unchanged, which doubles as the
/// neutral fallback for unmapped risk tiers.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "bright_red" => format!("\x1b[91m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "bright_yellow" => format!("\x1b[93m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Fixed severity-to-color lookup.
fn risk_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::CriticalKev => "bright_red",
        RiskLevel::Critical => "red",
        RiskLevel::High => "yellow",
        RiskLevel::Moderate => "bright_yellow",
        RiskLevel::Low => "green",
    }
}

/// Text reporter for terminal output
pub struct TextReporter {
    /// Use colored output
    colored: bool,
}

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn field(&self, label: &str, value: &str) -> String {
        format!("{} {}", self.color(label, "cyan"), value)
    }

    fn optional_field(&self, label: &str, value: Option<&str>) -> String {
        match value {
            Some(v) if !v.is_empty() => self.field(label, v),
            _ => format!(
                "{} {}",
                self.color(label, "cyan"),
                self.color("None", "dim")
            ),
        }
    }

    /// Render the CVE detail view.
    pub fn detail_report(
        &self,
        record: &CveRecord,
        assessment: &RiskAssessment,
        title: &str,
    ) -> String {
        let mut lines = Vec::new();
        let cve_id = assessment.cve_id.as_str();

        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(self.field("CVE ID:", cve_id));

        let badge = self.color(
            assessment.risk_level.label(),
            risk_color(assessment.risk_level),
        );
        lines.push(format!("{} {}", self.color("Risk:", "cyan"), badge));

        lines.push(self.optional_field("Summary:", Some(assessment.details.summary.as_str())));

        lines.push(self.field(
            "CVSS Score:",
            &format!(
                "{} (v{})",
                assessment.metrics.cvss, assessment.metrics.cvss_version
            ),
        ));
        if let Some(v2) = record.cvss_v2 {
            lines.push(self.field("CVSS v2:", &v2.to_string()));
        }

        let probability = if assessment.flags.high_exploit_probability {
            "High probability"
        } else {
            "Medium/Low probability"
        };
        lines.push(self.field("EPSS:", &format!("{}", assessment.metrics.epss)));
        lines.push(self.field(
            "EPSS Percentile:",
            &format!("{} ({probability})", assessment.metrics.epss_percentile),
        ));

        let kev_text = if assessment.metrics.is_kev {
            self.color("True", "bright_red")
        } else {
            self.color("False", "green")
        };
        lines.push(format!("{} {}", self.color("KEV:", "cyan"), kev_text));

        lines.push(self.optional_field("Proposed Action:", record.propose_action.as_deref()));
        lines.push(self.optional_field(
            "Ransomware Campaign:",
            record.ransomware_campaign.as_deref(),
        ));

        if !assessment.details.affected_versions.is_empty() {
            lines.push(self.field(
                "Affected Versions:",
                &assessment.details.affected_versions.join(", "),
            ));
        }

        let published = record
            .published_time
            .as_deref()
            .map(format_published)
            .unwrap_or_else(|| "Invalid date".to_string());
        lines.push(self.field("Published:", &published));

        lines.push(String::new());
        lines.push(self.color("Exploits:", "bold"));
        lines.push(format!(
            "  {}",
            self.color(&links::exploit_db_cve(cve_id), "green")
        ));
        lines.push(format!(
            "  {}",
            self.color(&links::offsec_blog(cve_id), "green")
        ));

        lines.push(String::new());
        lines.push(self.color("For more, access:", "bold"));
        for link in links::main_links(cve_id) {
            lines.push(format!(
                "  {} {}",
                self.color("-", "red"),
                self.color(&link, "green")
            ));
        }

        lines.push(String::new());
        if assessment.details.references.is_empty() {
            lines.push(self.optional_field("References:", None));
        } else {
            lines.push(self.color("References:", "cyan"));
            for (i, reference) in assessment.details.references.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, self.color(reference, "green")));
            }
        }

        if record.cpes.is_empty() {
            lines.push(self.optional_field("CPEs:", None));
        } else {
            lines.push(self.color("CPEs:", "cyan"));
            for (i, cpe) in record.cpes.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, self.color(cpe, "green")));
            }
        }

        lines.join("\n")
    }

    /// Render the keyword-search result list.
    pub fn search_report(&self, hits: &[SearchHit], term: &str) -> String {
        let mut lines = Vec::new();

        lines.push(self.field(
            "Total vulnerabilities found:",
            &hits.len().to_string(),
        ));
        lines.push(format!(
            "{} {}",
            self.color("Search for more vulns and exploits here:", "yellow"),
            self.color(&links::exploit_db_query(term), "cyan")
        ));
        lines.push(String::new());

        for hit in hits {
            lines.push(self.color(&hit.id, "green"));
            lines.push(format!("  {}", hit.description));
            lines.push(format!(
                "  {} {}",
                self.color("Possible exploits:", "yellow"),
                self.color(&links::exploit_db_cve(&hit.id), "cyan")
            ));
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// Render a gateway detail response.
    pub fn gateway_detail_report(&self, detail: &GatewayDetail) -> String {
        let mut lines = Vec::new();

        lines.push(self.color(&detail.title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(self.field("CVE ID:", &detail.cve));
        lines.push(self.field("Summary:", &detail.summary));
        lines.push(self.optional_field("KEV:", detail.is_kev.as_deref()));

        if !detail.exploits.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Exploits:", "bold"));
            for link in &detail.exploits {
                lines.push(format!("  {}", self.color(link, "green")));
            }
        }

        lines.push(String::new());
        if detail.references.is_empty() {
            lines.push(self.optional_field("References:", None));
        } else {
            lines.push(self.color("References:", "cyan"));
            for (i, reference) in detail.references.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, self.color(reference, "green")));
            }
        }

        lines.join("\n")
    }

    /// Render a gateway result list.
    pub fn gateway_search_report(&self, hits: &[GatewayHit], term: &str) -> String {
        let converted: Vec<SearchHit> = hits
            .iter()
            .map(|h| SearchHit {
                id: h.cve.clone(),
                description: h.summary.clone(),
            })
            .collect();
        self.search_report(&converted, term)
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::classify;

    fn sample_record() -> CveRecord {
        serde_json::from_str(
            r#"{
                "cve_id": "CVE-2021-44228",
                "summary": "JNDI injection in versions 2.14.1 of log4j",
                "cvss_v3": 10.0,
                "cvss_v2": 9.3,
                "epss": 0.97,
                "ranking_epss": 0.999,
                "kev": true,
                "references": ["https://example.com/advisory"],
                "cpes": ["cpe:2.3:a:apache:log4j"],
                "published_time": "2021-12-10T10:15:00]"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_detail_report_plain_contains_fields() {
        let record = sample_record();
        let assessment = classify(&record);
        let reporter = TextReporter::new().no_color();
        let report = reporter.detail_report(&record, &assessment, "Log4Shell");

        assert!(report.contains("Log4Shell"));
        assert!(report.contains("CVE ID: CVE-2021-44228"));
        assert!(report.contains("CRITICAL_KEV"));
        assert!(report.contains("EPSS Percentile: 99.9% (High probability)"));
        assert!(report.contains("Published: 10/12/2021 10:15"));
        assert!(report.contains("https://www.exploit-db.com/search?cve=CVE-2021-44228"));
        assert!(report.contains("1. https://example.com/advisory"));
        assert!(report.contains("cpe:2.3:a:apache:log4j"));
    }

    #[test]
    fn test_detail_report_no_color_has_no_escapes() {
        let record = sample_record();
        let assessment = classify(&record);
        let report = TextReporter::new()
            .no_color()
            .detail_report(&record, &assessment, "Log4Shell");
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn test_detail_report_colored_marks_risk() {
        let record = sample_record();
        let assessment = classify(&record);
        let report = TextReporter::new().detail_report(&record, &assessment, "Log4Shell");
        // CRITICAL_KEV renders in bright red
        assert!(report.contains("\x1b[91mCRITICAL_KEV\x1b[0m"));
    }

    #[test]
    fn test_missing_optional_fields_render_none() {
        let record: CveRecord =
            serde_json::from_str(r#"{"cve_id": "CVE-2024-0001"}"#).unwrap();
        let assessment = classify(&record);
        let report = TextReporter::new()
            .no_color()
            .detail_report(&record, &assessment, "Title not found");
        assert!(report.contains("Proposed Action: None"));
        assert!(report.contains("References: None"));
        assert!(report.contains("CPEs: None"));
        assert!(report.contains("Published: Invalid date"));
    }

    #[test]
    fn test_search_report_lists_hits() {
        let hits = vec![
            SearchHit {
                id: "CVE-2024-0001".to_string(),
                description: "first".to_string(),
            },
            SearchHit {
                id: "CVE-2024-0002".to_string(),
                description: "second".to_string(),
            },
        ];
        let report = TextReporter::new().no_color().search_report(&hits, "apache");

        assert!(report.contains("Total vulnerabilities found: 2"));
        assert!(report.contains("https://www.exploit-db.com/search?q=apache"));
        assert!(report.contains("CVE-2024-0001"));
        assert!(report.contains("  second"));
        assert!(report.contains("https://www.exploit-db.com/search?cve=CVE-2024-0002"));
    }

    #[test]
    fn test_search_report_empty_still_shows_count() {
        let report = TextReporter::new().no_color().search_report(&[], "nothing");
        assert!(report.contains("Total vulnerabilities found: 0"));
    }

    #[test]
    fn test_gateway_detail_report() {
        let detail = GatewayDetail {
            title: "Sample RCE".to_string(),
            cve: "CVE-2024-0001".to_string(),
            summary: "remote code execution".to_string(),
            is_kev: Some("Yes".to_string()),
            exploits: vec!["https://www.exploit-db.com/search?q=CVE-2024-0001".to_string()],
            references: vec![],
        };
        let report = TextReporter::new().no_color().gateway_detail_report(&detail);
        assert!(report.contains("Sample RCE"));
        assert!(report.contains("KEV: Yes"));
        assert!(report.contains("References: None"));
    }
}
