//! Search command handler.
//!
//! Wires the full flow for one search: dispatch, fetch, classify, render.

use super::{exit_codes, write_output};
use crate::model::RiskAssessment;
use crate::query::SearchQuery;
use crate::report::{JsonReporter, ReportFormat, TextReporter};
use crate::sources::{
    CvedbClient, CvedbClientConfig, GatewayClient, GatewayClientConfig, GatewayHit,
    GatewayResponse, MitreClient, MitreClientConfig, NvdClient, NvdClientConfig,
};
use crate::utils::format_published;
use anyhow::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for one search invocation.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Raw user input (joined CLI arguments)
    pub term: String,
    /// Output format (auto detects TTY: summary if interactive, JSON otherwise)
    pub output: ReportFormat,
    /// Output file path (stdout if not specified)
    pub output_file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Relay prefix for the CVE database fetch
    pub relay: Option<String>,
    /// Route the search through an aggregation backend instead of the
    /// direct third-party path
    pub gateway: Option<String>,
    /// API timeout in seconds
    pub timeout_secs: u64,
    /// Exit with code 2 when the assessed risk is critical
    pub fail_on_risk: bool,
}

/// Run the search command
pub fn run_search(config: SearchConfig) -> Result<i32> {
    let query = SearchQuery::parse(&config.term)?;

    let format = effective_format(config.output, config.output_file.is_some());
    let colored = !config.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && config.output_file.is_none()
        && std::io::stdout().is_terminal();

    let (content, exit_code) = match &config.gateway {
        Some(base) => run_gateway_search(&config, base, &query, format, colored)?,
        None => run_direct_search(&config, &query, format, colored)?,
    };

    write_output(config.output_file.as_deref(), &content)?;
    Ok(exit_code)
}

/// Resolve `auto` to a concrete format.
fn effective_format(format: ReportFormat, to_file: bool) -> ReportFormat {
    match format {
        ReportFormat::Auto => {
            if !to_file && std::io::stdout().is_terminal() {
                ReportFormat::Summary
            } else {
                ReportFormat::Json
            }
        }
        other => other,
    }
}

fn text_reporter(colored: bool) -> TextReporter {
    if colored {
        TextReporter::new()
    } else {
        TextReporter::new().no_color()
    }
}

fn risk_exit_code(config: &SearchConfig, assessment: &RiskAssessment) -> i32 {
    if config.fail_on_risk && assessment.risk_level.is_critical() {
        exit_codes::CRITICAL_RISK
    } else {
        exit_codes::SUCCESS
    }
}

/// Direct path: Shodan CVEDB detail lookup or NVD keyword search.
fn run_direct_search(
    config: &SearchConfig,
    query: &SearchQuery,
    format: ReportFormat,
    colored: bool,
) -> Result<(String, i32)> {
    let timeout = Duration::from_secs(config.timeout_secs);

    match query {
        SearchQuery::CveId(cve_id) => {
            let cvedb = CvedbClient::new(CvedbClientConfig {
                relay: config.relay.clone(),
                timeout,
                ..Default::default()
            })?;
            let record = cvedb.fetch(cve_id)?;
            let assessment = crate::risk::classify(&record);

            // Best-effort title; never fails the search
            let mitre = MitreClient::new(MitreClientConfig {
                timeout,
                ..Default::default()
            })?;
            let title = mitre.fetch_title(cve_id);

            let content = match format {
                ReportFormat::Json => {
                    let published = record
                        .published_time
                        .as_deref()
                        .map(format_published)
                        .unwrap_or_else(|| "Invalid date".to_string());
                    JsonReporter::new().detail_report(&assessment, &title, &published)?
                }
                _ => text_reporter(colored).detail_report(&record, &assessment, &title),
            };

            let code = risk_exit_code(config, &assessment);
            Ok((content, code))
        }

        SearchQuery::Keyword(term) => {
            let nvd = NvdClient::new(NvdClientConfig {
                timeout,
                ..Default::default()
            })?;
            let hits = nvd.search(term)?;

            let content = match format {
                ReportFormat::Json => JsonReporter::new().search_report(&hits)?,
                _ => text_reporter(colored).search_report(&hits, term),
            };

            let code = if hits.is_empty() {
                exit_codes::NO_MATCHES
            } else {
                exit_codes::SUCCESS
            };
            Ok((content, code))
        }
    }
}

/// Gateway path: the backend runs the dispatch itself.
fn run_gateway_search(
    config: &SearchConfig,
    base: &str,
    query: &SearchQuery,
    format: ReportFormat,
    colored: bool,
) -> Result<(String, i32)> {
    let gateway = GatewayClient::new(GatewayClientConfig {
        timeout: Duration::from_secs(config.timeout_secs),
        ..GatewayClientConfig::for_base(base)
    })?;

    match gateway.search(query.term())? {
        GatewayResponse::Detail(detail) => {
            let content = match format {
                ReportFormat::Json => JsonReporter::new().gateway_detail_report(&detail)?,
                _ => text_reporter(colored).gateway_detail_report(&detail),
            };
            Ok((content, exit_codes::SUCCESS))
        }
        GatewayResponse::Results(results) => {
            let hits: Vec<GatewayHit> = results.into_values().collect();
            let content = match format {
                ReportFormat::Json => JsonReporter::new().gateway_search_report(&hits)?,
                _ => text_reporter(colored).gateway_search_report(&hits, query.term()),
            };
            let code = if hits.is_empty() {
                exit_codes::NO_MATCHES
            } else {
                exit_codes::SUCCESS
            };
            Ok((content, code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_formats_pass_through() {
        assert_eq!(
            effective_format(ReportFormat::Summary, true),
            ReportFormat::Summary
        );
        assert_eq!(
            effective_format(ReportFormat::Json, false),
            ReportFormat::Json
        );
    }

    #[test]
    fn test_auto_to_file_is_json() {
        assert_eq!(effective_format(ReportFormat::Auto, true), ReportFormat::Json);
    }

    #[test]
    fn test_empty_term_blocks_before_any_client_is_built() {
        let config = SearchConfig {
            term: "   ".to_string(),
            output: ReportFormat::Summary,
            output_file: None,
            no_color: true,
            relay: None,
            gateway: None,
            timeout_secs: 30,
            fail_on_risk: false,
        };
        let err = run_search(config).unwrap_err();
        assert!(err.to_string().contains("search term"));
    }
}
