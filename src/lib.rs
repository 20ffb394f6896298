//! **CVE lookup and risk triage.**
//!
//! `cvescope` resolves a search term against public vulnerability
//! databases: a term matching the CVE identifier format is looked up in
//! detail and normalized into a qualitative risk assessment; anything else
//! runs as a keyword search listing matching CVEs. It powers the `cvescope`
//! command-line tool and doubles as a library for programmatic use.
//!
//! ## Core Concepts & Modules
//!
//! - **[`query`]**: the search dispatcher. [`SearchQuery::parse`] decides
//!   between the CVE detail path and the keyword path; pure string
//!   handling.
//! - **[`sources`]**: one blocking HTTP client per upstream database
//!   (Shodan CVEDB for details, MITRE for titles, NVD for keyword search,
//!   plus an optional aggregation-backend variant).
//! - **[`risk`]**: the pure classifier deriving a [`RiskLevel`] tier and
//!   triage flags from CVSS/EPSS/KEV signals.
//! - **[`report`]**: pure reporters rendering assessments and result lists
//!   as terminal text or JSON.
//!
//! ## Getting Started: Classifying a CVE
//!
//! ```no_run
//! use cvescope::sources::{CvedbClient, CvedbClientConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CvedbClient::new(CvedbClientConfig::default())?;
//!     let record = client.fetch("CVE-2021-44228")?;
//!     let assessment = cvescope::risk::classify(&record);
//!
//!     println!("{} is {}", assessment.cve_id, assessment.risk_level);
//!     Ok(())
//! }
//! ```
//!
//! The classifier itself is pure and usable without any network access:
//!
//! ```
//! use cvescope::risk::risk_level_for;
//! use cvescope::RiskLevel;
//!
//! assert_eq!(risk_level_for(9.8, 0.9, false), RiskLevel::Critical);
//! assert_eq!(risk_level_for(9.8, 0.9, true), RiskLevel::CriticalKev);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod cli;
pub mod error;
pub mod model;
pub mod query;
pub mod report;
pub mod risk;
pub mod sources;
pub mod utils;

// Re-export main types for convenience
pub use error::{CvescopeError, Result};
pub use model::{CveRecord, RiskAssessment, RiskDetails, RiskFlags, RiskLevel, RiskMetrics};
pub use query::SearchQuery;
pub use report::{JsonReporter, ReportFormat, TextReporter};
pub use risk::{classify, risk_level_for};
pub use sources::{
    CvedbClient, CvedbClientConfig, GatewayClient, GatewayClientConfig, MitreClient,
    MitreClientConfig, NvdClient, NvdClientConfig, SearchHit,
};
