//! Search dispatch.
//!
//! Decides whether raw user input names a CVE identifier or a free-text
//! keyword search. Pure string handling, no I/O.

use crate::error::{CvescopeError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// CVE identifier pattern: `CVE-YYYY-NNNN` with 4 to 7 digits in the
/// sequence part, matched case-insensitively against the whole input.
const CVE_ID_PATTERN: &str = r"(?i)^CVE-\d{4}-\d{4,7}$";

fn cve_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CVE_ID_PATTERN).expect("CVE id pattern is valid"))
}

/// A parsed search request, routed to one of the two fetch paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// A CVE identifier, normalized to upper case (detail lookup path)
    CveId(String),
    /// A keyword query with whitespace runs collapsed to `+` (search path)
    Keyword(String),
}

impl SearchQuery {
    /// Parse raw user input into a search query.
    ///
    /// Empty (or whitespace-only) input is a validation error and blocks
    /// the search before any network call.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CvescopeError::validation(
                "Please enter a search term or CVE id.",
            ));
        }

        if cve_id_regex().is_match(trimmed) {
            Ok(Self::CveId(trimmed.to_uppercase()))
        } else {
            Ok(Self::Keyword(
                trimmed.split_whitespace().collect::<Vec<_>>().join("+"),
            ))
        }
    }

    /// The normalized term, usable directly in a URL path segment or query
    /// string.
    pub fn term(&self) -> &str {
        match self {
            Self::CveId(id) => id,
            Self::Keyword(kw) => kw,
        }
    }

    /// Whether this query takes the CVE detail path.
    pub fn is_cve_id(&self) -> bool {
        matches!(self, Self::CveId(_))
    }
}
