//! Structured JSON reports.

use crate::error::{CvescopeError, RenderErrorKind, Result};
use crate::model::RiskAssessment;
use crate::sources::{GatewayDetail, GatewayHit, SearchHit};
use serde::Serialize;

/// JSON view of a detail lookup.
#[derive(Debug, Serialize)]
struct DetailDocument<'a> {
    title: &'a str,
    #[serde(flatten)]
    assessment: &'a RiskAssessment,
    published: &'a str,
}

/// JSON view of a keyword search.
#[derive(Debug, Serialize)]
struct SearchDocument<'a> {
    total: usize,
    results: &'a [SearchHit],
}

fn to_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        CvescopeError::render(
            "serializing report",
            RenderErrorKind::JsonSerializationError(e.to_string()),
        )
    })
}

/// JSON reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render a detail lookup as pretty-printed JSON.
    pub fn detail_report(
        &self,
        assessment: &RiskAssessment,
        title: &str,
        published: &str,
    ) -> Result<String> {
        to_pretty(&DetailDocument {
            title,
            assessment,
            published,
        })
    }

    /// Render keyword-search results as pretty-printed JSON.
    pub fn search_report(&self, hits: &[SearchHit]) -> Result<String> {
        to_pretty(&SearchDocument {
            total: hits.len(),
            results: hits,
        })
    }

    /// Render a gateway detail response as pretty-printed JSON.
    pub fn gateway_detail_report(&self, detail: &GatewayDetail) -> Result<String> {
        to_pretty(detail)
    }

    /// Render gateway results as pretty-printed JSON.
    pub fn gateway_search_report(&self, hits: &[GatewayHit]) -> Result<String> {
        #[derive(Serialize)]
        struct GatewaySearchDocument<'a> {
            total: usize,
            results: &'a [GatewayHit],
        }
        to_pretty(&GatewaySearchDocument {
            total: hits.len(),
            results: hits,
        })
    }
}
