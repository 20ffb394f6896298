//! Report generation.
//!
//! Pure functions from classified data to output text; nothing here touches
//! the network or the terminal.

pub mod links;

mod json;
mod text;

pub use json::JsonReporter;
pub use text::TextReporter;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Auto-detect: summary if stdout is a terminal, JSON otherwise
    #[default]
    Auto,
    /// Brief human-readable terminal output
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
