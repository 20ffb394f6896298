//! Publication timestamp formatting.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Fallback text for unparseable timestamps.
const INVALID_DATE: &str = "Invalid date";

/// Format an upstream publication timestamp as `DD/MM/YYYY HH:MM`.
///
/// One trailing `]` is stripped first; some upstream records carry that
/// formatting artifact. Timestamps with an explicit offset are converted to
/// local time; naive timestamps are rendered as-is. Unparseable input yields
/// the literal `Invalid date`.
pub fn format_published(raw: &str) -> String {
    let cleaned = raw.strip_suffix(']').unwrap_or(raw).trim();
    if cleaned.is_empty() {
        return INVALID_DATE.to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(cleaned) {
        return dt.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string();
    }

    parse_naive(cleaned)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Parse offset-less timestamp forms, including date-only records.
fn parse_naive(cleaned: &str) -> Option<NaiveDateTime> {
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(cleaned, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(cleaned, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
