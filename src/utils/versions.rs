//! Affected-version extraction from free-text summaries.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// Matches "version 1.2.3" / "versions 1.2.3" mentions, capturing the
/// dotted version number.
const VERSION_PATTERN: &str = r"(?i)versions? (\d+\.\d+\.\d+)";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

/// Scan a summary for version mentions.
///
/// Deduplicated by the version number; the first matched text is retained
/// as found and first-occurrence order is preserved.
pub fn extract_affected_versions(summary: &str) -> Vec<String> {
    let mut seen: IndexMap<String, String> = IndexMap::new();
    for caps in version_regex().captures_iter(summary) {
        let number = caps[1].to_string();
        let text = caps[0].to_string();
        seen.entry(number).or_insert(text);
    }
    seen.into_values().collect()
}
