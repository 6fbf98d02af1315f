//! JSON output formatter

use crate::error::MatchResult;
use crate::types::MatchReport;

/// Convert a report to a pretty-printed JSON string
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_json(report: &MatchReport) -> MatchResult<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
