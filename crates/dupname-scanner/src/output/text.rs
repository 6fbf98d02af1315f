//! Plain-text output formatter

use crate::types::MatchReport;

/// Printed when the trees share no filename
pub const NO_MATCHES: &str = "未找到相同文件名的文件";

/// Printed above the list of matches
pub const MATCHES_HEADER: &str = "找到以下相同文件名的文件：";

/// Convert a report to the line-oriented terminal format
///
/// Every line, the last included, ends with a newline.
#[must_use]
pub fn to_text(report: &MatchReport) -> String {
    let mut output = String::new();

    if report.is_empty() {
        output.push_str(NO_MATCHES);
        output.push('\n');
        return output;
    }

    output.push_str(MATCHES_HEADER);
    output.push('\n');
    for (index, record) in report.matches.iter().enumerate() {
        output.push_str(&format!(
            "序号{}: 文件名:[{}]  {} <--> {}\n",
            index,
            record.filename,
            record.path1.display(),
            record.path2.display()
        ));
    }

    output
}
