//! Report document model.
//!
//! A report is a fixed title plus one line per scanned record, in scan
//! order. Building a report never fails and never mutates the history it is
//! built from; rendering is a separate concern (see [`crate::export`]).

use crate::record::HistoryRecord;

/// Default document title, shared by both frontends.
pub const REPORT_TITLE: &str = "Asset Inventory Report";

/// In-memory report document: title and ordered item lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub lines: Vec<String>,
}

impl Report {
    /// Build a report from the session history. An empty history yields a
    /// title-only document.
    pub fn from_records(title: &str, records: &[HistoryRecord]) -> Self {
        Self {
            title: title.to_string(),
            lines: records.iter().map(HistoryRecord::report_line).collect(),
        }
    }
}

/// Output file name for a report. The timestamp is the only part that varies
/// between exports of the same history.
pub fn report_file_name(timestamp: &str) -> String {
    format!("asset-report_{}.pdf", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Category;

    #[test]
    fn test_report_lines_follow_scan_order() {
        let records = vec![
            HistoryRecord::new("ABC123", Category::Monitor),
            HistoryRecord::new("XYZ999", Category::Cabinet),
        ];
        let report = Report::from_records(REPORT_TITLE, &records);

        assert_eq!(report.title, "Asset Inventory Report");
        assert_eq!(report.lines, vec!["Monitor: ABC123", "Cabinet: XYZ999"]);
    }

    #[test]
    fn test_empty_history_yields_title_only() {
        let report = Report::from_records(REPORT_TITLE, &[]);
        assert!(report.lines.is_empty());
        assert_eq!(report.title, REPORT_TITLE);
    }

    #[test]
    fn test_rebuilding_same_history_is_identical() {
        let records = vec![
            HistoryRecord::new("DUP", Category::Stabilizer),
            HistoryRecord::new("DUP", Category::Stabilizer),
        ];
        let first = Report::from_records(REPORT_TITLE, &records);
        let second = Report::from_records(REPORT_TITLE, &records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name("20260830_120000"),
            "asset-report_20260830_120000.pdf"
        );
    }
}
