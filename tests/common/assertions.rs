//! Assertion helpers for CSV reports.

use pretty_assertions::assert_eq;

pub const HEADER: &str = "Image,GridSize,GridSizePixel,Positive,Total";
pub const SUMMARY_HEADER: &str = "Seconds,GrandTotalPositive,GrandTotal";

/// A report split into its parts.
#[derive(Debug)]
pub struct ParsedReport {
    pub rows: Vec<String>,
    pub seconds: f64,
    pub grand_positive: u64,
    pub grand_total: u64,
}

/// Split a report, checking both header lines are where they belong.
pub fn parse_report(text: &str) -> ParsedReport {
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines.len() >= 3, "Report too short:\n{text}");
    assert_eq!(lines[0], HEADER, "Report header");

    let n = lines.len();
    assert_eq!(lines[n - 2], SUMMARY_HEADER, "Summary header in:\n{text}");

    let summary: Vec<&str> = lines[n - 1].split(',').collect();
    assert_eq!(summary.len(), 3, "Summary line: {}", lines[n - 1]);

    ParsedReport {
        rows: lines[1..n - 2].iter().map(|s| s.to_string()).collect(),
        seconds: summary[0].parse().expect("Seconds"),
        grand_positive: summary[1].parse().expect("GrandTotalPositive"),
        grand_total: summary[2].parse().expect("GrandTotal"),
    }
}

/// Assert the report rows match, ignoring the timing line.
pub fn assert_rows(text: &str, expected: &[String]) {
    let report = parse_report(text);
    assert_eq!(report.rows, expected);
}

/// Assert the grand totals of a report.
pub fn assert_totals(text: &str, positive: u64, total: u64) {
    let report = parse_report(text);
    assert_eq!(
        (report.grand_positive, report.grand_total),
        (positive, total),
        "Grand totals"
    );
    assert!(report.seconds >= 0.0);
}
