//! Output formatting for window reports

use crate::types::{ClockReport, WindowReport};
use colored::Colorize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Format a span as "23h 59m 59s"
pub fn format_span(secs: i64) -> String {
    let hours = secs / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}

/// Table row for display
#[derive(Tabled)]
struct WindowRow {
    #[tabled(rename = "Zone")]
    zone: String,
    #[tabled(rename = "Local Day")]
    day: String,
    #[tabled(rename = "Start (UTC)")]
    start: String,
    #[tabled(rename = "End (UTC)")]
    end: String,
    #[tabled(rename = "Start Epoch")]
    start_epoch: String,
    #[tabled(rename = "End Epoch")]
    end_epoch: String,
    #[tabled(rename = "Span")]
    span: String,
}

/// Format a window report as a table
pub fn format_window_table(report: &WindowReport) -> String {
    let row = WindowRow {
        zone: report.zone.clone(),
        day: report.date.clone(),
        start: report.window.start_iso.clone(),
        end: report.window.end_iso.clone(),
        start_epoch: report.window.start.to_string(),
        end_epoch: report.window.end.to_string(),
        span: format_span(report.span_secs),
    };

    Table::new(vec![row])
        .with(Style::rounded())
        .with(Modify::new(Columns::single(0)).with(Alignment::left()))
        .to_string()
}

/// Format a window report as JSON
pub fn format_window_json(report: &WindowReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

/// Format a window report as CSV
pub fn format_window_csv(report: &WindowReport) -> String {
    let mut output =
        String::from("Zone,Local Day,Start Epoch,End Epoch,Start UTC,End UTC,Span Seconds\n");

    output.push_str(&format!(
        "{},{},{},{},{},{},{}\n",
        report.zone,
        report.date,
        report.window.start.secs(),
        report.window.end.secs(),
        report.window.start_iso,
        report.window.end_iso,
        report.span_secs
    ));

    output
}

/// Table row for a clock reading
#[derive(Tabled)]
struct ClockRow {
    #[tabled(rename = "Zone")]
    zone: String,
    #[tabled(rename = "True Epoch")]
    true_epoch: String,
    #[tabled(rename = "True (UTC)")]
    true_utc: String,
    #[tabled(rename = "Shifted Epoch")]
    shifted_epoch: String,
    #[tabled(rename = "Offset")]
    offset: String,
}

/// Format a clock report as a table
pub fn format_clock_table(report: &ClockReport) -> String {
    let row = ClockRow {
        zone: report.zone.clone(),
        true_epoch: report.true_secs.to_string(),
        true_utc: report.true_iso.clone(),
        shifted_epoch: report.shifted_secs.to_string(),
        offset: format!("{:+}s", report.offset_secs),
    };

    Table::new(vec![row])
        .with(Style::rounded())
        .with(Modify::new(Columns::single(0)).with(Alignment::left()))
        .to_string()
}

/// Format a clock report as JSON
pub fn format_clock_json(report: &ClockReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

/// Format a clock report as CSV
pub fn format_clock_csv(report: &ClockReport) -> String {
    let mut output = String::from("Zone,True Epoch,Shifted Epoch,Offset Seconds,True UTC\n");

    output.push_str(&format!(
        "{},{},{},{},{}\n",
        report.zone, report.true_secs, report.shifted_secs, report.offset_secs, report.true_iso
    ));

    output
}

/// Print banner
pub fn print_banner() {
    println!();
    println!("{}", "  tzwindow - DST-safe UTC query windows".cyan().bold());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DayRangeUtc, TrueInstant};

    fn sample_report() -> WindowReport {
        WindowReport {
            zone: "America/New_York".to_string(),
            date: "2024-03-10".to_string(),
            window: DayRangeUtc {
                start: TrueInstant::from_secs(1_710_046_800),
                end: TrueInstant::from_secs(1_710_129_599),
                start_iso: "2024-03-10 05:00:00".to_string(),
                end_iso: "2024-03-11 03:59:59".to_string(),
            },
            span_secs: 82_799,
        }
    }

    #[test]
    fn span_formatting() {
        assert_eq!(format_span(86_399), "23h 59m 59s");
        assert_eq!(format_span(82_799), "22h 59m 59s");
        assert_eq!(format_span(0), "0h 0m 0s");
    }

    #[test]
    fn csv_has_header_and_one_row() {
        let csv = format_window_csv(&sample_report());
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Zone,Local Day"));
        assert!(lines[1].contains("2024-03-10 05:00:00"));
    }

    #[test]
    fn json_flattens_the_window_fields() {
        let json = format_window_json(&sample_report());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["zone"], "America/New_York");
        assert_eq!(value["start"], 1_710_046_800i64);
        assert_eq!(value["end_iso"], "2024-03-11 03:59:59");
        assert_eq!(value["span_secs"], 82_799);
    }

    fn sample_clock() -> ClockReport {
        ClockReport {
            zone: "Etc/GMT+5".to_string(),
            true_secs: 1_700_000_000,
            shifted_secs: 1_699_982_000,
            offset_secs: -18_000,
            true_iso: "2023-11-14 22:13:20".to_string(),
        }
    }

    #[test]
    fn clock_json_carries_both_instants() {
        let json = format_clock_json(&sample_clock());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["true_secs"], 1_700_000_000i64);
        assert_eq!(value["shifted_secs"], 1_699_982_000i64);
        assert_eq!(value["offset_secs"], -18_000);
    }

    #[test]
    fn clock_csv_has_header_and_one_row() {
        let csv = format_clock_csv(&sample_clock());
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("1699982000"));
    }

    #[test]
    fn clock_table_shows_the_signed_offset() {
        let table = format_clock_table(&sample_clock());
        assert!(table.contains("-18000s"));
        assert!(table.contains("2023-11-14 22:13:20"));
    }

    #[test]
    fn table_includes_both_boundaries() {
        let table = format_window_table(&sample_report());
        assert!(table.contains("2024-03-10 05:00:00"));
        assert!(table.contains("2024-03-11 03:59:59"));
    }
}
