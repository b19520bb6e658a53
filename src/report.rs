use std::io::Write;

use clap::ValueEnum;
use snss_session::{TabEntry, TabReport};

use crate::error::RecapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Indented report with totals.
    #[default]
    Pretty,
    /// Single-line report with totals.
    Compact,
    /// One entry per line, no envelope.
    Lines,
}

pub fn write_report<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    report: &TabReport,
) -> Result<(), RecapError> {
    match format {
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut *writer, report).map_err(RecapError::Serialize)?;
            end_line(writer)
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut *writer, report).map_err(RecapError::Serialize)?;
            end_line(writer)
        }
        OutputFormat::Lines => write_entry_lines(writer, &report.entries),
    }
}

fn write_entry_lines<W: Write>(writer: &mut W, entries: &[TabEntry]) -> Result<(), RecapError> {
    for entry in entries {
        serde_json::to_writer(&mut *writer, entry).map_err(RecapError::Serialize)?;
        end_line(writer)?;
    }
    Ok(())
}

fn end_line<W: Write>(writer: &mut W) -> Result<(), RecapError> {
    writer.write_all(b"\n").map_err(RecapError::WriteReport)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use snss_session::{TabEntry, TabReport};

    use super::{write_report, OutputFormat};

    fn entry(url: &str, window_id: u32) -> TabEntry {
        TabEntry {
            url: url.to_string(),
            title: "T".to_string(),
            domain: "example.com".to_string(),
            active: false,
            pinned: false,
            group: String::new(),
            window_id,
            browser: "Chrome".to_string(),
        }
    }

    fn render(format: OutputFormat, report: &TabReport) -> String {
        let mut out = Vec::new();
        write_report(&mut out, format, report).expect("report should render");
        String::from_utf8(out).expect("report should be utf8")
    }

    #[test]
    fn lines_format_has_one_entry_per_line() {
        let report = TabReport::new(
            "Chrome",
            vec![entry("https://example.com/a", 1), entry("https://example.com/b", 2)],
        );

        let rendered = render(OutputFormat::Lines, &report);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"url\":\"https://example.com/a\""));
        assert!(!rendered.contains("total_tabs"));
    }

    #[test]
    fn compact_format_is_a_single_line_report() {
        let report = TabReport::new("Chrome", vec![entry("https://example.com/<a>", 1)]);

        let rendered = render(OutputFormat::Compact, &report);
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.contains("\"total_tabs\":1"));
        assert!(rendered.contains("\"total_windows\":1"));
        assert!(rendered.contains("https://example.com/<a>"));
    }

    #[test]
    fn pretty_format_round_trips() {
        let report = TabReport::new("Chrome", vec![entry("https://example.com/", 1)]);

        let rendered = render(OutputFormat::Pretty, &report);
        let parsed: TabReport = serde_json::from_str(&rendered).expect("report should parse");
        assert_eq!(parsed, report);
        assert!(rendered.contains("\n  \"browser\": \"Chrome\""));
    }
}
