//! Output formatter trait

use verdict_domain::{OutputFormat, VerdictReport};

/// Banner printed on the line before the verdict
pub const VERDICT_BANNER: &str = "----- Final Verdict -----";

/// Trait for formatting finished runs
pub trait OutputFormatter {
    /// Banner and verdict only
    fn format_verdict(&self, report: &VerdictReport) -> String;

    /// Verdict plus per-provider outcomes
    fn format_full(&self, report: &VerdictReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &VerdictReport) -> String;

    fn render(&self, report: &VerdictReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Verdict => self.format_verdict(report),
            OutputFormat::Full => self.format_full(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
