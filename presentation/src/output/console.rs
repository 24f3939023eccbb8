//! Console output formatter for finished runs

use crate::output::formatter::{OutputFormatter, VERDICT_BANNER};
use colored::Colorize;
use verdict_domain::{VerdictReport, preview};

/// Longest failure reason shown in full output
const MAX_REASON_LEN: usize = 200;

/// Formats run reports for console display
pub struct ConsoleFormatter;

impl OutputFormatter for ConsoleFormatter {
    fn format_verdict(&self, report: &VerdictReport) -> String {
        format!("{}\n{}\n", VERDICT_BANNER, report.verdict.content.trim_end())
    }

    fn format_full(&self, report: &VerdictReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Prompt:".cyan().bold(), report.prompt));

        output.push_str(&Self::section_header(&format!(
            "Answered ({}/{})",
            report.answered.len(),
            report.queried().len()
        )));
        for (name, answer) in &report.answered {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", name).yellow().bold(),
                answer.trim_end()
            ));
        }

        if !report.failed.is_empty() {
            output.push_str(&Self::section_header(&format!(
                "Failed ({}/{})",
                report.failed.len(),
                report.queried().len()
            )));
            for (name, reason) in &report.failed {
                output.push_str(&format!(
                    "  {} {}: {}\n",
                    "x".red(),
                    name.to_string().red().bold(),
                    preview(reason, MAX_REASON_LEN)
                ));
            }
        }

        output.push_str(&format!(
            "\n{} {} ({} ms)\n\n",
            "Summarizer:".cyan().bold(),
            report.verdict.summarizer,
            report.elapsed_ms
        ));
        output.push_str(&self.format_verdict(report));

        output
    }

    fn format_json(&self, report: &VerdictReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }
}

impl ConsoleFormatter {
    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use verdict_domain::{OutputFormat, ProviderName, Verdict};

    fn name(s: &str) -> ProviderName {
        ProviderName::new(s).unwrap()
    }

    fn report() -> VerdictReport {
        VerdictReport {
            prompt: "Is water wet?".to_string(),
            answered: BTreeMap::from([
                (name("openai"), "Yes.".to_string()),
                (name("echo"), "echo answer to: Is water wet?".to_string()),
            ]),
            failed: BTreeMap::from([(name("anthropic"), "Deadline exceeded".to_string())]),
            verdict: Verdict::new(name("openai"), "Water is wet.\n"),
            elapsed_ms: 42,
        }
    }

    #[test]
    fn test_verdict_output_is_banner_then_verdict() {
        let output = ConsoleFormatter.format_verdict(&report());
        assert_eq!(output, "----- Final Verdict -----\nWater is wet.\n");
    }

    #[test]
    fn test_verdict_output_hides_failures() {
        let output = ConsoleFormatter.render(&report(), OutputFormat::Verdict);
        assert!(!output.contains("anthropic"));
        assert!(!output.contains("Deadline"));
    }

    #[test]
    fn test_full_output_lists_outcomes() {
        let output = ConsoleFormatter.render(&report(), OutputFormat::Full);
        assert!(output.contains("Is water wet?"));
        assert!(output.contains("openai"));
        assert!(output.contains("Yes."));
        assert!(output.contains("anthropic"));
        assert!(output.contains("Deadline exceeded"));
        assert!(output.contains("Failed (1/3)"));
        assert!(output.ends_with("----- Final Verdict -----\nWater is wet.\n"));
    }

    #[test]
    fn test_json_output() {
        let output = ConsoleFormatter.render(&report(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["verdict"]["content"], "Water is wet.\n");
        assert_eq!(value["failed"]["anthropic"], "Deadline exceeded");
        assert_eq!(value["elapsed_ms"], 42);
    }
}
