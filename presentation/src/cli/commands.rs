//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use verdict_domain::{DomainError, OutputFormat, Prompt};

/// Output format for the finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Only the banner and the final verdict
    Verdict,
    /// Verdict plus which providers answered and which failed
    Full,
    /// JSON run report
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Verdict => OutputFormat::Verdict,
            OutputFormatArg::Full => OutputFormat::Full,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for verdict
#[derive(Parser, Debug)]
#[command(name = "verdict")]
#[command(author, version, about = "Ask several LLM providers at once and let one of them deliver the verdict")]
#[command(long_about = r#"
Verdict sends one prompt to every enabled provider in parallel, then hands
the answers to a summarizer provider which synthesizes a final verdict.

Providers that fail or run out of time are skipped; the run only fails when
no provider answered or the summarizer itself fails.

Configuration is merged from (lowest to highest priority):
1. Built-in defaults
2. --config <path>          JSON, or TOML when the file ends in .toml
3. VERDICT_* environment    e.g. VERDICT_TIMEOUT_SECONDS=30

API keys are read from <NAME>_API_KEY (e.g. OPENAI_API_KEY), optionally
seeded from the --env file.

Example:
  verdict -p "Is a hot dog a sandwich?"
  verdict -p "Tabs or spaces?" -s anthropic -o full
"#)]
pub struct Cli {
    /// The prompt sent to every provider
    #[arg(short, long)]
    pub prompt: String,

    /// Provider that synthesizes the verdict [default: config `summarizer`, else openai]
    #[arg(short, long, value_name = "NAME")]
    pub summarizer: Option<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH", default_value = "config.json")]
    pub config: PathBuf,

    /// Path to the env file holding API keys; a missing file is only a warning
    /// and keys are then read from the process environment
    #[arg(long, value_name = "PATH", default_value = ".env")]
    pub env: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Deadline for the whole run in seconds (overrides config)
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format [default: config `output.format`, else verdict]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The prompt, rejected early when blank so no config or keys are read
    pub fn validated_prompt(&self) -> Result<Prompt, DomainError> {
        Prompt::new(self.prompt.clone())
    }

    /// Summarizer to use: the flag, then the configured name, then the default
    pub fn summarizer_or<'a>(&'a self, configured: Option<&'a str>, default: &'a str) -> &'a str {
        self.summarizer.as_deref().or(configured).unwrap_or(default)
    }

    /// Output format to use: the flag, then the configured format
    pub fn output_or(&self, configured: Option<OutputFormat>) -> OutputFormat {
        self.output
            .map(OutputFormat::from)
            .or(configured)
            .unwrap_or_default()
    }
}
