//! Presentation layer for verdict
//!
//! This crate contains the CLI definition, output formatters
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, VERDICT_BANNER};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
