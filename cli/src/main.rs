//! CLI entrypoint for verdict
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};
use verdict_application::{
    DEFAULT_SUMMARIZER, Deadline, NoProgress, ProgressNotifier, RunParams, RunVerdictInput,
    RunVerdictUseCase,
};
use verdict_infrastructure::{ConfigLoader, CredentialLoader, ProviderRegistry};
use verdict_presentation::{
    Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress,
};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter_handle = init_tracing(&cli);

    match run(cli, filter_handle).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over flags
fn init_tracing(cli: &Cli) -> FilterHandle {
    let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level_for(cli.verbose, cli.debug))
    };
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    handle
}

fn level_for(verbose: u8, debug: bool) -> &'static str {
    match (verbose, debug) {
        (0, false) => "info",
        (0, true) | (1, _) => "debug",
        _ => "trace", // -vv or more
    }
}

async fn run(cli: Cli, filter_handle: FilterHandle) -> Result<()> {
    info!("Starting verdict");

    let prompt = cli.validated_prompt()?;

    // === Configuration ===
    let config = ConfigLoader::load(&cli.config)?;
    if config.debug
        && !cli.debug
        && cli.verbose == 0
        && std::env::var_os(EnvFilter::DEFAULT_ENV).is_none()
    {
        filter_handle
            .modify(|filter| *filter = EnvFilter::new("debug"))
            .context("Failed to raise log level")?;
    }
    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Credentials ===
    CredentialLoader::load_env_file(&cli.env)?;
    let requirements = ProviderRegistry::required_credentials(&config)?;
    let credentials = CredentialLoader::resolve(&requirements)?;

    // === Dependency Injection ===
    let registry = ProviderRegistry::build(&config, &credentials)?;

    let params = RunParams::default()
        .with_summarizer(cli.summarizer_or(config.summarizer.as_deref(), DEFAULT_SUMMARIZER))
        .with_timeout(Duration::from_secs(
            cli.timeout.unwrap_or(config.timeout_seconds),
        ));
    let format = cli.output_or(config.output.format);
    info!(
        summarizer = %params.summarizer,
        timeout_secs = params.timeout.as_secs(),
        "Run parameters"
    );

    let deadline = Deadline::after(params.timeout);
    let interrupt = deadline.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling outstanding queries");
            interrupt.cancel();
        }
    });

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let use_case = RunVerdictUseCase::new(registry.all());
    let input = RunVerdictInput::new(prompt.into_content()).with_params(params);
    let report = use_case
        .execute_within(input, &deadline, progress.as_ref())
        .await?;

    print!("{}", ConsoleFormatter.render(&report, format));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0, false), "info");
        assert_eq!(level_for(0, true), "debug");
        assert_eq!(level_for(1, false), "debug");
        assert_eq!(level_for(2, true), "trace");
    }
}
