//! CLI entrypoint for candor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use candor_application::{RunChatInput, RunChatUseCase};
use candor_domain::Turn;
use candor_infrastructure::{CerebrasGateway, ConfigLoader, JsonlAttemptLogger};
use candor_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    info!("Starting candor");

    // Apply CLI overrides on top of file config
    let mut models = config.model_config();
    if let Some(model) = &cli.model {
        models = models.with_writer(model.parse().unwrap());
    }
    if let Some(model) = &cli.checker_model {
        models = models.with_checker(model.parse().unwrap());
    }

    let mut params = config.execution_params();
    if let Some(max) = cli.max_attempts {
        params = params.with_max_attempts(max);
    }

    // === Dependency Injection ===
    let api_key = config.api_key();
    if api_key.is_none() {
        warn!(
            "{} is not set; backend calls will be unauthorized",
            config.backend.api_key_env
        );
    }
    let gateway = Arc::new(CerebrasGateway::new(
        &config.backend.base_url,
        api_key.as_deref(),
    ));

    let mut use_case = RunChatUseCase::new(gateway, models.clone(), params);
    if let Some(path) = &config.log.attempt_log
        && let Some(logger) = JsonlAttemptLogger::new(path)
    {
        use_case = use_case.with_attempt_logger(Arc::new(logger));
    }

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(use_case, models).with_progress(!cli.quiet);
        repl.run().await?;
        return Ok(());
    }

    // Single message mode - message is required
    let message = match cli.message {
        Some(m) => m,
        None => bail!("Message is required. Use --chat for interactive mode."),
    };

    let history = match &cli.history {
        Some(path) => load_history(path)?,
        None => Vec::new(),
    };

    let input = RunChatInput::new(message).with_history(history);

    let outcome = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&outcome),
        OutputFormat::Text => ConsoleFormatter::format_text(&outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };

    println!("{}", output);

    Ok(())
}

/// Load prior conversation turns from a JSON file.
///
/// The file holds an array of `{"role": ..., "content": ...}` objects,
/// oldest first — the shape a surrounding persistence layer would hand over.
fn load_history(path: &Path) -> Result<Vec<Turn>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse history file {}", path.display()))
}
