//! CLI entrypoint for live-qa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use liveqa_application::{
    Agent, AgentBuilder, AgentProgressNotifier, AskUseCase, ConversationLogger, NoAgentProgress,
    NoConversationLogger, ReactAgent,
};
use liveqa_domain::SessionState;
use liveqa_infrastructure::{
    ConfigLoader, FileConfig, GeminiLlmGateway, GeminiSettings, JsonlConversationLogger,
    SearchSettings, WebSearchExecutor, resolve_api_key,
};
use liveqa_presentation::{
    AskPage, Cli, ConsoleFormatter, ConsoleSurface, OutputFormat, ReplConfig, StepReporter,
    WorkingIndicator, format_outcome_json,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = ConfigLoader::load(cli.config.as_deref(), cli.no_config)?;

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_tracing(cli.log_level(), config.logging.log_file.as_deref())?;

    info!("Starting live-qa");
    for issue in config.validate().iter().filter(|issue| !issue.is_error()) {
        warn!("Config: {}", issue);
    }

    // Fail fast: no point opening the page without a credential
    let api_key = resolve_api_key(&config.model.api_key_env)?;

    ConsoleFormatter::set_color(config.output.color);

    let text_output = cli.output == OutputFormat::Text;
    let show_progress = config.output.show_progress && !cli.quiet && text_output;
    let show_steps = (cli.show_steps || config.output.show_steps) && text_output;
    let indicator = Arc::new(WorkingIndicator::new(show_progress));

    let progress: Arc<dyn AgentProgressNotifier> = if show_steps {
        Arc::new(StepReporter::new(indicator.clone()))
    } else {
        Arc::new(NoAgentProgress)
    };
    let conversation_logger = conversation_logger(&config);

    // === Dependency Injection ===
    let builder = Arc::new(agent_builder(&config, api_key, progress, conversation_logger));
    let use_case = AskUseCase::new(builder);

    if cli.is_one_shot() {
        let question = cli.question.clone().unwrap_or_default();
        let surface = ConsoleSurface::new(indicator, cli.output);
        let mut session = SessionState::new();

        let outcome = use_case
            .handle_submit(&mut session, &question, true, &surface)
            .await;

        if cli.output == OutputFormat::Json {
            println!("{}", format_outcome_json(&question, &outcome));
        }

        return Ok(if outcome.is_answered() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let surface = Arc::new(ConsoleSurface::new(indicator, OutputFormat::Text));
    let repl_config = ReplConfig {
        history_file: config.repl.history_file.clone(),
    };
    let mut page = AskPage::new(use_case, surface).with_history(repl_config.history_path());
    if let Some(question) = cli.question {
        page = page.with_prefill(question);
    }

    page.run().await?;
    Ok(ExitCode::SUCCESS)
}

/// Stderr logging filtered by `-v`, plus an optional plain-text log file.
fn init_tracing(level: &str, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match log_file {
        Some(path) => {
            let path = Path::new(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let Some(path) = config.logging.conversation_log.as_deref() else {
        return Arc::new(NoConversationLogger);
    };

    match JsonlConversationLogger::open(path) {
        Ok(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        Err(e) => {
            warn!("Could not open conversation log {}: {}", path, e);
            Arc::new(NoConversationLogger)
        }
    }
}

/// The agent is constructed lazily on the first question and reused after.
fn agent_builder(
    config: &FileConfig,
    api_key: String,
    progress: Arc<dyn AgentProgressNotifier>,
    conversation_logger: Arc<dyn ConversationLogger>,
) -> AgentBuilder {
    let gemini = GeminiSettings {
        model: config.model.parse_model().0,
        temperature: config.model.parse_temperature().0,
        api_key,
        base_url: config.model.base_url.clone(),
        request_timeout: Duration::from_secs(config.model.request_timeout_seconds),
    };
    let search = SearchSettings {
        max_results: config.search.max_results,
        region: config.search.region().to_string(),
        timeout: Duration::from_secs(config.search.timeout_seconds),
    };
    let params = config.agent.to_agent_params();

    AgentBuilder::new(move || {
        let gateway = GeminiLlmGateway::new(gemini.clone())?;
        let tools = WebSearchExecutor::new(search.clone())?;
        let agent = ReactAgent::new(Arc::new(gateway), Arc::new(tools), params.clone())
            .with_progress(progress.clone())
            .with_conversation_logger(conversation_logger.clone());
        Ok(Arc::new(agent) as Arc<dyn Agent>)
    })
}
