//! CLI entrypoint for Portfolio Twin
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use twin_application::{ChatSessionController, ChatSettings};
use twin_domain::{PersonaContext, Profile};
use twin_infrastructure::{ConfigLoader, FileConfig, GeminiConfig, GeminiGateway, ProfileLoader};
use twin_infrastructure::config::FileTuiConfig;
use twin_presentation::{Cli, TuiApp, TuiSettings, run_ask};

const LOG_FILE: &str = "portfolio-twin.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let _log_guard = init_logging(&cli);

    info!("Starting Portfolio Twin");

    // === Configuration ===
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    let profile_path = cli.profile.as_deref().or(config.profile.path.as_deref());
    let profile: Profile = ProfileLoader::load(profile_path)?;

    // === Dependency Injection ===
    let mut gemini = GeminiConfig::from_file_config(&config.gemini);
    if let Some(model) = &cli.model {
        gemini = gemini.with_model(model);
    }
    let gateway = Arc::new(GeminiGateway::new(gemini).context("Failed to create Gemini client")?);

    let mut settings =
        ChatSettings::from_profile(&profile).with_fallback_reply(&config.chat.fallback_reply);
    if let Some(greeting) = &config.chat.greeting {
        settings = settings.with_greeting(greeting);
    }

    let persona = PersonaContext::from_profile(&profile);
    let mut controller = ChatSessionController::new(gateway, persona, settings);

    // Single question mode
    if let Some(question) = &cli.ask {
        let reply = run_ask(&mut controller, question, profile.first_name(), cli.quiet)
            .await
            .context("Question was not sent")?;
        info!(chars = reply.chars().count(), "Answered --ask question");
        return Ok(());
    }

    let mut app = TuiApp::new(controller, profile, tui_settings(&config.tui))?;
    app.run().await.context("TUI terminated with an error")?;

    Ok(())
}

/// Initialize tracing.
///
/// `--ask` logs to stderr. The TUI owns the terminal, so it logs to a file
/// under the data directory; the returned guard flushes it on exit.
fn init_logging(cli: &Cli) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if cli.is_ask() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return None;
    }

    let log_dir = ConfigLoader::log_dir()?;
    if std::fs::create_dir_all(&log_dir).is_err() {
        return None;
    }
    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Some(guard)
}

fn tui_settings(config: &FileTuiConfig) -> TuiSettings {
    TuiSettings {
        tick: Duration::from_millis(config.tick_ms),
        reveal_threshold: config.reveal_threshold,
        reveal_duration: Duration::from_millis(config.reveal_duration_ms),
        nav_scroll_threshold: config.nav_scroll_threshold,
        star_count: config.star_count,
    }
}
