//! Command-line entry point for Code Translator
//!
//! Translates source files through the configured remote engine and manages
//! the signed-in user's translation history. Logs go to stderr.

mod cli;
mod commands;
mod console;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use code_translator_app::{AppConfig, AppStateBuilder};
use code_translator_core::services::LanguageRegistry;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};
use console::ConsoleNotifier;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    // needs no engine or storage
    if cli.command == Command::Languages {
        commands::languages(LanguageRegistry);
        return ExitCode::SUCCESS;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {e:?}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load(cli.config_path.as_deref())
        .await
        .context("Failed to load configuration")?;
    config.apply_env()?;
    if let Some(user) = cli.user {
        config.session.user_id = Some(user);
    }

    let state = AppStateBuilder::from_config(&config)
        .await?
        .notifier(Arc::new(ConsoleNotifier))
        .build()?;
    tracing::info!("Code Translator ready");

    match cli.command {
        Command::Translate {
            from,
            to,
            file,
            copy,
        } => commands::translate(&state, &from, &to, file.as_deref(), copy).await,
        Command::History => commands::history(&state).await,
        Command::Search { query } => commands::search(&state, &query.join(" ")).await,
        Command::Show { id } => commands::show(&state, &id).await,
        Command::Delete { id } => commands::delete(&state, &id).await,
        Command::Copy { id, input } => commands::copy(&state, &id, input).await,
        Command::Languages => Ok(()),
    }
}
