//! Command handlers

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tokio::io::AsyncReadExt;

use code_translator_app::AppState;
use code_translator_core::services::{LanguageRegistry, SubmitOutcome};
use code_translator_core::types::{FailureReason, TranslationRecord};

use crate::console::summary_line;

pub fn languages(registry: LanguageRegistry) {
    for language in registry.all() {
        println!("{:<12} {}", language.code, language.label);
    }
}

pub async fn translate(
    state: &AppState,
    from: &str,
    to: &str,
    file: Option<&Path>,
    copy: bool,
) -> Result<()> {
    let code = match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut code = String::new();
            tokio::io::stdin()
                .read_to_string(&mut code)
                .await
                .context("Failed to read stdin")?;
            code
        }
    };

    let orchestrator = &state.orchestrator;
    orchestrator.set_source_language(from);
    orchestrator.set_target_language(to);
    orchestrator.set_input_code(code);

    let outcome = orchestrator.submit().await;
    // persistence runs in the background; wait so the record is not lost on exit
    orchestrator.flush_history().await;

    match outcome {
        SubmitOutcome::Succeeded { output_code } => {
            print!("{output_code}");
            if !output_code.ends_with('\n') {
                println!();
            }
            if copy {
                state.clipboard.copy(&output_code)?;
            }
            Ok(())
        }
        SubmitOutcome::Failed { reason } => match reason {
            FailureReason::Validation(e) => Err(anyhow!("translation failed: {e}")),
            FailureReason::RemoteTranslation { message } => {
                Err(anyhow!("translation failed: {message}"))
            }
        },
        SubmitOutcome::Ignored | SubmitOutcome::Discarded => {
            bail!("translation was interrupted")
        }
    }
}

pub async fn history(state: &AppState) -> Result<()> {
    let records = load_history(state).await?;
    if records.is_empty() {
        println!("No translations yet.");
        return Ok(());
    }
    print_listing(state, &records);
    Ok(())
}

pub async fn search(state: &AppState, query: &str) -> Result<()> {
    load_history(state).await?;
    let matches = state.history.search(query);
    if matches.is_empty() {
        println!("No translations match \"{query}\".");
        return Ok(());
    }
    print_listing(state, &matches);
    Ok(())
}

pub async fn show(state: &AppState, id: &str) -> Result<()> {
    let record = resolve(state, id).await?;
    let languages = state.languages;
    println!(
        "{}",
        summary_line(
            &record,
            languages.label(&record.source_language),
            languages.label(&record.target_language)
        )
    );
    println!("--- input ({}) ---", record.source_language);
    println!("{}", record.input_code);
    println!("--- output ({}) ---", record.target_language);
    println!("{}", record.output_code);
    Ok(())
}

pub async fn delete(state: &AppState, id: &str) -> Result<()> {
    let record = resolve(state, id).await?;
    state.history.delete(&record.id).await?;
    Ok(())
}

pub async fn copy(state: &AppState, id: &str, input: bool) -> Result<()> {
    let record = resolve(state, id).await?;
    let text = if input {
        &record.input_code
    } else {
        &record.output_code
    };
    state.clipboard.copy(text)?;
    Ok(())
}

async fn load_history(state: &AppState) -> Result<Vec<TranslationRecord>> {
    if state.session().current().is_none() {
        bail!("not signed in; set CODE_TRANSLATOR_USER or pass --user");
    }
    Ok(state.history.refresh().await?)
}

/// Shortest id prefix accepted; the listing shows eight characters.
const MIN_ID_PREFIX: usize = 4;

/// Find a record by full id or unique id prefix.
async fn resolve(state: &AppState, id: &str) -> Result<TranslationRecord> {
    let records = load_history(state).await?;
    match_record_id(records, id)
}

/// Record whose id equals `query` (a leading `#` is ignored) or, failing
/// that, the only one starting with it.
fn match_record_id(records: Vec<TranslationRecord>, query: &str) -> Result<TranslationRecord> {
    let query = query.trim().trim_start_matches('#');
    if query.is_empty() {
        bail!("no translation id given");
    }
    if let Some(record) = records.iter().find(|r| r.id == query) {
        return Ok(record.clone());
    }
    if query.chars().count() < MIN_ID_PREFIX {
        bail!("id prefix {query} is too short; use at least {MIN_ID_PREFIX} characters");
    }

    let mut matches = records.into_iter().filter(|r| r.id.starts_with(query));
    match (matches.next(), matches.next()) {
        (Some(record), None) => Ok(record),
        (Some(_), Some(_)) => bail!("id prefix {query} is ambiguous"),
        (None, _) => bail!("no translation with id {query}"),
    }
}

fn print_listing(state: &AppState, records: &[TranslationRecord]) {
    let languages = state.languages;
    for record in records {
        println!(
            "{}",
            summary_line(
                record,
                languages.label(&record.source_language),
                languages.label(&record.target_language)
            )
        );
    }
}
