//! Command handlers for `replay` and `check`.

use std::path::Path;

use skumatrix_core::{load_session_script, replay, AppConfig};

use crate::render::{render_json, render_table};
use crate::OutputFormat;

/// Replays the session script at `path` and prints the resulting table.
///
/// Blocked edits are logged as warnings and replay continues; an edit that
/// addresses something missing aborts the run.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded, an edit cannot be
/// applied, or `submit` is set and the included variants are not valid.
pub(crate) fn run_replay(
    config: &AppConfig,
    path: &Path,
    format: OutputFormat,
    submit: bool,
) -> anyhow::Result<()> {
    let script = load_session_script(path)?;
    tracing::info!(
        path = %path.display(),
        previous = script.previous.len(),
        edits = script.edits.len(),
        "replaying session script"
    );

    let outcome = replay(&script)?;
    for notice in &outcome.notices {
        tracing::warn!(step = notice.step, "{}", notice.message);
    }

    let rows = outcome.editor.rows();
    match format {
        OutputFormat::Table => print!("{}", render_table(&rows)),
        OutputFormat::Json => println!("{}", render_json(&rows)?),
    }

    if submit {
        let payload = outcome.editor.submission(config.min_price)?;
        tracing::info!(variants = payload.len(), "submission ready");
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}

/// Loads and validates the session script at `path`.
///
/// # Errors
///
/// Returns an error if the script cannot be read, parsed, or validated.
pub(crate) fn run_check(path: &Path) -> anyhow::Result<()> {
    let script = load_session_script(path)?;
    println!(
        "{}: ok ({} previous combinations, {} edits)",
        path.display(),
        script.previous.len(),
        script.edits.len()
    );
    Ok(())
}
