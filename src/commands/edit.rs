use anyhow::Result;
use std::path::PathBuf;

use crate::aggregate;
use crate::cli;
use crate::config;
use crate::core::errors::Error;
use crate::edit::{apply_edits, CellEdit, EditSet};
use crate::formatting::FormattingConfig;
use crate::io::csv::{read_dataset, write_dataset};
use crate::io::output::{create_writer, AnalysisReport};
use crate::pipeline;
use crate::session::SessionStore;

#[derive(Debug)]
pub struct EditConfig {
    pub path: PathBuf,
    pub assignments: Vec<String>,
    pub save: Option<PathBuf>,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub formatting: FormattingConfig,
}

pub fn handle_edit(config: EditConfig) -> Result<()> {
    config.formatting.apply();
    let settings = config::load_config();
    let edits = parse_assignments(&config.assignments)?;

    let session = SessionStore::new();
    session.replace(read_dataset(&config.path)?);

    // Derived columns must exist before edits are applied; edits may
    // target them.
    session.update(|dataset| pipeline::run(dataset, &settings.risk))?;

    let snapshot = session.snapshot()?;
    let (updated, outcome) = apply_edits(&snapshot, &edits);
    session.replace(updated);

    // Full recompute; derived cells touched by an edit are overwritten.
    let defects = session.update(|dataset| pipeline::run(dataset, &settings.risk))?;

    if let Some(save) = &config.save {
        session.with_dataset(|dataset| write_dataset(dataset, save))??;
        log::info!("saved updated dataset to {}", save.display());
    }

    let report = session.with_dataset(|dataset| {
        AnalysisReport::new(
            &config.path,
            dataset,
            aggregate::summarize(dataset),
            defects,
            Some(outcome),
        )
    })?;

    let format = super::resolve_format(config.format, &settings);
    let mut writer = create_writer(
        format,
        config.output.as_deref(),
        config.top,
        config.formatting,
    )?;
    writer.write_report(&report)?;
    Ok(())
}

/// Turn `--set COLUMN_ROW=VALUE` arguments into an edit set.
///
/// Syntax errors are rejected here; edits that target unknown rows or
/// columns parse fine and are silently skipped at apply time.
fn parse_assignments(assignments: &[String]) -> crate::core::errors::Result<EditSet> {
    let mut edits = EditSet::new();
    for assignment in assignments {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            Error::Edit(format!("expected COLUMN_ROW=VALUE, got '{assignment}'"))
        })?;
        match CellEdit::parse_key(key, value) {
            Some(edit) => edits.push(edit),
            None => {
                return Err(Error::Edit(format!(
                    "edit key '{key}' has no trailing row index"
                )))
            }
        }
    }
    Ok(edits)
}
