use anyhow::Result;
use std::path::PathBuf;

use crate::aggregate;
use crate::cli;
use crate::config;
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, AnalysisReport};
use crate::io::csv::read_dataset;
use crate::pipeline;
use crate::session::SessionStore;

#[derive(Debug)]
pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub formatting: FormattingConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    config.formatting.apply();
    let settings = config::load_config();

    let session = SessionStore::new();
    session.replace(read_dataset(&config.path)?);

    let defects = session.update(|dataset| pipeline::run(dataset, &settings.risk))?;
    let report = session.with_dataset(|dataset| {
        AnalysisReport::new(
            &config.path,
            dataset,
            aggregate::summarize(dataset),
            defects,
            None,
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
