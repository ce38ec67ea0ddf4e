//! Report assembly and the output writers handed to renderers.

use chrono::{DateTime, Utc};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::aggregate::DashboardSummary;
use crate::core::dataset::{columns, CellValue, Dataset};
use crate::edit::EditOutcome;
use crate::formatting::FormattingConfig;
use crate::pipeline::classify::RiskLevel;
use crate::pipeline::PipelineReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

/// Everything a renderer needs: the five summary values, the defect
/// counters, and the full record table.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub source: PathBuf,
    pub summary: DashboardSummary,
    pub defects: PipelineReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edits: Option<EditOutcome>,
    pub columns: Vec<String>,
    pub records: Vec<BTreeMap<String, CellValue>>,
}

impl AnalysisReport {
    pub fn new(
        source: &Path,
        dataset: &Dataset,
        summary: DashboardSummary,
        defects: PipelineReport,
        edits: Option<EditOutcome>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.to_path_buf(),
            summary,
            defects,
            edits,
            columns: dataset.columns().to_vec(),
            records: dataset.records(),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    limit: Option<usize>,
    formatting: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(
            sink,
            limit,
            formatting.color.should_use_color(),
        )),
    })
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let summary = &report.summary;

        writeln!(self.writer, "# Burnmap Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Source: {}", report.source.display())?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Records | {} |", summary.total_records)?;
        writeln!(
            self.writer,
            "| Average Burnout Score | {} |",
            format_average(summary.average_burnout)
        )?;
        writeln!(
            self.writer,
            "| High Risk Records | {} |",
            summary.high_risk_count
        )?;
        for (level, count) in RiskLevel::ALL.iter().zip(summary.risk_counts) {
            writeln!(self.writer, "| {} Risk | {} |", level, count)?;
        }
        writeln!(
            self.writer,
            "| Defaulted Cells | {} |",
            report.defects.coerced_cells
        )?;
        writeln!(
            self.writer,
            "| Zero-Sleep Guards | {} |",
            report.defects.zero_sleep_guards
        )?;
        if let Some(edits) = report.edits {
            writeln!(self.writer, "| Edits Applied | {} |", edits.applied)?;
            writeln!(self.writer, "| Edits Ignored | {} |", edits.ignored)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Records")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | {} |", report.columns.join(" | "))?;
        writeln!(
            self.writer,
            "|---|{}|",
            report.columns.iter().map(|_| "---").collect::<Vec<_>>().join("|")
        )?;
        for (index, record) in report.records.iter().enumerate() {
            let cells: Vec<String> = report
                .columns
                .iter()
                .map(|column| {
                    record
                        .get(column)
                        .map(CellValue::to_string)
                        .unwrap_or_default()
                })
                .collect();
            writeln!(self.writer, "| {} | {} |", index, cells.join(" | "))?;
        }

        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    limit: Option<usize>,
    use_color: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, limit: Option<usize>, use_color: bool) -> Self {
        Self {
            writer,
            limit,
            use_color,
        }
    }

    fn risk_cell(&self, label: &str) -> Cell {
        if !self.use_color {
            return Cell::new(label);
        }
        match RiskLevel::parse(label) {
            Some(RiskLevel::High) => Cell::new(label).fg(Color::Red),
            Some(RiskLevel::Medium) => Cell::new(label).fg(Color::Yellow),
            Some(RiskLevel::Low) => Cell::new(label).fg(Color::Green),
            None => Cell::new(label),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let summary = &report.summary;

        writeln!(self.writer, "{}", "Burnout Analysis".bold())?;
        writeln!(self.writer, "Source: {}", report.source.display())?;
        writeln!(self.writer)?;

        writeln!(self.writer, "Records analyzed:      {}", summary.total_records)?;
        writeln!(
            self.writer,
            "Average burnout score: {}",
            format_average(summary.average_burnout)
        )?;
        let high = summary.high_risk_count.to_string();
        let high = if summary.high_risk_count > 0 {
            high.red().bold().to_string()
        } else {
            high.green().to_string()
        };
        writeln!(self.writer, "High risk records:     {high}")?;
        writeln!(
            self.writer,
            "Risk distribution:     {} low / {} medium / {} high",
            summary.risk_counts[0], summary.risk_counts[1], summary.risk_counts[2]
        )?;
        if report.defects.coerced_cells > 0 || report.defects.zero_sleep_guards > 0 {
            let note = format!(
                "Data quality:          {} cells defaulted, {} zero-sleep guards",
                report.defects.coerced_cells, report.defects.zero_sleep_guards
            );
            writeln!(self.writer, "{}", note.yellow())?;
        }
        if let Some(edits) = report.edits {
            writeln!(
                self.writer,
                "Edits:                 {} applied, {} ignored",
                edits.applied, edits.ignored
            )?;
        }
        writeln!(self.writer)?;

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut header = vec![Cell::new("#")];
        header.extend(report.columns.iter().map(Cell::new));
        table.set_header(header);

        let shown = self.limit.unwrap_or(report.records.len());
        for (index, record) in report.records.iter().take(shown).enumerate() {
            let mut row = vec![Cell::new(index)];
            for column in &report.columns {
                let text = record
                    .get(column)
                    .map(CellValue::to_string)
                    .unwrap_or_default();
                let cell = if column == columns::RISK {
                    self.risk_cell(&text)
                } else {
                    Cell::new(text)
                };
                row.push(cell);
            }
            table.add_row(row);
        }
        writeln!(self.writer, "{table}")?;

        if shown < report.records.len() {
            writeln!(
                self.writer,
                "... and {} more records",
                report.records.len() - shown
            )?;
        }
        Ok(())
    }
}

fn format_average(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{value:.1}"),
        None => "n/a (no records)".to_string(),
    }
}
