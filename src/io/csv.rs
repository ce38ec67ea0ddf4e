//! CSV ingestion and serialization for the dataset.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::core::dataset::{CellValue, Dataset};
use crate::core::errors::{Error, Result};

/// Read a survey CSV into a dataset.
///
/// The header row becomes the column set verbatim; empty fields become
/// `Missing` and everything else stays raw text until normalization.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path)
        .map_err(|e| Error::ingestion(format!("failed to open {}: {e}", path.display()), path))?;
    read_dataset_from_reader(file)
}

pub fn read_dataset_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut columns: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (index, field) in record.iter().enumerate() {
            columns[index].push(parse_field(field));
        }
    }

    let dataset = Dataset::from_columns(headers.into_iter().zip(columns))?;
    log::debug!(
        "ingested {} records across {} columns",
        dataset.row_count(),
        dataset.columns().len()
    );
    Ok(dataset)
}

fn parse_field(field: &str) -> CellValue {
    if field.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(field.to_string())
    }
}

/// Write the dataset (base and derived columns) back out as CSV.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::ingestion(format!("failed to create {}: {e}", path.display()), path))?;
    write_dataset_to_writer(dataset, file)
}

pub fn write_dataset_to_writer<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(dataset.columns())?;
    for row in 0..dataset.row_count() {
        let record: Vec<String> = dataset
            .columns()
            .iter()
            .map(|column| {
                dataset
                    .cell(row, column)
                    .map(CellValue::to_string)
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
