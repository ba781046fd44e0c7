//! End-to-end cleanup of a verb dataset

use crate::{
    batch,
    config::Config,
    error::PipelineError,
    frequency::FrequencyTable,
    progress::{ProgressReport, Work},
    record::{VerbRecord, REMOVED_CATEGORIES},
};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::{fs, path::Path};

/// What a successful run produced
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary {
    /// Number of verb records written out
    pub records: usize,

    /// Number of batch files written out
    pub batches: usize,
}

/// Load, clean up, sort and save a verb dataset
///
/// Batch files are written first, in order, and the consolidated output is
/// written last, so its presence signals that the run went through. If a
/// write fails, batch files that were already written are left in place.
pub fn run(config: &Config, report: &ProgressReport) -> Result<Summary, PipelineError> {
    // Load the raw records
    report.println(format!("Reading file: {}", config.input.display()));
    let records = load(&config.input)?;
    report.println(format!("Found {} verbs to process", records.len()));

    // Clean them up and order them by decreasing usage frequency
    let mut cleaned = sanitize_all(&records, config.sequential, report);
    sort_by_frequency(&mut cleaned, &config.frequencies);
    report.println(format!(
        "Removed {} properties",
        REMOVED_CATEGORIES
            .iter()
            .map(|category| format!("{category:?}"))
            .collect::<Vec<_>>()
            .join(", ")
    ));
    report.println("Replaced Spanish pronouns with shorter codes (yo→1s, tú→2s, etc.)");
    report.println("Removed redundant Ud./Uds. forms when identical to 3s/3p");
    report.println("Sorted verbs by frequency of appearance in Spanish");

    // Set up the output directory
    if let Some(dir) = config.output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| PipelineError::io(dir, e))?;
    }

    // Write down the batches, then the consolidated output
    let num_batches = cleaned.len().div_ceil(config.batch_size.get());
    let writes = report.add("Writing batches", Work::Steps(num_batches));
    for (idx, records) in batch::partition(&cleaned, config.batch_size).enumerate() {
        let batch_number = idx + 1;
        let path = batch::batch_path(&config.output, batch_number);
        write_json(&path, records)?;
        writes.make_progress(1);
        report.println(format!(
            "Batch {batch_number}: {} verbs written to {}",
            records.len(),
            path.file_name().unwrap_or_default().to_string_lossy()
        ));
    }
    write_json(&config.output, &cleaned)?;
    report.println(format!("Complete file written to: {}", config.output.display()));
    report.println(format!(
        "Processed {} verbs in {num_batches} batches successfully",
        cleaned.len()
    ));
    Ok(Summary {
        records: cleaned.len(),
        batches: num_batches,
    })
}

/// Load the raw verb records from a JSON file
pub fn load(path: &Path) -> Result<Vec<VerbRecord>, PipelineError> {
    let bytes = fs::read(path).map_err(|e| PipelineError::io(path, e))?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|e| PipelineError::parse(path, e))?;
    let Value::Array(items) = value else {
        return Err(PipelineError::schema(
            path,
            None,
            "top-level value is not an array of verb records",
        ));
    };
    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            VerbRecord::from_value(item)
                .map_err(|reason| PipelineError::schema(path, Some(index), reason))
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("Loaded {} verb records from {}", records.len(), path.display());
    Ok(records)
}

/// Sanitize every record, preserving their relative order
pub fn sanitize_all(
    records: &[VerbRecord],
    sequential: bool,
    report: &ProgressReport,
) -> Vec<VerbRecord> {
    let progress = report.add("Cleaning up verbs", Work::PercentSteps(records.len()));
    let sanitize = |record: &VerbRecord| {
        let sanitized = record.sanitize();
        progress.make_progress(1);
        sanitized
    };
    if sequential {
        records.iter().map(sanitize).collect()
    } else {
        records.par_iter().map(sanitize).collect()
    }
}

/// Order records by increasing frequency rank
///
/// The sort is stable: records of equal rank, which includes all verbs that
/// are missing from the frequency table, keep their relative order.
pub fn sort_by_frequency(records: &mut [VerbRecord], frequencies: &FrequencyTable) {
    records.sort_by_key(|record| frequencies.rank(record.infinitive()));
}

/// Write down a value as compact JSON, replacing any previous file content
fn write_json(path: &Path, value: &(impl Serialize + ?Sized)) -> Result<(), PipelineError> {
    let json = serde_json::to_vec(value).expect("verb records should always be serializable");
    fs::write(path, json).map_err(|e| PipelineError::io(path, e))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}
