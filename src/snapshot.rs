//! Snapshot file formats: `data.json` (repository records) and
//! `chartData.json` (pre-aggregated chart datasets).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LangLensError, Result};
use crate::github::RepositoryRecord;

/// One chart-ready language entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartEntry {
    pub language: String,
    pub value: u64,
}

impl ChartEntry {
    #[must_use]
    pub fn new(language: impl Into<String>, value: u64) -> Self {
        Self {
            language: language.into(),
            value,
        }
    }
}

/// The dataset shape both chart renderers consume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartDataset {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub languages: Vec<ChartEntry>,
}

/// `chartData.json` element: the dataset sits under a `chart` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartRecord {
    pub chart: ChartDataset,
}

/// Read a repository snapshot (`data.json`).
///
/// # Errors
/// Returns a file-read error if the path is unreadable and a data shape
/// error if the content is not a repository array.
pub fn load_records(path: &Path) -> Result<Vec<RepositoryRecord>> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| {
        LangLensError::DataShape(format!("{} is not a repository snapshot: {e}", path.display()))
    })
}

/// Write a repository snapshot (`data.json`).
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn save_records(path: &Path, records: &[RepositoryRecord]) -> Result<()> {
    let content = serde_json::to_string_pretty(records)?;
    fs::write(path, content)?;
    Ok(())
}

/// Read a chart dataset file (`chartData.json`). The first record's
/// dataset is returned; the file holds an array for forward
/// compatibility with multiple charts.
///
/// # Errors
/// Returns a file-read error if the path is unreadable and a data shape
/// error if the content is not a chart record array or the array is
/// empty.
pub fn load_chart_dataset(path: &Path) -> Result<ChartDataset> {
    let content = read_file(path)?;
    let records: Vec<ChartRecord> = serde_json::from_str(&content).map_err(|e| {
        LangLensError::DataShape(format!("{} is not a chart dataset: {e}", path.display()))
    })?;
    records
        .into_iter()
        .next()
        .map(|record| record.chart)
        .ok_or_else(|| {
            LangLensError::DataShape(format!("{} contains no chart records", path.display()))
        })
}

/// Write a chart dataset file (`chartData.json`).
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn save_chart_dataset(path: &Path, dataset: &ChartDataset) -> Result<()> {
    let records = vec![ChartRecord {
        chart: dataset.clone(),
    }];
    let content = serde_json::to_string_pretty(&records)?;
    fs::write(path, content)?;
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LangLensError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
