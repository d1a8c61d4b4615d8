//! Record store reader.
//!
//! Loads a CSV file or spreadsheet workbook into a [`ChallengeStore`]. The
//! first row is the header; the challenge-name and description columns are
//! required, every other column is carried along as an extra field.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto_from_rs};
use chrono::Timelike;
use sha2::{Digest, Sha256};

use crate::domain::{AppError, ChallengeRecord, ChallengeStore};

const NAME_HEADERS: &[&str] = &["challenge name", "name", "challenge"];
const DESCRIPTION_HEADERS: &[&str] = &["description", "beschrijving"];
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Header row plus data rows, all cells as trimmed text.
#[derive(Debug, Default)]
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Load a challenge store from a tabular file.
pub fn load(path: &Path) -> Result<ChallengeStore, AppError> {
    let bytes = fs::read(path)?;
    let fingerprint = hash_bytes(&bytes);

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let table = if extension == "csv" {
        read_csv(&bytes)?
    } else if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        read_workbook(&bytes, path)?
    } else {
        return Err(AppError::data_format(format!(
            "unsupported file type '{}': expected .csv or a spreadsheet workbook",
            path.display()
        )));
    };

    let records = records_from_table(table)?;
    let store = ChallengeStore::from_records(records, fingerprint, path);
    log::info!("loaded {} challenges from {}", store.len(), path.display());
    Ok(store)
}

pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

fn read_csv(bytes: &[u8]) -> Result<RawTable, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::data_format(format!("cannot read header row: {}", e)))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| AppError::data_format(format!("row {}: {}", index + 2, e)))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable { headers, rows })
}

/// Parse the first worksheet from the bytes that were fingerprinted.
fn read_workbook(bytes: &[u8], path: &Path) -> Result<RawTable, AppError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| AppError::data_format(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::data_format("workbook has no worksheets"))?
        .map_err(|e| AppError::data_format(format!("{}: {}", path.display(), e)))?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let headers = rows.next().unwrap_or_default();
    Ok(RawTable { headers, rows: rows.collect() })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::DateTime(value) => datetime_text(value),
        Data::DateTimeIso(text) | Data::DurationIso(text) => text.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// ISO rendering of a date-formatted cell; midnight values print as a bare date.
fn datetime_text(value: &ExcelDateTime) -> String {
    if value.is_duration()
        && let Some(duration) = value.as_duration()
    {
        let seconds = duration.num_seconds();
        return format!("{}:{:02}:{:02}", seconds / 3600, seconds % 3600 / 60, seconds % 60);
    }

    match value.as_datetime() {
        Some(datetime) if datetime.num_seconds_from_midnight() == 0 => {
            datetime.format("%Y-%m-%d").to_string()
        }
        Some(datetime) => datetime.format("%Y-%m-%dT%H:%M:%S").to_string(),
        None => value.as_f64().to_string(),
    }
}

fn records_from_table(table: RawTable) -> Result<Vec<ChallengeRecord>, AppError> {
    if table.headers.iter().all(|header| header.trim().is_empty()) {
        return Err(AppError::data_format("source table has no header row"));
    }

    let name_index = find_column(&table.headers, NAME_HEADERS)
        .ok_or_else(|| AppError::data_format("missing required column 'Challenge Name'"))?;
    let description_index = find_column(&table.headers, DESCRIPTION_HEADERS)
        .ok_or_else(|| AppError::data_format("missing required column 'Description'"))?;

    let extra_columns: Vec<(usize, &str)> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(index, header)| {
            *index != name_index && *index != description_index && !header.trim().is_empty()
        })
        .map(|(index, header)| (index, header.trim()))
        .collect();

    let mut records = Vec::with_capacity(table.rows.len());
    for (row_index, row) in table.rows.iter().enumerate() {
        let cell = |index: usize| row.get(index).map(|value| value.trim()).unwrap_or_default();

        let name = cell(name_index);
        if name.is_empty() {
            if row.iter().any(|value| !value.trim().is_empty()) {
                log::warn!("skipping row {}: empty challenge name", row_index + 2);
            }
            continue;
        }

        let fields = extra_columns
            .iter()
            .map(|(index, header)| (header.to_string(), cell(*index).to_string()))
            .collect();
        records.push(ChallengeRecord::new(name, cell(description_index), fields));
    }

    Ok(records)
}

fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates.iter().find_map(|candidate| {
        headers.iter().position(|header| header.trim().eq_ignore_ascii_case(candidate))
    })
}
