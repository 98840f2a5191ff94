use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::model::participant::RosterRecord;

pub mod json;
pub mod reader;
pub mod table;

use json::parse_json_roster;
use table::parse_table_roster;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Tsv,
    Csv,
}

impl RosterFormat {
    pub fn delimiter(self) -> Option<char> {
        match self {
            RosterFormat::Json => None,
            RosterFormat::Tsv => Some('\t'),
            RosterFormat::Csv => Some(','),
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unsupported roster format: {0}")]
    UnsupportedFormat(String),
}

pub fn detect_format(path: &Path) -> Result<RosterFormat, InputError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_ascii_lowercase())
        .ok_or_else(|| InputError::MissingInput(format!("no file name in {}", path.display())))?;
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    let ext = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match ext {
        "json" => Ok(RosterFormat::Json),
        "tsv" | "txt" => Ok(RosterFormat::Tsv),
        "csv" => Ok(RosterFormat::Csv),
        _ => Err(InputError::UnsupportedFormat(format!(
            "{} (expected .json, .tsv, .txt or .csv, optionally gzipped)",
            path.display()
        ))),
    }
}

pub fn load_roster(path: &Path) -> Result<Vec<RosterRecord>, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "roster file not found: {}",
            path.display()
        )));
    }
    let format = detect_format(path)?;
    let reader = reader::open_maybe_gz(path)?;
    let records = match format.delimiter() {
        None => parse_json_roster(reader)?,
        Some(delim) => parse_table_roster(reader, delim)?,
    };
    info!(
        "loaded {} roster record(s) from {} ({:?})",
        records.len(),
        path.display(),
        format
    );
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
