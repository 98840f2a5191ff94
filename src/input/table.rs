use std::io::BufRead;

use tracing::debug;

use crate::input::InputError;
use crate::model::participant::RosterRecord;

const NAME_KEYS: &[&str] = &["name", "player", "nickname", "student"];
const SCORE_KEYS: &[&str] = &["score", "points"];

pub fn parse_table_roster(
    mut reader: Box<dyn BufRead>,
    delim: char,
) -> Result<Vec<RosterRecord>, InputError> {
    let mut buf = String::new();
    let mut line_no = 0usize;

    let header = loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Err(InputError::Parse("roster file is empty".to_string()));
        }
        line_no += 1;
        let line = buf.trim_end();
        if !line.trim().is_empty() {
            break split_fields(line, delim);
        }
    };

    let name_col = find_column(&header, NAME_KEYS, None).ok_or_else(|| {
        InputError::MissingInput(format!(
            "roster header has no name column (expected one of: {})",
            NAME_KEYS.join(", ")
        ))
    })?;
    let score_col = find_column(&header, SCORE_KEYS, Some(name_col)).ok_or_else(|| {
        InputError::MissingInput(format!(
            "roster header has no score column (expected one of: {})",
            SCORE_KEYS.join(", ")
        ))
    })?;
    debug!(
        "roster columns: name={:?} score={:?}",
        header[name_col], header[score_col]
    );

    let mut records = Vec::new();
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.trim().is_empty() {
            debug!("skipping blank roster line {}", line_no);
            continue;
        }
        let fields = split_fields(line, delim);
        let name = fields
            .get(name_col)
            .filter(|s| !s.is_empty())
            .cloned();
        let raw_score = fields.get(score_col).and_then(|s| parse_score(s));
        records.push(RosterRecord { name, raw_score });
    }

    Ok(records)
}

fn split_fields(line: &str, delim: char) -> Vec<String> {
    line.split(delim)
        .map(|s| s.trim().trim_matches('"').trim().to_string())
        .collect()
}

fn find_column(header: &[String], keys: &[&str], skip: Option<usize>) -> Option<usize> {
    header.iter().enumerate().find_map(|(idx, col)| {
        if Some(idx) == skip {
            return None;
        }
        let lower = col.to_ascii_lowercase();
        keys.iter().any(|k| lower.contains(k)).then_some(idx)
    })
}

pub fn parse_score(cell: &str) -> Option<f64> {
    let cleaned = cell.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
