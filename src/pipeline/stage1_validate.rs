use tracing::warn;

use crate::model::participant::{Participant, RosterRecord};
use crate::pipeline::{EngineError, InvalidRecord};

pub fn run_stage1(records: &[RosterRecord]) -> Result<Vec<Participant>, EngineError> {
    if records.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let mut participants = Vec::with_capacity(records.len());
    let mut invalid = Vec::new();

    for (position, record) in records.iter().enumerate() {
        let name = record
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());
        let score = record.raw_score.filter(|s| s.is_finite());

        match (name, score) {
            (Some(name), Some(score)) => {
                participants.push(Participant::new(position, name.to_string(), score));
            }
            (None, _) => invalid.push(InvalidRecord {
                position,
                name: None,
                reason: if score.is_none() {
                    "missing name and score"
                } else {
                    "missing name"
                },
            }),
            (Some(name), None) => invalid.push(InvalidRecord {
                position,
                name: Some(name.to_string()),
                reason: if record.raw_score.is_some() {
                    "score is not a finite number"
                } else {
                    "missing score"
                },
            }),
        }
    }

    if !invalid.is_empty() {
        warn!("rejecting roster: {} invalid record(s)", invalid.len());
        return Err(EngineError::MissingField { invalid });
    }

    Ok(participants)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
