use std::io::BufRead;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::input::InputError;
use crate::input::table::parse_score;
use crate::model::participant::RosterRecord;

pub fn parse_json_roster(reader: Box<dyn BufRead>) -> Result<Vec<RosterRecord>, InputError> {
    serde_json::from_reader(reader)
        .map_err(|e| InputError::Parse(format!("roster JSON is not an array of records: {e}")))
}

// Unusable cells become `None` so validation can name the record.
pub fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

pub fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_score(&s),
        _ => None,
    })
}
