use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRecord {
    #[serde(default, deserialize_with = "crate::input::json::lenient_name")]
    pub name: Option<String>,
    #[serde(
        default,
        alias = "score",
        deserialize_with = "crate::input::json::lenient_score"
    )]
    pub raw_score: Option<f64>,
}

impl RosterRecord {
    pub fn new(name: impl Into<String>, raw_score: f64) -> Self {
        Self {
            name: Some(name.into()),
            raw_score: Some(raw_score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: usize,
    pub name: String,
    pub raw_score: f64,
    pub noisy_score: f64,
}

impl Participant {
    pub fn new(id: usize, name: String, raw_score: f64) -> Self {
        Self {
            id,
            name,
            raw_score,
            noisy_score: raw_score,
        }
    }
}
