pub mod stage1_validate;
pub mod stage2_stats;
pub mod stage3_noise;
pub mod stage4_rank;
pub mod stage5_groups;
pub mod stage6_classify;
pub mod stage7_randomize;
pub mod stage8_report;

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use crate::model::group::{Group, TeachingMode};
use crate::model::participant::{Participant, RosterRecord};
use crate::model::profile::PairingProfile;
use crate::model::stats::Statistics;
use crate::rng::UniformSource;

use stage1_validate::run_stage1;
use stage2_stats::run_stage2;
use stage3_noise::run_stage3;
use stage4_rank::run_stage4;
use stage5_groups::run_stage5;
use stage6_classify::run_stage6;
use stage7_randomize::run_stage7;

#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRecord {
    pub position: usize,
    pub name: Option<String>,
    pub reason: &'static str,
}

impl fmt::Display for InvalidRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "record {} ({name}): {}", self.position + 1, self.reason),
            None => write!(f, "record {}: {}", self.position + 1, self.reason),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no participants supplied")]
    EmptyInput,
    #[error(
        "{} roster record(s) lack a usable name or score: {}",
        .invalid.len(),
        join_invalid(.invalid)
    )]
    MissingField { invalid: Vec<InvalidRecord> },
    #[error("cannot form groups from {count} participant; at least 2 are required")]
    InsufficientParticipants { count: usize },
    #[error("invalid pairing profile: {0}")]
    InvalidProfile(String),
    #[error("numeric overflow: {0}")]
    NumericOverflow(String),
    #[error("random source returned {attempts} consecutive zero draws")]
    DegenerateRandomSource { attempts: usize },
}

fn join_invalid(invalid: &[InvalidRecord]) -> String {
    invalid
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub students: Vec<Participant>,
    pub groups: Vec<Group>,
    pub stats: Statistics,
}

impl EngineOutput {
    pub fn participant(&self, id: usize) -> Option<&Participant> {
        self.students.get(id)
    }

    pub fn trio_count(&self) -> usize {
        self.groups.iter().filter(|g| g.is_trio()).count()
    }

    pub fn mode_count(&self, mode: TeachingMode) -> usize {
        self.groups.iter().filter(|g| g.mode == mode).count()
    }
}

pub fn run_engine(
    records: &[RosterRecord],
    profile: &PairingProfile,
    source: &mut dyn UniformSource,
) -> Result<EngineOutput, EngineError> {
    profile.validate()?;

    let mut students = run_stage1(records)?;
    let stats = run_stage2(&students, profile)?;
    info!(
        "roster: {} participants, mean={:.3}, std_dev={:.3}",
        students.len(),
        stats.mean,
        stats.std_dev
    );

    run_stage3(&mut students, &stats, source)?;
    let ranking = run_stage4(&students);
    debug!("noisy ranking: {:?}", ranking);

    let mut groups = run_stage5(&ranking, source)?;
    run_stage6(&mut groups, &students, &stats);
    run_stage7(&mut groups, source);

    let output = EngineOutput {
        students,
        groups,
        stats,
    };
    info!(
        "formed {} groups ({} trio, {} teacher-led, {} balanced)",
        output.groups.len(),
        output.trio_count(),
        output.mode_count(TeachingMode::TeacherLed),
        output.mode_count(TeachingMode::Balanced)
    );
    Ok(output)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
