pub mod json;
pub mod text;

use serde::Serialize;
use thiserror::Error;

use crate::model::group::{Group, TeachingMode};
use crate::model::participant::Participant;
use crate::model::stats::Statistics;
use crate::pipeline::EngineOutput;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView<'a> {
    pub student1: &'a Participant,
    pub student2: &'a Participant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student3: Option<&'a Participant>,
    pub mode: TeachingMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<&'a Participant>,
}

impl GroupView<'_> {
    pub fn members(&self) -> Vec<&Participant> {
        let mut out = vec![self.student1, self.student2];
        out.extend(self.student3);
        out
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData<'a> {
    pub tool: &'a str,
    pub version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub students: &'a [Participant],
    pub pairs: Vec<GroupView<'a>>,
    pub stats: Statistics,
}

impl SummaryData<'_> {
    pub fn trio_count(&self) -> usize {
        self.pairs.iter().filter(|g| g.student3.is_some()).count()
    }

    pub fn mode_count(&self, mode: TeachingMode) -> usize {
        self.pairs.iter().filter(|g| g.mode == mode).count()
    }
}

pub fn group_view<'a>(output: &'a EngineOutput, group: &Group) -> GroupView<'a> {
    GroupView {
        student1: &output.students[group.members[0]],
        student2: &output.students[group.members[1]],
        student3: group.members.get(2).map(|&id| &output.students[id]),
        mode: group.mode,
        teacher: group.teacher.and_then(|id| output.participant(id)),
    }
}

pub fn build_summary<'a>(
    output: &'a EngineOutput,
    tool: &'a str,
    version: &'a str,
    seed: Option<u64>,
) -> SummaryData<'a> {
    SummaryData {
        tool,
        version,
        seed,
        students: &output.students,
        pairs: output.groups.iter().map(|g| group_view(output, g)).collect(),
        stats: output.stats,
    }
}

pub fn format_score(v: f64) -> String {
    format!("{:.1}", v)
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
