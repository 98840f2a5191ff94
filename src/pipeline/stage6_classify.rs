use crate::model::group::{Group, TeachingMode};
use crate::model::participant::Participant;
use crate::model::stats::Statistics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub mode: TeachingMode,
    pub teacher: Option<usize>,
}

pub fn score_gap(a: f64, b: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return 0.0;
    }
    (a - b).abs() / std_dev
}

pub fn stronger_member(a: &Participant, b: &Participant) -> usize {
    if a.raw_score > b.raw_score {
        a.id
    } else if b.raw_score > a.raw_score {
        b.id
    } else {
        a.id.min(b.id)
    }
}

pub fn classify_pair(a: &Participant, b: &Participant, stats: &Statistics) -> Classification {
    let gap = score_gap(a.noisy_score, b.noisy_score, stats.std_dev);
    if gap > stats.alpha {
        Classification {
            mode: TeachingMode::TeacherLed,
            teacher: Some(stronger_member(a, b)),
        }
    } else {
        Classification {
            mode: TeachingMode::Balanced,
            teacher: None,
        }
    }
}

pub fn run_stage6(groups: &mut [Group], participants: &[Participant], stats: &Statistics) {
    for group in groups.iter_mut() {
        let class = if group.is_pair() {
            classify_pair(
                &participants[group.members[0]],
                &participants[group.members[1]],
                stats,
            )
        } else {
            Classification {
                mode: TeachingMode::Balanced,
                teacher: None,
            }
        };
        group.mode = class.mode;
        group.teacher = class.teacher;
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_classify.rs"]
mod tests;
