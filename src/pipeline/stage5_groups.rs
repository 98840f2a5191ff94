use crate::model::group::Group;
use crate::pipeline::EngineError;
use crate::rng::{UniformSource, shuffle};

pub fn run_stage5(
    ranking: &[usize],
    source: &mut dyn UniformSource,
) -> Result<Vec<Group>, EngineError> {
    let n = ranking.len();
    match n {
        0 => return Ok(Vec::new()),
        1 => return Err(EngineError::InsufficientParticipants { count: 1 }),
        _ => {}
    }

    let mut groups = Vec::with_capacity(n / 2);
    if n % 2 == 0 {
        for i in 0..n / 2 {
            groups.push(Group::pair(ranking[i], ranking[n - 1 - i]));
        }
    } else {
        let mid = n / 2;
        for i in 0..(n - 3) / 2 {
            groups.push(Group::pair(ranking[i], ranking[n - 1 - i]));
        }
        let mut trio = [ranking[mid - 1], ranking[mid], ranking[mid + 1]];
        shuffle(&mut trio, source);
        groups.push(Group::trio(trio));
    }
    Ok(groups)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_groups.rs"]
mod tests;
