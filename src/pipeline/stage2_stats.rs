use crate::model::participant::Participant;
use crate::model::profile::PairingProfile;
use crate::model::stats::Statistics;
use crate::pipeline::EngineError;

pub fn mean_and_std_dev(scores: &[f64]) -> Result<(f64, f64), EngineError> {
    if scores.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    let (mean, std_dev) = moments(scores, 1.0);
    if mean.is_finite() && std_dev.is_finite() {
        return Ok((mean, std_dev));
    }

    // sums overflowed; redo on scores divided by the largest magnitude
    let scale = scores.iter().fold(0.0f64, |m, s| m.max(s.abs()));
    let (mean, std_dev) = moments(scores, scale);
    let (mean, std_dev) = (mean * scale, std_dev * scale);
    if !mean.is_finite() || !std_dev.is_finite() {
        return Err(EngineError::NumericOverflow(format!(
            "score statistics are not finite (mean={mean}, std_dev={std_dev})"
        )));
    }
    Ok((mean, std_dev))
}

fn moments(scores: &[f64], scale: f64) -> (f64, f64) {
    let n = scores.len() as f64;
    let mean = scores.iter().map(|s| s / scale).sum::<f64>() / n;
    let variance = scores
        .iter()
        .map(|s| (s / scale - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, variance.sqrt())
}

pub fn run_stage2(
    participants: &[Participant],
    profile: &PairingProfile,
) -> Result<Statistics, EngineError> {
    let raw = participants.iter().map(|p| p.raw_score).collect::<Vec<_>>();
    let (mean, std_dev) = mean_and_std_dev(&raw)?;
    Ok(Statistics {
        mean,
        std_dev,
        noise_factor: profile.noise_factor,
        alpha: profile.alpha,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_stats.rs"]
mod tests;
