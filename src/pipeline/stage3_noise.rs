use std::f64::consts::PI;

use crate::model::participant::Participant;
use crate::model::stats::Statistics;
use crate::pipeline::EngineError;
use crate::rng::UniformSource;

const MAX_DEGENERATE_DRAWS: usize = 64;

// Box-Muller; ln(u1) needs u1 > 0, so zero draws are resampled.
pub fn standard_normal(source: &mut dyn UniformSource) -> Result<f64, EngineError> {
    let mut u1 = source.next_uniform();
    let mut attempts = 1usize;
    while u1.is_nan() || u1 <= 0.0 {
        if attempts >= MAX_DEGENERATE_DRAWS {
            return Err(EngineError::DegenerateRandomSource { attempts });
        }
        u1 = source.next_uniform();
        attempts += 1;
    }
    let u2 = source.next_uniform();
    Ok((-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos())
}

pub fn run_stage3(
    participants: &mut [Participant],
    stats: &Statistics,
    source: &mut dyn UniformSource,
) -> Result<(), EngineError> {
    let scale = stats.noise_scale();
    if !scale.is_finite() {
        return Err(EngineError::NumericOverflow(format!(
            "noise scale is not finite (noise_factor={}, std_dev={})",
            stats.noise_factor, stats.std_dev
        )));
    }
    // draws are consumed even at zero scale
    for p in participants.iter_mut() {
        let z0 = standard_normal(source)?;
        let noise = if scale == 0.0 { 0.0 } else { z0 * scale };
        p.noisy_score = p.raw_score + noise;
        if !p.noisy_score.is_finite() {
            return Err(EngineError::NumericOverflow(format!(
                "noisy score for {} is not finite",
                p.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_noise.rs"]
mod tests;
