use crate::pipeline::EngineError;

pub const DEFAULT_NOISE_FACTOR: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairingProfile {
    pub noise_factor: f64,
    pub alpha: f64,
}

impl PairingProfile {
    pub fn new(alpha: f64) -> Self {
        Self {
            noise_factor: DEFAULT_NOISE_FACTOR,
            alpha,
        }
    }

    pub fn noise_free(alpha: f64) -> Self {
        Self {
            noise_factor: 0.0,
            alpha,
        }
    }

    pub fn with_noise_factor(mut self, noise_factor: f64) -> Self {
        self.noise_factor = noise_factor;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.noise_factor.is_finite() || self.noise_factor < 0.0 {
            return Err(EngineError::InvalidProfile(format!(
                "noise factor must be a finite non-negative number, got {}",
                self.noise_factor
            )));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(EngineError::InvalidProfile(format!(
                "alpha must be a finite non-negative number, got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}
