use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub mean: f64,
    pub std_dev: f64,
    pub noise_factor: f64,
    pub alpha: f64,
}

impl Statistics {
    pub fn noise_scale(&self) -> f64 {
        self.noise_factor * self.std_dev
    }
}
