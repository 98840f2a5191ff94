use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;

    fn index_below(&mut self, bound: usize) -> usize {
        let idx = (self.next_uniform() * bound as f64) as usize;
        idx.min(bound.saturating_sub(1))
    }
}

#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl UniformSource for SeededSource {
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

pub fn shuffle<T>(items: &mut [T], source: &mut dyn UniformSource) {
    for i in (1..items.len()).rev() {
        let j = source.index_below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, pos: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    pub fn draws(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/rng.rs"]
mod tests;
