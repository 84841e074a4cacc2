use crate::error::{Error, Result};
use crate::params::LcgParams;

/// Linear congruential generator with a 32-bit state.
///
/// The seed only positions the state; the first value yielded is already one
/// step past `seed mod m`.
#[derive(Clone, Debug)]
pub struct Lcg { params: LcgParams, state: u32 }

impl Lcg {
    pub fn new(params: LcgParams, seed: i64) -> Result<Self> {
        params.validate()?;
        let state = params.normalize_seed(seed) as u32;
        Ok(Self { params, state })
    }

    pub fn params(&self) -> LcgParams { self.params }
    pub fn state(&self) -> u32 { self.state }

    #[inline]
    pub fn next_value(&mut self) -> u32 {
        self.state = self.params.step(self.state as u64) as u32;
        self.state
    }

    /// Collect the next `n` values.
    pub fn take_values(&mut self, n: usize) -> Vec<u32> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n { out.push(self.next_value()); }
        out
    }
}

impl Iterator for Lcg {
    type Item = u32;
    #[inline]
    fn next(&mut self) -> Option<u32> { Some(self.next_value()) }
}

/// Generate exactly `count` values from `seed`.
///
/// `count` is signed so callers holding raw user input get a domain error for
/// negative values instead of a silent wrap; nothing is generated in that case.
pub fn generate(params: LcgParams, seed: i64, count: i64) -> Result<Vec<u32>> {
    if count < 0 { return Err(Error::NegativeCount(count)); }
    let mut lcg = Lcg::new(params, seed)?;
    let seq = lcg.take_values(count as usize);
    tracing::debug!(seed, count, a = params.a, c = params.c, m = params.m, "generated sequence");
    Ok(seq)
}
