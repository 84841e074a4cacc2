use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::params::LcgParams;

/// Outcome of the Hull–Dobell check for one parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodVerdict {
    pub full_period: bool,
    /// `Some(m)` when every seed cycles through all `m` residues.
    pub theoretical_period: Option<u64>,
}

/// Distinct prime factors of `n` by trial division (2, then odd candidates).
/// `0` and `1` have none.
pub fn prime_factors(mut n: u64) -> BTreeSet<u64> {
    let mut fac = BTreeSet::new();
    if n < 2 { return fac; }
    let mut d = 2u64;
    while d <= n / d {
        if n % d == 0 {
            fac.insert(d);
            while n % d == 0 { n /= d; }
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if n > 1 { fac.insert(n); }
    fac
}

#[inline]
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 { let t = a % b; a = b; b = t; }
    a
}

/// Hull–Dobell: the LCG has period `m` for every seed iff
/// 1. `gcd(c, m) == 1`,
/// 2. `a - 1` is divisible by every prime factor of `m`,
/// 3. `a - 1` is divisible by 4 when `m` is.
pub fn hull_dobell(a: u64, c: u64, m: u64) -> Result<bool> {
    if m <= 1 { return Err(Error::DegenerateModulus(m)); }
    if gcd(c, m) != 1 { return Ok(false); }
    // a = 0 makes a - 1 negative; keep it exact.
    let a1 = a as i128 - 1;
    if prime_factors(m).iter().any(|&p| a1.rem_euclid(p as i128) != 0) { return Ok(false); }
    if m % 4 == 0 && a1.rem_euclid(4) != 0 { return Ok(false); }
    Ok(true)
}

pub fn analyze(params: &LcgParams) -> Result<PeriodVerdict> {
    let full_period = hull_dobell(params.a, params.c, params.m)?;
    tracing::debug!(a = params.a, c = params.c, m = params.m, full_period, "hull-dobell");
    Ok(PeriodVerdict { full_period, theoretical_period: full_period.then_some(params.m) })
}

/// Cycle length reached from `seed` (Brent's algorithm), or `None` if it is
/// not found within `limit` steps. Tails before the cycle are not counted.
pub fn observed_period(params: &LcgParams, seed: i64, limit: u64) -> Result<Option<u64>> {
    params.validate()?;
    let x0 = params.normalize_seed(seed);
    let mut power = 1u64;
    let mut lam = 1u64;
    let mut tortoise = x0;
    let mut hare = params.step(x0);
    let mut steps = 1u64;
    while tortoise != hare {
        if steps >= limit { return Ok(None); }
        if power == lam { tortoise = hare; power *= 2; lam = 0; }
        hare = params.step(hare);
        lam += 1;
        steps += 1;
    }
    Ok(Some(lam))
}
