// src/batch.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crate::error::{Error, Result};
use crate::lcg::generate;
use crate::params::LcgParams;

/// Generate one sequence per seed, `count` values each, on up to `threads`
/// workers. Output order follows `seeds`; with `threads <= 1` runs serially.
///
/// Every generator owns its state, so workers share nothing but the seed
/// slice and the result slots.
pub fn generate_batch(params: LcgParams, seeds: &[i64], count: i64, threads: usize) -> Result<Vec<Vec<u32>>> {
    if count < 0 { return Err(Error::NegativeCount(count)); }
    params.validate()?;

    let n = seeds.len();
    if n == 0 || threads <= 1 {
        return seeds.iter().map(|&s| generate(params, s, count)).collect();
    }

    let slots = Mutex::new({
        let mut v: Vec<Option<Vec<u32>>> = Vec::with_capacity(n);
        v.resize_with(n, || None);
        v
    });
    let next = AtomicUsize::new(0);

    thread::scope(|scope| {
        for _ in 0..threads.min(n) {
            scope.spawn(|| loop {
                let i = next.fetch_add(1, Ordering::Relaxed);
                if i >= n { break; }
                // params and count were validated above
                let seq = generate(params, seeds[i], count).unwrap_or_default();
                let mut guard = slots.lock().unwrap_or_else(|e| e.into_inner());
                guard[i] = Some(seq);
            });
        }
    });

    tracing::debug!(seeds = n, count, threads, "batch generated");
    let slots = slots.into_inner().unwrap_or_else(|e| e.into_inner());
    Ok(slots.into_iter().map(Option::unwrap_or_default).collect())
}

/// Comma-separated seed list; blanks are skipped and repeats keep their
/// first position so every seed maps to one file set.
pub fn parse_seeds(s: &str) -> Result<Vec<i64>> {
    let mut seeds: Vec<i64> = Vec::new();
    for t in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let seed = t.parse::<i64>().map_err(|_| Error::InvalidSeed(t.to_string()))?;
        if !seeds.contains(&seed) { seeds.push(seed); }
    }
    Ok(seeds)
}
