use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};

/// Largest modulus whose residues fit the 32-bit generator state.
pub const MAX_MODULUS: u64 = 1 << 32;

/// Immutable LCG constants: `x_{n+1} = (a * x_n + c) mod m`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcgParams { pub a: u64, pub c: u64, pub m: u64 }

impl LcgParams {
    /// Classic Unix `rand()` constants.
    pub const UNIX: LcgParams = LcgParams { a: 1_103_515_245, c: 12_345, m: MAX_MODULUS };

    pub const fn new(a: u64, c: u64, m: u64) -> Self { Self { a, c, m } }

    /// Checks that the modulus is usable by the 32-bit generator.
    pub fn validate(&self) -> Result<()> {
        if self.m <= 1 { return Err(Error::DegenerateModulus(self.m)); }
        if self.m > MAX_MODULUS { return Err(Error::ModulusTooWide(self.m)); }
        Ok(())
    }

    /// Euclidean remainder of `seed` by `m`; negative seeds land in `[0, m)`.
    #[inline]
    pub fn normalize_seed(&self, seed: i64) -> u64 {
        (seed as i128).rem_euclid(self.m as i128) as u64
    }

    /// One step of the recurrence in 128-bit arithmetic.
    #[inline]
    pub fn step(&self, x: u64) -> u64 {
        ((self.a as u128 * x as u128 + self.c as u128) % self.m as u128) as u64
    }
}

impl Default for LcgParams {
    fn default() -> Self { Self::UNIX }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_degenerate_and_wide_moduli() {
        assert!(matches!(LcgParams::new(5, 3, 0).validate(), Err(Error::DegenerateModulus(0))));
        assert!(matches!(LcgParams::new(5, 3, 1).validate(), Err(Error::DegenerateModulus(1))));
        assert!(matches!(LcgParams::new(5, 3, MAX_MODULUS + 1).validate(), Err(Error::ModulusTooWide(_))));
        assert!(LcgParams::new(5, 3, 2).validate().is_ok());
        assert!(LcgParams::UNIX.validate().is_ok());
    }

    #[test]
    fn negative_seeds_normalize_to_non_negative() {
        let p = LcgParams::new(5, 3, 16);
        assert_eq!(p.normalize_seed(-1), 15);
        assert_eq!(p.normalize_seed(-16), 0);
        assert_eq!(p.normalize_seed(-17), 15);
        assert_eq!(p.normalize_seed(33), 1);
        assert_eq!(LcgParams::UNIX.normalize_seed(i64::MIN), 0);
        assert_eq!(LcgParams::UNIX.normalize_seed(-1), MAX_MODULUS - 1);
    }

    #[test]
    fn step_does_not_overflow_with_wide_constants() {
        let p = LcgParams::new(u64::MAX, u64::MAX, MAX_MODULUS);
        let x = MAX_MODULUS - 1;
        let expected = ((u64::MAX as u128 * x as u128 + u64::MAX as u128) % MAX_MODULUS as u128) as u64;
        assert_eq!(p.step(x), expected);
        assert!(p.step(x) < MAX_MODULUS);
    }

    #[test]
    fn params_serialize_as_plain_fields() {
        let json = serde_json::to_string(&LcgParams::UNIX).unwrap();
        assert_eq!(json, r#"{"a":1103515245,"c":12345,"m":4294967296}"#);
    }
}
