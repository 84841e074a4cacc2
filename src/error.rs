use thiserror::Error;
use crate::period::PeriodVerdict;

#[derive(Error, Debug)]
pub enum Error {
    #[error("count must be non-negative, got {0}")]
    NegativeCount(i64),

    #[error("modulus must be greater than 1, got {0}")]
    DegenerateModulus(u64),

    #[error("modulus {0} does not fit a 32-bit generator state")]
    ModulusTooWide(u64),

    #[error("unsupported manifest version {0}")]
    ManifestVersion(u32),

    #[error("manifest count {0} exceeds the supported maximum")]
    ManifestCount(usize),

    #[error("manifest verdict {stored:?} disagrees with recomputed {actual:?}")]
    VerdictMismatch { stored: PeriodVerdict, actual: PeriodVerdict },

    #[error("invalid seed {0:?}")]
    InvalidSeed(String),

    #[error("fingerprint mismatch: manifest {expected:#018x}, regenerated {actual:#018x}")]
    FingerprintMismatch { expected: u64, actual: u64 },

    #[error("invalid bet {0:?}: expected 'over' or 'under'")]
    InvalidBet(String),

    #[error("invalid wager {0:?}: expected a whole number greater than 0")]
    InvalidWager(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
