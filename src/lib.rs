//! lcg_unix — Unix-parameter LCG with Hull–Dobell analysis and report export.
//!
//! Modules:
//! - `params`: immutable LCG constants (`LcgParams::UNIX`).
//! - `lcg`: the generator and `generate`.
//! - `period`: prime factors, Hull–Dobell verdict, measured cycle length.
//! - `batch`: independent sequences for many seeds across threads.
//! - `export`: CSV rows and the JSON run manifest.
//! - `pdf`: minimal text-only PDF writer.
//! - `report`: cover/number page layout and console summary.
//! - `dice`: over/under-seven betting game rules.

pub mod error;
pub mod params;
pub mod lcg;
pub mod period;
pub mod batch;
pub mod export;
pub mod pdf;
pub mod report;
pub mod dice;

pub use error::{Error, Result};
pub use params::LcgParams;
pub use lcg::{Lcg, generate};
pub use period::{PeriodVerdict, analyze, hull_dobell, prime_factors};
pub use batch::{generate_batch, parse_seeds};
pub use export::{ExportPaths, Manifest};
