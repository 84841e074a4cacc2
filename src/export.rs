use std::{fs, io::{BufWriter, Write}, path::{Path, PathBuf}};
use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::lcg::Lcg;
use crate::params::LcgParams;
use crate::period::{analyze, PeriodVerdict};

pub const MANIFEST_VERSION: u32 = 1;
/// Largest count a manifest may carry; checked before regenerating.
pub const MAX_MANIFEST_COUNT: usize = u32::MAX as usize;

/// Output file names derived from a prefix and the sequence length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPaths { pub csv: PathBuf, pub pdf: PathBuf, pub manifest: PathBuf }

impl ExportPaths {
    pub fn new(prefix: &str, count: usize) -> Self {
        Self {
            csv: PathBuf::from(format!("{prefix}_{count}.csv")),
            pdf: PathBuf::from(format!("{prefix}_{count}.pdf")),
            manifest: PathBuf::from(format!("{prefix}_{count}.json")),
        }
    }

    /// Batch-mode names: `{prefix}_{seed}_{count}.*`.
    pub fn for_seed(prefix: &str, seed: i64, count: usize) -> Self {
        Self::new(&format!("{prefix}_{seed}"), count)
    }
}

/// `n,x_n` header then one row per value, 1-based.
pub fn write_csv<W: Write>(w: &mut W, values: &[u32]) -> Result<()> {
    writeln!(w, "n,x_n")?;
    for (i, v) in values.iter().enumerate() { writeln!(w, "{},{}", i + 1, v)?; }
    Ok(())
}

pub fn save_csv(path: &Path, values: &[u32]) -> Result<()> {
    let mut w = BufWriter::new(fs::File::create(path)?);
    write_csv(&mut w, values)?;
    w.flush()?;
    tracing::info!(path = %path.display(), rows = values.len(), "wrote csv");
    Ok(())
}

/// FNV-1a 64 over the little-endian bytes of every value.
pub fn fingerprint(values: &[u32]) -> u64 {
    fingerprint_iter(values.iter().copied())
}

pub fn fingerprint_iter<I: IntoIterator<Item = u32>>(values: I) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for v in values {
        for b in v.to_le_bytes() {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
    }
    h
}

/// Everything needed to reproduce and check an exported run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    pub params: LcgParams,
    pub seed: i64,
    pub count: usize,
    pub verdict: PeriodVerdict,
    pub fingerprint: u64,
    pub crate_version: String,
}

impl Manifest {
    pub fn new(params: LcgParams, seed: i64, values: &[u32]) -> Result<Self> {
        Ok(Self {
            version: MANIFEST_VERSION,
            params,
            seed,
            count: values.len(),
            verdict: analyze(&params)?,
            fingerprint: fingerprint(values),
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_vec_pretty(self)?)?;
        tracing::info!(path = %path.display(), "wrote manifest");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let man: Manifest = serde_json::from_slice(&fs::read(path)?)?;
        if man.version != MANIFEST_VERSION { return Err(Error::ManifestVersion(man.version)); }
        if man.count > MAX_MANIFEST_COUNT { return Err(Error::ManifestCount(man.count)); }
        Ok(man)
    }

    /// Recompute the verdict and stream the sequence through the fingerprint;
    /// nothing is buffered.
    pub fn verify(&self) -> Result<()> {
        if self.count > MAX_MANIFEST_COUNT { return Err(Error::ManifestCount(self.count)); }
        let actual = analyze(&self.params)?;
        if actual != self.verdict {
            return Err(Error::VerdictMismatch { stored: self.verdict, actual });
        }
        let actual = fingerprint_iter(Lcg::new(self.params, self.seed)?.take(self.count));
        if actual != self.fingerprint {
            return Err(Error::FingerprintMismatch { expected: self.fingerprint, actual });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcg::generate;

    #[test]
    fn csv_has_header_and_one_based_rows() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[7, 0, 4_294_967_295]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "n,x_n\n1,7\n2,0\n3,4294967295\n");
    }

    #[test]
    fn csv_of_empty_sequence_is_header_only() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();
        assert_eq!(buf, b"n,x_n\n");
    }

    #[test]
    fn paths_use_prefix_and_count() {
        let p = ExportPaths::new("LCG_Unix", 1000);
        assert_eq!(p.csv, PathBuf::from("LCG_Unix_1000.csv"));
        assert_eq!(p.pdf, PathBuf::from("LCG_Unix_1000.pdf"));
        assert_eq!(p.manifest, PathBuf::from("LCG_Unix_1000.json"));
    }

    #[test]
    fn batch_paths_carry_the_seed() {
        let p = ExportPaths::for_seed("LCG_Unix", -7, 50);
        assert_eq!(p.csv, PathBuf::from("LCG_Unix_-7_50.csv"));
        assert_eq!(p.pdf, PathBuf::from("LCG_Unix_-7_50.pdf"));
        assert_eq!(p.manifest, PathBuf::from("LCG_Unix_-7_50.json"));
        assert_ne!(ExportPaths::for_seed("x", 1, 5), ExportPaths::for_seed("x", 2, 5));
    }

    #[test]
    fn streamed_fingerprint_matches_slice() {
        let values = generate(LcgParams::UNIX, 9, 300).unwrap();
        let streamed = fingerprint_iter(Lcg::new(LcgParams::UNIX, 9).unwrap().take(300));
        assert_eq!(streamed, fingerprint(&values));
    }

    #[test]
    fn oversized_count_is_an_error() {
        let values = generate(LcgParams::UNIX, 1, 10).unwrap();
        let mut man = Manifest::new(LcgParams::UNIX, 1, &values).unwrap();
        man.count = usize::MAX;
        assert!(matches!(man.verify(), Err(Error::ManifestCount(usize::MAX))));

        let dir = std::env::temp_dir().join(format!("lcg_unix_big_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("big.json");
        man.save(&path).unwrap();
        assert!(matches!(Manifest::load(&path), Err(Error::ManifestCount(_))));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn flipped_verdict_fails_verification() {
        let values = generate(LcgParams::UNIX, 111, 20).unwrap();
        let mut man = Manifest::new(LcgParams::UNIX, 111, &values).unwrap();
        man.verdict = PeriodVerdict { full_period: false, theoretical_period: None };
        assert!(matches!(man.verify(), Err(Error::VerdictMismatch { .. })));
    }

    #[test]
    fn fingerprint_is_order_sensitive() {
        assert_eq!(fingerprint(&[]), 0xcbf29ce484222325);
        assert_ne!(fingerprint(&[1, 2]), fingerprint(&[2, 1]));
        assert_eq!(fingerprint(&[1, 2]), fingerprint(&[1, 2]));
    }

    #[test]
    fn manifest_round_trips_and_verifies() {
        let dir = std::env::temp_dir().join(format!("lcg_unix_manifest_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("run.json");

        let values = generate(LcgParams::UNIX, 111, 250).unwrap();
        let man = Manifest::new(LcgParams::UNIX, 111, &values).unwrap();
        assert!(man.verdict.full_period);
        man.save(&path).unwrap();

        let loaded = Manifest::load(&path).unwrap();
        assert_eq!(loaded, man);
        loaded.verify().unwrap();

        let mut tampered = loaded.clone();
        tampered.seed = 112;
        assert!(matches!(tampered.verify(), Err(Error::FingerprintMismatch { .. })));

        let mut wrong_version = loaded;
        wrong_version.version = 99;
        wrong_version.save(&path).unwrap();
        assert!(matches!(Manifest::load(&path), Err(Error::ManifestVersion(99))));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn save_csv_writes_file() {
        let dir = std::env::temp_dir().join(format!("lcg_unix_csv_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.csv");
        save_csv(&path, &[3, 2, 1]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "n,x_n\n1,3\n2,2\n3,1\n");
        fs::remove_dir_all(&dir).ok();
    }
}
