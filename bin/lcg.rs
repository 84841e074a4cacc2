use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lcg_unix::{analyze, generate, generate_batch, parse_seeds, ExportPaths, LcgParams, Manifest};
use lcg_unix::export::save_csv;
use lcg_unix::report::{save_pdf, summary_lines};

#[derive(Parser, Debug)]
#[command(name="lcg", about="Unix-parameter LCG with PDF/CSV export")]
struct Args {
    /// Seed x0
    #[arg(long, default_value_t=111, allow_negative_numbers=true)] seed: i64,
    /// Comma-separated seeds; overrides --seed and writes one file set per seed
    #[arg(long, allow_hyphen_values=true)] seeds: Option<String>,
    /// How many values to generate
    #[arg(long, default_value_t=1000, allow_negative_numbers=true)] count: i64,
    /// Output prefix for PDF/CSV/JSON
    #[arg(long, default_value="LCG_Unix")] out: String,
    #[arg(long, default_value_t=1)] threads: usize,
    #[arg(long, default_value_t=false)] no_pdf: bool,
    #[arg(long, default_value_t=false)] no_csv: bool,
    /// Regenerate the run described by a manifest and check its verdict and fingerprint
    #[arg(long)] check: Option<PathBuf>,
}

fn export(params: &LcgParams, seed: i64, values: &[u32], paths: ExportPaths, args: &Args) -> Result<Vec<PathBuf>> {
    let manifest = Manifest::new(*params, seed, values)?;
    let mut written = Vec::new();
    if !args.no_pdf {
        save_pdf(&paths.pdf, params, seed, &manifest.verdict, values)
            .with_context(|| format!("writing {}", paths.pdf.display()))?;
        written.push(paths.pdf.clone());
    }
    if !args.no_csv {
        save_csv(&paths.csv, values).with_context(|| format!("writing {}", paths.csv.display()))?;
        written.push(paths.csv.clone());
    }
    manifest.save(&paths.manifest).with_context(|| format!("writing {}", paths.manifest.display()))?;
    written.push(paths.manifest);
    Ok(written)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let params = LcgParams::UNIX;

    if let Some(path) = &args.check {
        let man = Manifest::load(path).with_context(|| format!("reading {}", path.display()))?;
        man.verify()?;
        println!("OK: seed {} count {} fingerprint {:#018x}", man.seed, man.count, man.fingerprint);
        return Ok(());
    }

    let verdict = analyze(&params)?;

    let runs: Vec<(i64, Vec<u32>, ExportPaths)> = match &args.seeds {
        Some(list) => {
            let seeds = parse_seeds(list)?;
            let seqs = generate_batch(params, &seeds, args.count, args.threads)?;
            seeds.into_iter().zip(seqs).map(|(s, v)| {
                let paths = ExportPaths::for_seed(&args.out, s, v.len());
                (s, v, paths)
            }).collect()
        }
        None => {
            let values = generate(params, args.seed, args.count)?;
            let paths = ExportPaths::new(&args.out, values.len());
            vec![(args.seed, values, paths)]
        }
    };

    let mut written = Vec::new();
    for (seed, values, paths) in runs {
        for line in summary_lines(&params, seed, &verdict, &values) { println!("{line}"); }
        println!();
        written.extend(export(&params, seed, &values, paths, &args)?);
    }

    println!("Files written:");
    for p in &written { println!(" - {}", p.display()); }
    Ok(())
}
