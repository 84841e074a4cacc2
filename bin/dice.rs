use std::{io::{self, BufRead, Write}, thread, time::Duration};

use anyhow::{bail, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lcg_unix::dice::{parse_wager, roll, settle, Bet, Outcome};

#[derive(Parser, Debug)]
#[command(name="dice", about="Over or under seven: bet on two dice")]
struct Args {
    /// Fixed seed for reproducible rolls
    #[arg(long)] seed: Option<u64>,
    #[arg(long, default_value_t=false)] no_delay: bool,
}

/// Prompt until `parse` accepts a line; EOF ends the game.
fn ask<T, I: BufRead>(input: &mut I, prompt: &str, parse: impl Fn(&str) -> lcg_unix::Result<T>) -> Result<T> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 { bail!("input closed"); }
        match parse(&line) {
            Ok(v) => return Ok(v),
            Err(e) => println!("Invalid input: {e}"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    tracing::debug!(seed = ?args.seed, "dice rng ready");

    println!("Over or Under: the dice game");
    println!("Rules:");
    println!(" - Total 2 to 6  -> UNDER");
    println!(" - Total 7       -> the house wins");
    println!(" - Total 8 to 12 -> OVER\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let bet = ask(&mut input, "Your bet (over/under): ", |s| s.parse::<Bet>())?;
    let wager = ask(&mut input, "Your wager (whole number): ", parse_wager)?;

    println!("\nRolling the dice...\n");
    if !args.no_delay { thread::sleep(Duration::from_secs(1)); }

    let r = roll(&mut rng);
    println!("The dice show {} and {} -> total {}", r.first, r.second, r.total());

    let s = settle(bet, r, wager);
    match s.outcome {
        Outcome::HouseWins => println!("\nSeven! The house wins, you lose your wager."),
        Outcome::Win => println!("\nYou bet {bet} and WON!"),
        Outcome::Lose => println!("\nBad luck, you lost your wager."),
    }
    let verb = if s.net > 0 { "won" } else { "lost" };
    println!("\nFinal result: you {verb} {} coins", s.net.unsigned_abs());
    Ok(())
}
