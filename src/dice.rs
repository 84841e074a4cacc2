//! Over/under seven: bet on the total of two dice.
//!
//! 2..=6 pays `under`, 8..=12 pays `over`, a 7 always goes to the house.
//! A winning bet returns twice the wager.

use std::{fmt, str::FromStr};
use rand::Rng;
use crate::error::{Error, Result};

pub const HOUSE_TOTAL: u8 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bet { Over, Under }

impl FromStr for Bet {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "over" => Ok(Bet::Over),
            "under" => Ok(Bet::Under),
            _ => Err(Error::InvalidBet(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Bet::Over => "OVER", Bet::Under => "UNDER" })
    }
}

/// Positive whole-number wager.
pub fn parse_wager(s: &str) -> Result<u64> {
    match s.trim().parse::<u64>() {
        Ok(w) if w > 0 => Ok(w),
        _ => Err(Error::InvalidWager(s.trim().to_string())),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roll { pub first: u8, pub second: u8 }

impl Roll {
    pub fn new(first: u8, second: u8) -> Self { Self { first, second } }
    pub fn total(&self) -> u8 { self.first + self.second }
}

/// Two independent fair dice.
pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Roll {
    Roll { first: rng.gen_range(1..=6), second: rng.gen_range(1..=6) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome { HouseWins, Win, Lose }

/// `net` is wide enough for twice any `u64` wager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement { pub outcome: Outcome, pub net: i128 }

pub fn settle(bet: Bet, roll: Roll, wager: u64) -> Settlement {
    let total = roll.total();
    let wager = wager as i128;
    let outcome = match (total, bet) {
        (HOUSE_TOTAL, _) => Outcome::HouseWins,
        (t, Bet::Under) if t < HOUSE_TOTAL => Outcome::Win,
        (t, Bet::Over) if t > HOUSE_TOTAL => Outcome::Win,
        _ => Outcome::Lose,
    };
    let net = if outcome == Outcome::Win { wager * 2 } else { -wager };
    Settlement { outcome, net }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn bet_parsing_is_forgiving_about_case_and_space() {
        assert_eq!("over".parse::<Bet>().unwrap(), Bet::Over);
        assert_eq!("  UNDER \n".parse::<Bet>().unwrap(), Bet::Under);
        assert!(matches!("sideways".parse::<Bet>(), Err(Error::InvalidBet(s)) if s == "sideways"));
        assert!("".parse::<Bet>().is_err());
    }

    #[test]
    fn wager_must_be_positive_integer() {
        assert_eq!(parse_wager("25").unwrap(), 25);
        assert_eq!(parse_wager(" 7\n").unwrap(), 7);
        for bad in ["0", "-5", "abc", "2.5", ""] {
            assert!(matches!(parse_wager(bad), Err(Error::InvalidWager(_))), "{bad:?} accepted");
        }
    }

    #[test]
    fn seven_always_goes_to_the_house() {
        for bet in [Bet::Over, Bet::Under] {
            let s = settle(bet, Roll::new(3, 4), 10);
            assert_eq!(s, Settlement { outcome: Outcome::HouseWins, net: -10 });
        }
    }

    #[test]
    fn winning_pays_double() {
        assert_eq!(settle(Bet::Under, Roll::new(1, 1), 10), Settlement { outcome: Outcome::Win, net: 20 });
        assert_eq!(settle(Bet::Under, Roll::new(3, 3), 10).outcome, Outcome::Win);
        assert_eq!(settle(Bet::Over, Roll::new(4, 4), 10).outcome, Outcome::Win);
        assert_eq!(settle(Bet::Over, Roll::new(6, 6), 3), Settlement { outcome: Outcome::Win, net: 6 });
    }

    #[test]
    fn largest_wager_settles_exactly() {
        let max = parse_wager(&u64::MAX.to_string()).unwrap();
        let win = settle(Bet::Over, Roll::new(6, 6), max);
        assert_eq!(win, Settlement { outcome: Outcome::Win, net: 2 * u64::MAX as i128 });
        let lose = settle(Bet::Over, Roll::new(1, 1), max);
        assert_eq!(lose, Settlement { outcome: Outcome::Lose, net: -(u64::MAX as i128) });
        let half = parse_wager(&i64::MAX.to_string()).unwrap();
        assert_eq!(settle(Bet::Under, Roll::new(1, 2), half).net, 2 * i64::MAX as i128);
        assert_eq!(settle(Bet::Under, Roll::new(4, 3), half).net, -(i64::MAX as i128));
    }

    #[test]
    fn wrong_side_loses_wager() {
        assert_eq!(settle(Bet::Over, Roll::new(2, 3), 10), Settlement { outcome: Outcome::Lose, net: -10 });
        assert_eq!(settle(Bet::Under, Roll::new(5, 6), 10), Settlement { outcome: Outcome::Lose, net: -10 });
    }

    #[test]
    fn rolls_stay_in_range_and_are_reproducible() {
        let mut a = StdRng::seed_from_u64(1337);
        let mut b = StdRng::seed_from_u64(1337);
        let mut seen = [false; 13];
        for _ in 0..2000 {
            let r = roll(&mut a);
            assert_eq!(r, roll(&mut b));
            assert!((1..=6).contains(&r.first) && (1..=6).contains(&r.second));
            seen[r.total() as usize] = true;
        }
        assert!(seen[2..=12].iter().all(|&s| s), "some totals never rolled");
    }
}
