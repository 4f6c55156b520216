//! Combination scoring for a sorted five-dice roll.
//!
//! Checks run from rarest to most common and stop at the first match, so a
//! full house is never reported as three of a kind, and four of a kind is
//! never reported as two pairs.

use std::fmt;

use crate::roll::Dice;

/// The poker-dice combinations, rarest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Combination {
    FiveOfAKind,
    FourOfAKind,
    FullHouse,
    ThreeOfAKind,
    TwoPairs,
    OnePair,
    Nothing,
}

impl Combination {
    /// User-facing result message.
    pub fn message(&self) -> &'static str {
        match self {
            Combination::FiveOfAKind => "Five of a kind!",
            Combination::FourOfAKind => "Four of a kind!",
            Combination::FullHouse => "Full house!",
            Combination::ThreeOfAKind => "Three of a kind!",
            Combination::TwoPairs => "Two pairs!",
            Combination::OnePair => "One pair!",
            Combination::Nothing => "No special combination.",
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Classify a validated roll into its highest-precedence combination.
///
/// `dice` must be sorted ascending — the two-pair scan relies on equal
/// faces being adjacent. [`crate::roll::validate_and_sort`] produces
/// exactly such input. Always returns a label; never fails.
pub fn classify(dice: Dice) -> Combination {
    let mut counts = [0u8; 6];
    for &d in &dice {
        counts[(d - 1) as usize] += 1;
    }

    if counts.iter().any(|&c| c == 5) {
        return Combination::FiveOfAKind;
    }
    if counts.iter().any(|&c| c >= 4) {
        return Combination::FourOfAKind;
    }
    // Full house: a sorted hand splits 2+3 or 3+2 across two faces.
    if dice[0] == dice[1] && dice[3] == dice[4] && (dice[2] == dice[0] || dice[2] == dice[4]) {
        return Combination::FullHouse;
    }
    if counts.iter().any(|&c| c >= 3) {
        return Combination::ThreeOfAKind;
    }
    if count_disjoint_pairs(&dice) == 2 {
        return Combination::TwoPairs;
    }
    if counts.iter().any(|&c| c == 2) {
        return Combination::OnePair;
    }
    Combination::Nothing
}

/// Count disjoint adjacent equal pairs, scanning left to right. A die
/// consumed by one pair cannot start the next, so `[3,3,3,4,4]` counts 2
/// and `[3,3,3,3,4]` also counts 2.
fn count_disjoint_pairs(dice: &Dice) -> u8 {
    let mut pairs = 0;
    let mut i = 0;
    while i + 1 < dice.len() {
        if dice[i] == dice[i + 1] {
            pairs += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    pairs
}
