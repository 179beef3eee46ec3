//! Card comparison for a played pair.
//!
//! Higher rank wins, except that the Ace beats everything but the 2, and the 2
//! is the only card that beats the Ace. The relation is not transitive:
//! 2 beats Ace, Ace beats King, King beats 2.

use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::ACE;

/// Result of a round from the first seat's point of view.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    P1Wins,
    P2Wins,
    Draw,
}

impl Outcome {
    pub fn inverse(self) -> Self {
        match self {
            Outcome::P1Wins => Outcome::P2Wins,
            Outcome::P2Wins => Outcome::P1Wins,
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::P1Wins => Some(0),
            Outcome::P2Wins => Some(1),
            Outcome::Draw => None,
        }
    }

    pub fn win_for(seat: PlayerId) -> Self {
        if seat == 0 { Outcome::P1Wins } else { Outcome::P2Wins }
    }
}

/// Whether a played rank `a` beats a played rank `b`.
pub fn beats(a: u8, b: u8) -> bool {
    let higher = a != ACE && b != ACE && a > b;
    let ace_over_rest = a == ACE && b != ACE && b != 2;
    let two_over_ace = a == 2 && b == ACE;
    higher || ace_over_rest || two_over_ace
}

/// Compares a challenger rank `a` against a defender rank `b`.
pub fn compare(a: u8, b: u8) -> Outcome {
    if beats(a, b) {
        Outcome::P1Wins
    } else if beats(b, a) {
        Outcome::P2Wins
    } else {
        Outcome::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::KING;

    #[test]
    fn at_most_one_side_beats_the_other() {
        for a in 1..=13u8 {
            for b in 1..=13u8 {
                assert!(!(beats(a, b) && beats(b, a)), "{a} and {b} beat each other");
                if a == b {
                    assert_eq!(compare(a, b), Outcome::Draw);
                } else {
                    assert_ne!(compare(a, b), Outcome::Draw, "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn two_ace_king_cycle() {
        assert_eq!(compare(2, ACE), Outcome::P1Wins);
        assert_eq!(compare(ACE, KING), Outcome::P1Wins);
        assert_eq!(compare(KING, 2), Outcome::P1Wins);
        assert_eq!(compare(2, KING), Outcome::P2Wins);
    }
}
