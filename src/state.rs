use serde::{Deserialize, Serialize};

use crate::action::{CardChoice, PlayerId, SEATS, opponent};
use crate::betting::Settlement;
use crate::card::Card;
use crate::hand::{Hand, HandShape};
use crate::rules::{Outcome, compare};

/// Everything a seat may look at before committing to a card.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundView {
    pub round: usize,
    pub seat: PlayerId,
    pub hand: Hand,
    pub own_shape: HandShape,
    pub opponent_shape: HandShape,
    pub lives: [i32; SEATS],
}

impl RoundView {
    pub fn life(&self) -> i32 {
        self.lives[self.seat]
    }

    pub fn opponent_life(&self) -> i32 {
        self.lives[opponent(self.seat)]
    }
}

/// Full record of a finished round, revealed to both seats.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: usize,
    /// Hands as they were when the round started.
    pub hands: [Hand; SEATS],
    pub shapes: [HandShape; SEATS],
    pub choices: [CardChoice; SEATS],
    pub played: [Card; SEATS],
    pub settlement: Settlement,
    pub outcome: Outcome,
    /// Lives after the transfer.
    pub lives: [i32; SEATS],
}

impl RoundReport {
    pub fn life_delta(&self, seat: PlayerId) -> i32 {
        self.settlement.life_deltas(self.outcome)[seat]
    }

    /// Card-only verdict from `seat`'s side, ignoring any fold.
    pub fn showdown(&self, seat: PlayerId) -> Outcome {
        compare(self.played[seat].rank(), self.played[opponent(seat)].rank())
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.outcome.winner()
    }
}
