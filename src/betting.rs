//! Betting protocol for a single round.
//!
//! Both seats commit one life before anything else. During self-play the round
//! then runs as a game of chicken: as long as someone raises, nobody folds and
//! both stakes stay below the owners' lives, both stakes go up by one and both
//! seats signal again. Against a human the exchange is a single handshake
//! instead (see [`handshake`]).

use serde::{Deserialize, Serialize};

use crate::action::{PlayerId, SEATS, Signal, opponent};
use crate::card::Card;
use crate::rules::{Outcome, compare};

/// One signalling step of the escalation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BetStep {
    pub index: usize,
    pub stakes: [u32; SEATS],
    /// Signals given in the step before this one.
    pub previous: Option<[Signal; SEATS]>,
}

impl BetStep {
    pub fn opening() -> Self {
        Self {
            index: 0,
            stakes: [1; SEATS],
            previous: None,
        }
    }

    /// Whether the opponent of `seat` raised in the previous step.
    pub fn opponent_raised(&self, seat: PlayerId) -> bool {
        self.previous
            .is_some_and(|signals| signals[opponent(seat)] == Signal::Raise)
    }
}

/// Terminal state of the betting protocol.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub stakes: [u32; SEATS],
    /// Decision class recorded for each seat when scoring the round.
    pub decisions: [Signal; SEATS],
    pub folded: Option<PlayerId>,
    pub steps: usize,
}

impl Settlement {
    pub fn stake(&self, seat: PlayerId) -> u32 {
        self.stakes[seat]
    }

    /// A fold hands the round to the other seat whatever the cards say.
    pub fn outcome(&self, played: [Card; SEATS]) -> Outcome {
        match self.folded {
            Some(seat) => Outcome::win_for(opponent(seat)),
            None => compare(played[0].rank(), played[1].rank()),
        }
    }

    /// Life change per seat: the loser pays its own stake to the winner.
    pub fn life_deltas(&self, outcome: Outcome) -> [i32; SEATS] {
        let mut deltas = [0; SEATS];
        if let Some(winner) = outcome.winner() {
            let loser = opponent(winner);
            let paid = self.stakes[loser] as i32;
            deltas[loser] = -paid;
            deltas[winner] = paid;
        }
        deltas
    }
}

fn can_raise(stakes: [u32; SEATS], lives: [i32; SEATS]) -> bool {
    stakes
        .iter()
        .zip(lives.iter())
        .all(|(&stake, &life)| i64::from(stake) < i64::from(life))
}

fn escalates(signals: &[Signal; SEATS]) -> bool {
    signals.contains(&Signal::Raise) && !signals.contains(&Signal::Fold)
}

/// Runs the self-play escalation to completion.
///
/// `next` is asked for both seats' signals at every step, starting with the
/// opening step. The loop is bounded only by the lives in play.
pub fn settle<F>(lives: [i32; SEATS], mut next: F) -> Settlement
where
    F: FnMut(&BetStep) -> [Signal; SEATS],
{
    let mut step = BetStep::opening();
    let mut signals = next(&step);

    // Folding is only possible once the opponent has put a raise on the table.
    if signals[0] == Signal::Fold && signals[1] == Signal::Check {
        signals[0] = Signal::Check;
    }
    if signals[1] == Signal::Fold && signals[0] == Signal::Check {
        signals[1] = Signal::Check;
    }

    while escalates(&signals) && can_raise(step.stakes, lives) {
        step = BetStep {
            index: step.index + 1,
            stakes: step.stakes.map(|stake| stake + 1),
            previous: Some(signals),
        };
        signals = next(&step);
    }

    // Both seats folding is scored as agreeing not to go further: a plain check
    // at the opening stake, otherwise a called raise.
    if signals == [Signal::Fold; SEATS] {
        for (signal, stake) in signals.iter_mut().zip(step.stakes) {
            *signal = if stake == 1 { Signal::Check } else { Signal::Raise };
        }
    }

    let folded = signals.iter().position(|&signal| signal == Signal::Fold);
    Settlement {
        stakes: step.stakes,
        decisions: signals,
        folded,
        steps: step.index + 1,
    }
}

/// Single raise-or-accept exchange used when a human sits in seat 0.
///
/// The human opens with check or raise. `respond` receives whether the human
/// raised and returns the engine's signal: fold (only after a raise), check to
/// call, or raise. After an engine raise, `answer` gets one chance to fold, accept
/// or raise once more, which the engine matches. Any raise that would lift the
/// pot above either seat's lives counts as a check.
pub fn handshake<R, A>(lives: [i32; SEATS], opening: Signal, respond: R, answer: A) -> Settlement
where
    R: FnOnce(bool) -> Signal,
    A: FnOnce(&BetStep) -> Signal,
{
    let affordable = |pot: u32| can_raise([pot; SEATS], lives);
    let mut pot = 1u32;
    let opener_raised = opening == Signal::Raise && affordable(pot);
    if opener_raised {
        pot += 1;
    }
    let mut decisions = [
        if opener_raised { Signal::Raise } else { Signal::Check },
        Signal::Check,
    ];

    match respond(opener_raised) {
        Signal::Fold if opener_raised => Settlement {
            stakes: [pot, 1],
            decisions: [Signal::Raise, Signal::Fold],
            folded: Some(1),
            steps: 1,
        },
        Signal::Raise if affordable(pot) => {
            let committed = pot;
            pot += 1;
            decisions[1] = Signal::Raise;
            let step = BetStep {
                index: 1,
                stakes: [committed, pot],
                previous: Some(decisions),
            };
            match answer(&step) {
                Signal::Fold => {
                    return Settlement {
                        stakes: [committed, pot],
                        decisions: [Signal::Fold, Signal::Raise],
                        folded: Some(0),
                        steps: 2,
                    };
                }
                Signal::Raise if affordable(pot) => {
                    pot += 1;
                    decisions[0] = Signal::Raise;
                }
                _ => {}
            }
            Settlement {
                stakes: [pot; SEATS],
                decisions,
                folded: None,
                steps: 2,
            }
        }
        _ => Settlement {
            stakes: [pot; SEATS],
            decisions,
            folded: None,
            steps: 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn scripted(script: Vec<[Signal; SEATS]>) -> impl FnMut(&BetStep) -> [Signal; SEATS] {
        let mut steps = script.into_iter();
        move |_| steps.next().unwrap_or([Signal::Check; SEATS])
    }

    #[test]
    fn lone_fold_at_opening_is_coerced_to_check() {
        let settlement = settle([5, 5], scripted(vec![[Signal::Fold, Signal::Check]]));
        assert_eq!(settlement.decisions, [Signal::Check, Signal::Check]);
        assert_eq!(settlement.folded, None);
        assert_eq!(settlement.stakes, [1, 1]);
    }

    #[test]
    fn fold_against_raise_stands() {
        let settlement = settle([5, 5], scripted(vec![[Signal::Raise, Signal::Fold]]));
        assert_eq!(settlement.folded, Some(1));
        assert_eq!(settlement.stakes, [1, 1]);
        let played = [Card::new(Suit::Clubs, 3), Card::new(Suit::Hearts, 12)];
        assert_eq!(settlement.outcome(played), Outcome::P1Wins);
        assert_eq!(settlement.life_deltas(Outcome::P1Wins), [1, -1]);
    }

    #[test]
    fn double_fold_at_opening_becomes_check() {
        let settlement = settle([5, 5], scripted(vec![[Signal::Fold, Signal::Fold]]));
        assert_eq!(settlement.decisions, [Signal::Check, Signal::Check]);
        assert_eq!(settlement.folded, None);
    }

    #[test]
    fn double_fold_after_raise_becomes_raise() {
        let settlement = settle(
            [5, 5],
            scripted(vec![[Signal::Raise, Signal::Check], [Signal::Fold, Signal::Fold]]),
        );
        assert_eq!(settlement.stakes, [2, 2]);
        assert_eq!(settlement.decisions, [Signal::Raise, Signal::Raise]);
        assert_eq!(settlement.folded, None);
        assert_eq!(settlement.steps, 2);
    }

    #[test]
    fn escalation_stops_at_the_smaller_life() {
        let settlement = settle([3, 10], |_| [Signal::Raise, Signal::Raise]);
        assert_eq!(settlement.stakes, [3, 3]);
        assert_eq!(settlement.steps, 3);
        assert_eq!(settlement.folded, None);
    }

    #[test]
    fn opponent_raise_is_reported_to_the_next_step() {
        let mut seen = Vec::new();
        settle([5, 5], |step| {
            seen.push((step.opponent_raised(0), step.opponent_raised(1)));
            if step.index == 0 {
                [Signal::Check, Signal::Raise]
            } else {
                [Signal::Check, Signal::Check]
            }
        });
        assert_eq!(seen, vec![(false, false), (true, false)]);
    }

    #[test]
    fn engine_fold_after_human_raise_costs_one() {
        let settlement = handshake([6, 6], Signal::Raise, |_| Signal::Fold, |_| Signal::Check);
        assert_eq!(settlement.folded, Some(1));
        assert_eq!(settlement.stakes, [2, 1]);
        assert_eq!(settlement.life_deltas(Outcome::P1Wins), [1, -1]);
    }

    #[test]
    fn engine_cannot_fold_without_a_raise() {
        let settlement = handshake([6, 6], Signal::Check, |raised| {
            assert!(!raised);
            Signal::Fold
        }, |_| unreachable!("no engine raise"));
        assert_eq!(settlement.folded, None);
        assert_eq!(settlement.stakes, [1, 1]);
    }

    #[test]
    fn human_reraise_is_matched() {
        let settlement = handshake([6, 6], Signal::Raise, |_| Signal::Raise, |step| {
            assert_eq!(step.stakes, [2, 3]);
            Signal::Raise
        });
        assert_eq!(settlement.stakes, [4, 4]);
        assert_eq!(settlement.decisions, [Signal::Raise, Signal::Raise]);
    }

    #[test]
    fn human_fold_forfeits_the_committed_stake() {
        let settlement = handshake([6, 6], Signal::Raise, |_| Signal::Raise, |_| Signal::Fold);
        assert_eq!(settlement.folded, Some(0));
        assert_eq!(settlement.life_deltas(Outcome::P2Wins), [-2, 2]);
    }

    #[test]
    fn handshake_respects_lives() {
        let settlement = handshake([2, 10], Signal::Raise, |_| Signal::Raise, |_| Signal::Raise);
        assert_eq!(settlement.stakes, [2, 2]);
        assert!(settlement.stakes.iter().all(|&stake| stake <= 2));
    }
}
