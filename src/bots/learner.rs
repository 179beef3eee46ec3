use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::action::{Action, CardChoice, PlayerId, Signal};
use crate::betting::BetStep;
use crate::bot::Bot;
use crate::score::{NEUTRAL_SLOT, Scoreboard};
use crate::state::{RoundReport, RoundView};

/// How a [`LearnerBot`] uses its scoreboard.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LearnerMode {
    /// Uniformly random play; every settled round is scored into the tables.
    Explore,
    /// Arg-max play from the tables; nothing is learned.
    Exploit,
}

/// Self-play agent that learns one score table per opponent hand shape.
pub struct LearnerBot {
    scoreboard: Scoreboard,
    mode: LearnerMode,
    rng: StdRng,
    committed: Option<CardChoice>,
}

impl LearnerBot {
    pub fn explorer(seed: u64) -> Self {
        Self {
            scoreboard: Scoreboard::new(),
            mode: LearnerMode::Explore,
            rng: StdRng::seed_from_u64(seed),
            committed: None,
        }
    }

    pub fn exploiter(scoreboard: Scoreboard) -> Self {
        Self {
            scoreboard,
            mode: LearnerMode::Exploit,
            rng: StdRng::seed_from_u64(0),
            committed: None,
        }
    }

    pub fn mode(&self) -> LearnerMode {
        self.mode
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn into_scoreboard(self) -> Scoreboard {
        self.scoreboard
    }

    /// Pools another agent's tables into this one, leaving the other empty.
    pub fn absorb(&mut self, other: &mut LearnerBot) {
        self.scoreboard.merge(&mut other.scoreboard);
    }

    fn random_signal(&mut self) -> Signal {
        Signal::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Signal::Check)
    }
}

impl Bot for LearnerBot {
    fn decide(&mut self, view: &RoundView, opponent_raised: bool) -> Action {
        let action = match self.mode {
            LearnerMode::Explore => {
                let choice = if self.rng.gen_bool(0.5) { CardChoice::High } else { CardChoice::Low };
                Action::new(choice, self.random_signal())
            }
            LearnerMode::Exploit => match view.hand.ranks() {
                Some((high, low)) => self
                    .scoreboard
                    .max_index(view.opponent_shape.index(), high, low, opponent_raised)
                    .action(),
                None => NEUTRAL_SLOT.action(),
            },
        };
        self.committed = Some(action.choice);
        action
    }

    fn escalate(&mut self, view: &RoundView, step: &BetStep) -> Signal {
        match self.mode {
            LearnerMode::Explore => self.random_signal(),
            LearnerMode::Exploit => {
                let Some((high, low)) = view.hand.ranks() else {
                    return Signal::Check;
                };
                let choice = self.committed.unwrap_or(CardChoice::High);
                self.scoreboard.best_decision(
                    view.opponent_shape.index(),
                    high,
                    low,
                    choice,
                    step.opponent_raised(view.seat),
                )
            }
        }
    }

    fn observe(&mut self, seat: PlayerId, report: &RoundReport) {
        self.committed = None;
        if self.mode == LearnerMode::Explore {
            self.scoreboard.reinforce(seat, report);
        }
    }
}
