use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::{Action, CardChoice, Signal};
use crate::betting::BetStep;
use crate::bot::Bot;
use crate::state::RoundView;

/// Baseline bot that picks cards and signals uniformly at random.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn decide(&mut self, _view: &RoundView, opponent_raised: bool) -> Action {
        let choice = if self.rng.gen_bool(0.5) { CardChoice::High } else { CardChoice::Low };
        let signals: &[Signal] = if opponent_raised {
            &Signal::ALL
        } else {
            &[Signal::Check, Signal::Raise]
        };
        let signal = signals.choose(&mut self.rng).copied().unwrap_or(Signal::Check);
        Action::new(choice, signal)
    }

    fn escalate(&mut self, _view: &RoundView, _step: &BetStep) -> Signal {
        Signal::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Signal::Check)
    }
}
