use crate::action::{Action, PlayerId, Signal};
use crate::betting::BetStep;
use crate::state::{RoundReport, RoundView};

/// Interface for One Poker agents.
pub trait Bot {
    /// Picks the card to play and the opening signal. `opponent_raised` is set when
    /// the opponent has already raised before this agent speaks.
    fn decide(&mut self, view: &RoundView, opponent_raised: bool) -> Action;

    /// Signals again during an escalation; the card is already committed.
    fn escalate(&mut self, view: &RoundView, step: &BetStep) -> Signal;

    /// Called with the revealed round once it is settled.
    fn observe(&mut self, _seat: PlayerId, _report: &RoundReport) {}
}
