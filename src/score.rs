//! Score tables for self-play learning.
//!
//! One table per opponent hand shape. Each table has a cell per
//! (high rank, low rank) of the own hand, and each cell six accumulators, one per
//! (card choice, decision) slot.
//!
//! Reinforcement rule, applied per seat after every decided round (stake `b`):
//!   winner: check slot += b if it checked;
//!           raise slot += b, or -= b if the opponent's card beats its own
//!   loser:  check or raise slot -= b for the decision it took;
//!           fold slot += b, or -= b if its own card beats the opponent's
//! Drawn rounds leave the tables untouched.

use crate::action::{ACTION_SLOTS, ActionSlot, CardChoice, PlayerId, Signal, opponent};
use crate::card::{MAX_RANK, MIN_RANK, RANK_COUNT};
use crate::error::GameError;
use crate::hand::HandShape;
use crate::rules::Outcome;
use crate::state::RoundReport;

pub const SCENARIOS: usize = 3;

type Cell = [i64; ACTION_SLOTS];

/// Flat 13×13 grid of six-slot accumulators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreTable {
    cells: Box<[Cell; RANK_COUNT * RANK_COUNT]>,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTable {
    pub fn new() -> Self {
        Self {
            cells: Box::new([[0; ACTION_SLOTS]; RANK_COUNT * RANK_COUNT]),
        }
    }

    #[inline]
    fn offset(high: u8, low: u8) -> Option<usize> {
        let ranks = MIN_RANK..=MAX_RANK;
        if !ranks.contains(&high) || !ranks.contains(&low) {
            return None;
        }
        Some(usize::from(high - MIN_RANK) * RANK_COUNT + usize::from(low - MIN_RANK))
    }

    /// `None` when either rank lies outside 1..=13.
    pub fn cell(&self, high: u8, low: u8) -> Option<&Cell> {
        Self::offset(high, low).map(|offset| &self.cells[offset])
    }

    /// Unknown ranks read as zero.
    pub fn value(&self, high: u8, low: u8, slot: ActionSlot) -> i64 {
        self.cell(high, low).map_or(0, |cell| cell[slot.index()])
    }

    /// Unknown ranks are logged and ignored.
    pub fn add(&mut self, high: u8, low: u8, slot: ActionSlot, delta: i64) {
        match Self::offset(high, low) {
            Some(offset) => self.cells[offset][slot.index()] += delta,
            None => log::error!("ranks ({high}, {low}) lie outside the score table"),
        }
    }

    /// Best slot for the hand. Fold slots only compete once the opponent raised.
    /// Ties go to the lowest slot index.
    pub fn max_index(&self, high: u8, low: u8, opponent_raised: bool) -> ActionSlot {
        let Some(cell) = self.cell(high, low) else {
            return NEUTRAL_SLOT;
        };
        let first = if opponent_raised { 0 } else { 2 };
        let mut best = first;
        for index in first + 1..ACTION_SLOTS {
            if cell[index] > cell[best] {
                best = index;
            }
        }
        ActionSlot::from_index(best).unwrap_or(NEUTRAL_SLOT)
    }

    /// Best decision once the card is already committed.
    pub fn best_decision(
        &self,
        high: u8,
        low: u8,
        choice: CardChoice,
        opponent_raised: bool,
    ) -> Signal {
        let Some(cell) = self.cell(high, low) else {
            return NEUTRAL_SLOT.signal();
        };
        Signal::ALL
            .into_iter()
            .filter(|&signal| opponent_raised || signal != Signal::Fold)
            .fold(None::<(Signal, i64)>, |best, signal| {
                let value = cell[ActionSlot::new(choice, signal).index()];
                match best {
                    Some((_, best_value)) if best_value >= value => best,
                    _ => Some((signal, value)),
                }
            })
            .map(|(signal, _)| signal)
            .unwrap_or(Signal::Check)
    }

    /// Adds `other` into this table slot by slot and clears `other`.
    pub fn merge(&mut self, other: &mut ScoreTable) {
        for (cell, source) in self.cells.iter_mut().zip(other.cells.iter()) {
            for (slot, value) in cell.iter_mut().zip(source.iter()) {
                *slot += value;
            }
        }
        other.reset();
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = [0; ACTION_SLOTS]);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.iter().all(|&value| value == 0))
    }
}

/// Slot returned for queries that cannot be answered: play the high card, check.
pub const NEUTRAL_SLOT: ActionSlot = ActionSlot::NEUTRAL;

/// The three tables owned by a learning agent, indexed by opponent shape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    tables: [ScoreTable; SCENARIOS],
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self, scenario: usize) -> Result<&ScoreTable, GameError> {
        self.tables
            .get(scenario)
            .ok_or(GameError::InvalidScenarioIndex(scenario))
    }

    pub fn table_for(&self, shape: HandShape) -> &ScoreTable {
        &self.tables[shape.index()]
    }

    /// Adds `delta` to one slot. An unknown scenario is logged and ignored so a
    /// long training run is never aborted by it.
    pub fn update(&mut self, scenario: usize, high: u8, low: u8, slot: ActionSlot, delta: i64) {
        match self.tables.get_mut(scenario) {
            Some(table) => table.add(high, low, slot, delta),
            None => log::error!("{}", GameError::InvalidScenarioIndex(scenario)),
        }
    }

    /// Arg-max lookup for the given scenario; unknown scenarios are logged and
    /// answered with [`NEUTRAL_SLOT`].
    pub fn max_index(&self, scenario: usize, high: u8, low: u8, opponent_raised: bool) -> ActionSlot {
        match self.table(scenario) {
            Ok(table) => table.max_index(high, low, opponent_raised),
            Err(err) => {
                log::error!("{err}");
                NEUTRAL_SLOT
            }
        }
    }

    pub fn best_decision(
        &self,
        scenario: usize,
        high: u8,
        low: u8,
        choice: CardChoice,
        opponent_raised: bool,
    ) -> Signal {
        match self.table(scenario) {
            Ok(table) => table.best_decision(high, low, choice, opponent_raised),
            Err(err) => {
                log::error!("{err}");
                NEUTRAL_SLOT.signal()
            }
        }
    }

    /// Applies the reinforcement rule for `seat` from a finished round.
    pub fn reinforce(&mut self, seat: PlayerId, report: &RoundReport) {
        let Some((high, low)) = report.hands[seat].ranks() else {
            log::error!("{}", GameError::IncompleteHand);
            return;
        };
        let scenario = report.shapes[opponent(seat)].index();
        for (slot, delta) in reinforcement(seat, report) {
            self.update(scenario, high, low, slot, delta);
        }
    }

    /// Pools `other` into this scoreboard and clears `other`.
    pub fn merge(&mut self, other: &mut Scoreboard) {
        for (table, source) in self.tables.iter_mut().zip(other.tables.iter_mut()) {
            table.merge(source);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(ScoreTable::is_empty)
    }
}

/// Slot updates earned by `seat` in a finished round.
pub fn reinforcement(seat: PlayerId, report: &RoundReport) -> Vec<(ActionSlot, i64)> {
    let choice = report.choices[seat];
    let decision = report.settlement.decisions[seat];
    let stake = i64::from(report.settlement.stake(seat));
    let showdown = report.showdown(seat);
    let mut updates = Vec::with_capacity(2);
    match report.outcome.winner() {
        Some(winner) if winner == seat => {
            if decision == Signal::Check {
                updates.push((ActionSlot::new(choice, Signal::Check), stake));
            }
            let raise = if showdown == Outcome::P2Wins { -stake } else { stake };
            updates.push((ActionSlot::new(choice, Signal::Raise), raise));
        }
        Some(_) => {
            if decision != Signal::Fold {
                updates.push((ActionSlot::new(choice, decision), -stake));
            }
            let fold = if showdown == Outcome::P1Wins { -stake } else { stake };
            updates.push((ActionSlot::new(choice, Signal::Fold), fold));
        }
        None => {}
    }
    updates
}
