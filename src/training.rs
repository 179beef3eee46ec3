//! Self-play training.
//!
//! Two exploring learners play each other for a fixed number of hands. Whenever
//! one of them is eliminated the match restarts at full lives. At the end the
//! second learner's tables are pooled into the first one.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::action::SEATS;
use crate::bots::LearnerBot;
use crate::error::GameError;
use crate::game::{BettingMode, GameBuilder};
use crate::score::Scoreboard;

pub const TRAINING_HANDS: usize = 100_000;
pub const TRAINING_LIFE: i32 = 10;
const PROGRESS_EVERY: usize = 10_000;

/// Parameters of a self-play run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub hands: usize,
    pub life: i32,
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            hands: TRAINING_HANDS,
            life: TRAINING_LIFE,
            seed: 0x7EA1_5EED,
        }
    }
}

impl TrainingConfig {
    pub fn with_hands(mut self, hands: usize) -> Self {
        self.hands = hands;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Counters gathered during a self-play run.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub hands: usize,
    pub matches: usize,
    pub match_wins: [usize; SEATS],
    pub draws: usize,
}

pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Runs the self-play loop and returns the pooled scoreboard.
    pub fn run(&self) -> Result<(Scoreboard, TrainingSummary), GameError> {
        let TrainingConfig { hands, life, seed } = self.config;
        let lives = [life; SEATS];
        let mut game = GameBuilder::new()
            .with_lives(life, life)
            .with_seed(seed)
            .with_mode(BettingMode::Escalation)
            .build()?;
        let mut first = LearnerBot::explorer(seed ^ 0x9E37_79B9);
        let mut second = LearnerBot::explorer(seed ^ (2 * 0x9E37_79B9));

        log::info!("beginning self-play training ({hands} hands, {life} lives each)");
        let started = Instant::now();
        let mut summary = TrainingSummary::default();
        for hand in 1..=hands {
            let report = game.play_round([&mut first, &mut second])?;
            summary.hands += 1;
            if report.winner().is_none() {
                summary.draws += 1;
            }
            if game.is_finished() {
                if let Some(winner) = game.winner() {
                    summary.match_wins[winner] += 1;
                }
                summary.matches += 1;
                game.reset(lives)?;
            }
            if hand % PROGRESS_EVERY == 0 {
                log::info!(
                    "{:<24}{:>8} / {:<8} matches {:<8} ({:.1?})",
                    "training hands",
                    hand,
                    hands,
                    summary.matches,
                    started.elapsed()
                );
            }
        }

        first.absorb(&mut second);
        debug_assert!(second.scoreboard().is_empty());
        log::info!(
            "pooled both learners after {} hands and {} matches",
            summary.hands,
            summary.matches
        );
        Ok((first.into_scoreboard(), summary))
    }
}
