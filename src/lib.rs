//! One Poker engine: a two-card, two-player betting game with a self-play learner.

pub mod action;
pub mod betting;
pub mod bot;
pub mod bots;
pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod rules;
pub mod score;
pub mod state;
pub mod training;
pub mod visualize;

pub use crate::action::{Action, ActionSlot, CardChoice, PlayerId, SEATS, Signal};
pub use crate::betting::{BetStep, Settlement};
pub use crate::bot::Bot;
pub use crate::bots::{HumanBot, LearnerBot, LearnerMode, RandomBot};
pub use crate::card::{Card, Suit};
pub use crate::config::{MatchConfig, Setting, usage};
pub use crate::deck::Deck;
pub use crate::error::{GameError, InvalidArgument};
pub use crate::game::{BettingMode, Game, GameBuilder, GameConfig};
pub use crate::hand::{Hand, HandShape};
pub use crate::rules::{Outcome, beats, compare};
pub use crate::score::{ScoreTable, Scoreboard};
pub use crate::state::{RoundReport, RoundView};
pub use crate::training::{Trainer, TrainingConfig, TrainingSummary};
pub use crate::visualize::{describe_outcome, describe_shape, render_round, render_table};
