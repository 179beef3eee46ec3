use thiserror::Error;

/// Errors that can occur while running a One Poker table.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("the draw pile is empty")]
    EmptyDeck,
    #[error("scenario index {0} is out of range")]
    InvalidScenarioIndex(usize),
    #[error("hand already holds two cards")]
    HandFull,
    #[error("hand does not hold two cards")]
    IncompleteHand,
    #[error("game is already over")]
    GameOver,
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Problems with the command line settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("'{0}' is not a non-negative integer")]
    NotANumber(String),
    #[error("received {0} argument(s); custom settings require 3")]
    TooFewArguments(usize),
    #[error("received {0} arguments; at most 3 are accepted")]
    TooManyArguments(usize),
    #[error("setting {0} is not known; use 1 or 2")]
    UnknownSetting(u64),
    #[error("life count {0} must lie between {} and {}", crate::config::MIN_LIFE, crate::config::MAX_LIFE)]
    LifeOutOfRange(u64),
}
