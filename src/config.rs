use serde::{Deserialize, Serialize};

use crate::error::InvalidArgument;

pub const DEFAULT_PLAYER_LIFE: i32 = 6;
pub const DEFAULT_OPPONENT_LIFE: i32 = 6;
pub const KAIJI_PLAYER_LIFE: i32 = 2;
pub const KAIJI_OPPONENT_LIFE: i32 = 10;
pub const MIN_LIFE: u64 = 1;
pub const MAX_LIFE: u64 = 999;

/// Which starting lives were selected on the command line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Setting {
    /// No arguments: 6 lives each.
    Default,
    /// Setting 1: the player starts with 2 lives against the computer's 10.
    Kaiji,
    /// Setting 2: both life counts given explicitly.
    Custom,
}

/// Starting lives for the human match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub setting: Setting,
    pub player_life: i32,
    pub opponent_life: i32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            setting: Setting::Default,
            player_life: DEFAULT_PLAYER_LIFE,
            opponent_life: DEFAULT_OPPONENT_LIFE,
        }
    }
}

impl MatchConfig {
    /// Interprets `<setting> <playerLife> <opponentLife>`.
    ///
    /// Every argument must be a plain non-negative integer. Setting 1 may be given
    /// alone; setting 2 needs both life counts.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, InvalidArgument> {
        let numbers = args
            .iter()
            .map(|arg| parse_number(arg.as_ref()))
            .collect::<Result<Vec<u64>, _>>()?;
        match numbers.as_slice() {
            [] => Ok(Self::default()),
            [1] | [1, _, _] => Ok(Self {
                setting: Setting::Kaiji,
                player_life: KAIJI_PLAYER_LIFE,
                opponent_life: KAIJI_OPPONENT_LIFE,
            }),
            [2, player, opponent] => Ok(Self {
                setting: Setting::Custom,
                player_life: checked_life(*player)?,
                opponent_life: checked_life(*opponent)?,
            }),
            [setting, _, _] => Err(InvalidArgument::UnknownSetting(*setting)),
            short if short.len() < 3 => Err(InvalidArgument::TooFewArguments(short.len())),
            long => Err(InvalidArgument::TooManyArguments(long.len())),
        }
    }
}

fn parse_number(arg: &str) -> Result<u64, InvalidArgument> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidArgument::NotANumber(arg.to_string()));
    }
    arg.parse()
        .map_err(|_| InvalidArgument::NotANumber(arg.to_string()))
}

fn checked_life(life: u64) -> Result<i32, InvalidArgument> {
    if !(MIN_LIFE..=MAX_LIFE).contains(&life) {
        return Err(InvalidArgument::LifeOutOfRange(life));
    }
    Ok(life as i32)
}

pub fn usage() -> String {
    [
        "Usage: onepoker [<setting> <player's life count> <opponent's life count>]",
        "  setting = 1 for 'Kaiji setting': player starts with 2 lives and computer starts with 10 lives",
        "  setting = 2 for custom settings: choose the life count for each player",
        "  If no arguments are used, the game proceeds with default settings of 6:6 life count.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_selects_defaults() {
        let config = MatchConfig::from_args::<&str>(&[]).unwrap();
        assert_eq!(config, MatchConfig::default());
        assert_eq!((config.player_life, config.opponent_life), (6, 6));
    }

    #[test]
    fn kaiji_setting_ignores_life_arguments() {
        for args in [vec!["1"], vec!["1", "50", "50"]] {
            let config = MatchConfig::from_args(&args).unwrap();
            assert_eq!(config.setting, Setting::Kaiji);
            assert_eq!((config.player_life, config.opponent_life), (2, 10));
        }
    }

    #[test]
    fn custom_setting_reads_both_lives() {
        let config = MatchConfig::from_args(&["2", "4", "12"]).unwrap();
        assert_eq!(config.setting, Setting::Custom);
        assert_eq!((config.player_life, config.opponent_life), (4, 12));
    }

    #[test]
    fn rejects_malformed_arguments() {
        assert_eq!(
            MatchConfig::from_args(&["2", "x", "3"]),
            Err(InvalidArgument::NotANumber("x".into()))
        );
        assert_eq!(
            MatchConfig::from_args(&["-1"]),
            Err(InvalidArgument::NotANumber("-1".into()))
        );
        assert_eq!(MatchConfig::from_args(&["2"]), Err(InvalidArgument::TooFewArguments(1)));
        assert_eq!(MatchConfig::from_args(&["2", "3"]), Err(InvalidArgument::TooFewArguments(2)));
        assert_eq!(
            MatchConfig::from_args(&["2", "3", "4", "5"]),
            Err(InvalidArgument::TooManyArguments(4))
        );
        assert_eq!(MatchConfig::from_args(&["3", "3", "4"]), Err(InvalidArgument::UnknownSetting(3)));
        assert_eq!(MatchConfig::from_args(&["2", "0", "4"]), Err(InvalidArgument::LifeOutOfRange(0)));
        assert_eq!(
            MatchConfig::from_args(&["2", "5", "1000"]),
            Err(InvalidArgument::LifeOutOfRange(1000))
        );
    }
}
