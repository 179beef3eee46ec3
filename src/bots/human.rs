use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::ops::RangeInclusive;

use crate::action::{Action, CardChoice, PlayerId, Signal, opponent};
use crate::betting::BetStep;
use crate::bot::Bot;
use crate::state::{RoundReport, RoundView};
use crate::visualize::{describe_outcome, describe_shape};

/// Interactive bot that queries a human on a console.
pub struct HumanBot<R, W> {
    input: R,
    output: W,
}

impl HumanBot<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanBot<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Blocks until the player presses enter.
    pub fn pause(&mut self) {
        self.say("Press the enter key to continue.");
        let _ = self.read_line();
    }

    fn say(&mut self, line: &str) {
        if writeln!(self.output, "{line}").is_err() {
            eprintln!("failed to write to output");
        }
    }

    fn read_line(&mut self) -> String {
        if self.output.flush().is_err() {
            eprintln!("failed to flush output");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                println!("Input closed. Exiting game.");
                std::process::exit(0);
            }
            Ok(_) => line,
            Err(_) => {
                eprintln!("failed to read input");
                String::new()
            }
        }
    }

    /// Re-prompts until the reply is a non-negative integer inside `allowed`.
    fn ask(&mut self, prompt: &str, allowed: RangeInclusive<u32>, hint: &str) -> u32 {
        loop {
            self.say(prompt);
            let line = self.read_line();
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                self.say("Exiting game at user's request.");
                std::process::exit(0);
            }
            let Some(value) = parse_non_negative(trimmed) else {
                self.say("You have provided an invalid input.");
                continue;
            };
            if allowed.contains(&value) {
                return value;
            }
            self.say(hint);
        }
    }
}

/// Digits only: no sign, no decimal point, no whitespace inside.
pub fn parse_non_negative(input: &str) -> Option<u32> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

impl<R: BufRead, W: Write> Bot for HumanBot<R, W> {
    fn decide(&mut self, view: &RoundView, _opponent_raised: bool) -> Action {
        let header = format!(
            "Your life count: {}, Computer life count: {}",
            view.life(),
            view.opponent_life()
        );
        self.say(&header);
        let shapes = format!(
            "Computer has {}, and you have {}.",
            describe_shape(view.opponent_shape),
            describe_shape(view.own_shape)
        );
        self.say(&shapes);

        let cards = match (view.hand.high(), view.hand.low()) {
            (Some(high), Some(low)) => format!("Your cards: {high} and {low}"),
            _ => String::from("Your cards: (incomplete hand)"),
        };
        self.say(&cards);
        let card = self.ask(
            "Pick a card by typing 1 for the first card and 2 for the second card.",
            1..=2,
            "Please choose between card 1 or card 2.",
        );
        let choice = if card == 1 { CardChoice::High } else { CardChoice::Low };

        let bet = self.ask(
            "Would you like to raise your bet? Type 1 and press enter to check or 2 to raise the bet.",
            1..=2,
            "Please choose between check (type 1) or raise (type 2).",
        );
        let signal = if bet == 2 { Signal::Raise } else { Signal::Check };
        Action::new(choice, signal)
    }

    fn escalate(&mut self, _view: &RoundView, step: &BetStep) -> Signal {
        self.say("Computer decided to raise. Would you like to raise the bet even higher, check, or fold?");
        let reply = self.ask(
            &format!(
                "The pot stands at {} lives. Type 0 and press enter to fold, 1 to check, or 2 to raise the bet.",
                step.stakes.iter().max().copied().unwrap_or(1)
            ),
            0..=2,
            "Please choose between fold (type 0), check (type 1), or raise (type 2).",
        );
        match reply {
            0 => Signal::Fold,
            2 => {
                self.say("You challenged the computer by upping the ante!");
                Signal::Raise
            }
            _ => {
                self.say("You accepted the raise.");
                Signal::Check
            }
        }
    }

    fn observe(&mut self, seat: PlayerId, report: &RoundReport) {
        match report.settlement.folded {
            Some(folded) if folded == seat => self.say("You decided to fold."),
            Some(_) => self.say("Computer folded."),
            None => {}
        }
        let other = opponent(seat);
        let picked = format!("Computer picked {}.", report.played[other]);
        self.say(&picked);
        let summary = describe_outcome(seat, report);
        self.say(&summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_plain_digits_are_accepted() {
        assert_eq!(parse_non_negative("2"), Some(2));
        assert_eq!(parse_non_negative("007"), Some(7));
        assert_eq!(parse_non_negative("-1"), None);
        assert_eq!(parse_non_negative("+1"), None);
        assert_eq!(parse_non_negative("1.5"), None);
        assert_eq!(parse_non_negative(""), None);
        assert_eq!(parse_non_negative("two"), None);
    }
}
