use std::fmt::Write;

use crate::action::{ACTION_SLOTS, ActionSlot, PlayerId, opponent};
use crate::card::{Card, Suit, rank_name};
use crate::hand::HandShape;
use crate::score::Scoreboard;
use crate::state::RoundReport;

/// Rank pairs shown by [`render_table`] when no explicit rows are requested.
pub const SAMPLE_ROWS: [(u8, u8); 3] = [(11, 10), (11, 4), (4, 2)];

pub fn describe_shape(shape: HandShape) -> &'static str {
    match shape {
        HandShape::TwoUp => "two up cards",
        HandShape::OneUpOneDown => "one up card and one down card",
        HandShape::TwoDown => "two down cards",
    }
}

/// One-line verdict of a round from `seat`'s side.
pub fn describe_outcome(seat: PlayerId, report: &RoundReport) -> String {
    let delta = report.life_delta(seat);
    match report.winner() {
        Some(winner) if winner == seat => format!("You win {} {}.", delta, lives_word(delta)),
        Some(_) => format!("You lose {} {}.", -delta, lives_word(-delta)),
        None => String::from("The round ends in a draw."),
    }
}

fn lives_word(count: i32) -> &'static str {
    if count == 1 { "life" } else { "lives" }
}

pub fn render_round(report: &RoundReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Round {}", report.round + 1);
    for seat in 0..report.played.len() {
        let hand = report.hands[seat]
            .cards()
            .iter()
            .map(|card| format_card(*card))
            .collect::<Vec<_>>()
            .join(" ");
        let decision = match report.settlement.folded {
            Some(folded) if folded == seat => String::from("fold"),
            _ => format!("{:?}", report.settlement.decisions[seat]).to_ascii_lowercase(),
        };
        let _ = writeln!(
            out,
            "  Player {seat}: [{hand}] ({}) plays {}, {decision}, stake {}",
            describe_shape(report.shapes[seat]),
            format_card(report.played[seat]),
            report.settlement.stake(seat),
        );
    }
    let verdict = match report.winner() {
        Some(winner) => format!(
            "Player {winner} takes {} from Player {}",
            report.settlement.stake(opponent(winner)),
            opponent(winner)
        ),
        None => String::from("Draw"),
    };
    let _ = writeln!(out, "  {verdict}; lives {:?}", report.lives);
    out
}

/// Scores of the selected (high, low) rows for every opponent shape.
pub fn render_table(scoreboard: &Scoreboard, rows: &[(u8, u8)]) -> String {
    let mut out = String::new();
    let header = (0..ACTION_SLOTS)
        .filter_map(ActionSlot::from_index)
        .map(|slot| {
            format!(
                "{:>12}",
                format!("{:?}/{:?}", slot.choice(), slot.signal()).to_ascii_lowercase()
            )
        })
        .collect::<String>();
    for shape in HandShape::ALL {
        let table = scoreboard.table_for(shape);
        let _ = writeln!(out, "Opponent holds {}:", describe_shape(shape));
        let _ = writeln!(out, "{:<16}{header}", "");
        for &(high, low) in rows {
            let Some(cell) = table.cell(high, low) else {
                continue;
            };
            let label = format!("({}, {})", rank_name(high), rank_name(low));
            let values = cell
                .iter()
                .map(|value| format!("{value:>12}"))
                .collect::<String>();
            let _ = writeln!(out, "{label:<16}{values}");
        }
    }
    out
}

pub fn format_card(card: Card) -> String {
    let rank = match card.rank() {
        1 => String::from("A"),
        11 => String::from("J"),
        12 => String::from("Q"),
        13 => String::from("K"),
        other => other.to_string(),
    };
    let suit = match card.suit() {
        Suit::Clubs => 'C',
        Suit::Diamonds => 'D',
        Suit::Spades => 'S',
        Suit::Hearts => 'H',
    };
    format!("{rank}{suit}")
}
