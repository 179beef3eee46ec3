use std::fmt;

use serde::{Deserialize, Serialize};

pub const ACE: u8 = 1;
pub const JACK: u8 = 11;
pub const QUEEN: u8 = 12;
pub const KING: u8 = 13;
pub const MIN_RANK: u8 = ACE;
pub const MAX_RANK: u8 = KING;
pub const RANK_COUNT: usize = 13;
pub const DECK_SIZE: usize = 52;

/// Card suit. Purely cosmetic: no rule ever looks at it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs = 1,
    Diamonds = 2,
    Spades = 3,
    Hearts = 4,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
        }
    }
}

/// A standard playing card; rank 1 is the Ace, 11 to 13 are the face cards.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!((MIN_RANK..=MAX_RANK).contains(&rank));
        Self { suit, rank }
    }

    /// Returns `None` when the rank lies outside 1..=13.
    pub fn try_new(suit: Suit, rank: u8) -> Option<Self> {
        (MIN_RANK..=MAX_RANK)
            .contains(&rank)
            .then_some(Self { suit, rank })
    }

    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Sorting key used to arrange a hand: the Ace counts above the King.
    /// Only hand arrangement uses this; card comparison has its own rule.
    #[inline]
    pub fn order(&self) -> u8 {
        if self.is_ace() { MAX_RANK + 1 } else { self.rank }
    }

    /// Ranks 8 through King plus the Ace are "up"; 2 through 7 are "down".
    #[inline]
    pub fn is_up(&self) -> bool {
        is_up_rank(self.rank)
    }
}

#[inline]
pub fn is_up_rank(rank: u8) -> bool {
    rank == ACE || rank >= 8
}

pub fn rank_name(rank: u8) -> String {
    match rank {
        ACE => String::from("Ace"),
        JACK => String::from("Jack"),
        QUEEN => String::from("Queen"),
        KING => String::from("King"),
        other => other.to_string(),
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", rank_name(self.rank), self.suit.name())
    }
}

/// Builds the 52-card deck in deterministic order (unshuffled), suit by suit.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in MIN_RANK..=MAX_RANK {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}
