use serde::{Deserialize, Serialize};

use crate::action::CardChoice;
use crate::card::{Card, is_up_rank};
use crate::error::GameError;

pub const HAND_SIZE: usize = 2;

/// What a player announces about their hand: how many of the two cards are "up".
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HandShape {
    TwoUp,
    OneUpOneDown,
    TwoDown,
}

impl HandShape {
    pub const ALL: [HandShape; 3] = [HandShape::TwoUp, HandShape::OneUpOneDown, HandShape::TwoDown];

    /// Scenario index of the score table that covers this shape.
    pub fn index(self) -> usize {
        match self {
            HandShape::TwoUp => 0,
            HandShape::OneUpOneDown => 1,
            HandShape::TwoDown => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Classifies two ranks. Symmetric in its arguments.
pub fn classify(a: u8, b: u8) -> HandShape {
    match (is_up_rank(a), is_up_rank(b)) {
        (true, true) => HandShape::TwoUp,
        (false, false) => HandShape::TwoDown,
        _ => HandShape::OneUpOneDown,
    }
}

/// A player's cards, kept so that slot 0 holds the higher card (Ace high).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(HAND_SIZE),
        }
    }

    pub fn from_cards(first: Card, second: Card) -> Self {
        let mut hand = Self {
            cards: vec![first, second],
        };
        hand.arrange();
        hand
    }

    pub fn push(&mut self, card: Card) -> Result<(), GameError> {
        if self.cards.len() >= HAND_SIZE {
            return Err(GameError::HandFull);
        }
        self.cards.push(card);
        self.arrange();
        Ok(())
    }

    /// Swaps `card` into the chosen slot and returns the card it replaced.
    pub fn replace(&mut self, choice: CardChoice, card: Card) -> Result<Card, GameError> {
        let slot = self
            .cards
            .get_mut(choice.index())
            .ok_or(GameError::IncompleteHand)?;
        let old = std::mem::replace(slot, card);
        self.arrange();
        Ok(old)
    }

    pub fn card(&self, choice: CardChoice) -> Option<Card> {
        self.cards.get(choice.index()).copied()
    }

    pub fn high(&self) -> Option<Card> {
        self.card(CardChoice::High)
    }

    pub fn low(&self) -> Option<Card> {
        self.card(CardChoice::Low)
    }

    /// `(high rank, low rank)`: the score table key for this hand.
    pub fn ranks(&self) -> Option<(u8, u8)> {
        Some((self.high()?.rank(), self.low()?.rank()))
    }

    pub fn shape(&self) -> Option<HandShape> {
        self.ranks().map(|(high, low)| classify(high, low))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() == HAND_SIZE
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    // Equal ranks keep their order.
    fn arrange(&mut self) {
        if let [first, second] = self.cards.as_mut_slice() {
            if second.order() > first.order() {
                std::mem::swap(first, second);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{ACE, KING, Suit};

    #[test]
    fn arrangement_puts_higher_card_first_for_every_rank_pair() {
        for a in 1..=13u8 {
            for b in 1..=13u8 {
                let hand = Hand::from_cards(Card::new(Suit::Clubs, a), Card::new(Suit::Hearts, b));
                let high = hand.high().unwrap();
                let low = hand.low().unwrap();
                assert!(high.order() >= low.order(), "({a}, {b}) arranged as {high} / {low}");
                assert_eq!(hand.shape(), Some(classify(a, b)));
            }
        }
    }

    #[test]
    fn ace_is_placed_in_slot_zero() {
        let hand = Hand::from_cards(Card::new(Suit::Clubs, KING), Card::new(Suit::Spades, ACE));
        assert_eq!(hand.ranks(), Some((ACE, KING)));
    }

    #[test]
    fn replacement_rearranges() {
        let mut hand = Hand::from_cards(Card::new(Suit::Clubs, 9), Card::new(Suit::Spades, 4));
        let old = hand.replace(CardChoice::Low, Card::new(Suit::Hearts, 12)).unwrap();
        assert_eq!(old.rank(), 4);
        assert_eq!(hand.ranks(), Some((12, 9)));
    }

    #[test]
    fn push_rejects_a_third_card() {
        let mut hand = Hand::new();
        hand.push(Card::new(Suit::Clubs, 3)).unwrap();
        assert_eq!(hand.shape(), None);
        hand.push(Card::new(Suit::Clubs, 10)).unwrap();
        assert_eq!(hand.ranks(), Some((10, 3)));
        assert!(matches!(hand.push(Card::new(Suit::Clubs, 2)), Err(GameError::HandFull)));
    }

    #[test]
    fn classification_is_symmetric() {
        for a in 1..=13u8 {
            for b in 1..=13u8 {
                assert_eq!(classify(a, b), classify(b, a));
            }
        }
        assert_eq!(classify(ACE, 8), HandShape::TwoUp);
        assert_eq!(classify(7, 8), HandShape::OneUpOneDown);
        assert_eq!(classify(2, 7), HandShape::TwoDown);
    }
}
