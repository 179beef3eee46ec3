use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, full_deck};
use crate::error::GameError;

/// Draw pile plus the discard pile that feeds it once it runs dry.
///
/// Cards only move between the two piles and the players' hands, so the total
/// number of cards never changes and no card is ever duplicated.
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    /// All 52 cards in uniform random order.
    pub fn new_shuffled(mut rng: StdRng) -> Self {
        let mut draw_pile = full_deck();
        draw_pile.shuffle(&mut rng);
        Self {
            draw_pile,
            discard_pile: Vec::with_capacity(DECK_SIZE),
            rng,
        }
    }

    /// Deterministic deck; the last card of `cards` is drawn first.
    pub fn from_cards(cards: Vec<Card>, rng: StdRng) -> Self {
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Removes and returns the top card. Never replenishes on its own: callers
    /// decide when to [`reshuffle`](Self::reshuffle).
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.draw_pile.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Moves every discarded card back under the draw pile and shuffles it.
    pub fn reshuffle(&mut self) {
        self.draw_pile.append(&mut self.discard_pile);
        self.draw_pile.shuffle(&mut self.rng);
        log::debug!("reshuffled deck ({} cards)", self.draw_pile.len());
    }

    /// Draws, reshuffling the discard pile first when the draw pile is empty.
    pub fn draw_or_reshuffle(&mut self) -> Result<Card, GameError> {
        match self.draw() {
            Err(GameError::EmptyDeck) => {
                self.reshuffle();
                self.draw()
            }
            other => other,
        }
    }

    pub fn len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Every card currently held by the deck, draw pile first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.draw_pile.iter().chain(self.discard_pile.iter())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::card::Suit;

    #[test]
    fn draw_on_empty_deck_fails() {
        let mut deck = Deck::from_cards(vec![Card::new(Suit::Clubs, 5)], StdRng::seed_from_u64(1));
        assert_eq!(deck.draw().map(|c| c.rank()).ok(), Some(5));
        assert!(matches!(deck.draw(), Err(GameError::EmptyDeck)));
    }

    #[test]
    fn draw_or_reshuffle_recycles_discards() {
        let mut deck = Deck::from_cards(Vec::new(), StdRng::seed_from_u64(2));
        deck.discard(Card::new(Suit::Hearts, 9));
        let card = deck.draw_or_reshuffle().expect("discard pile is recycled");
        assert_eq!(card, Card::new(Suit::Hearts, 9));
        assert_eq!(deck.discard_len(), 0);
        assert!(matches!(deck.draw_or_reshuffle(), Err(GameError::EmptyDeck)));
    }
}
