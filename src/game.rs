use std::array::from_fn;
use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::{CardChoice, PlayerId, SEATS, opponent};
use crate::betting::{Settlement, handshake, settle};
use crate::bot::Bot;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::{HAND_SIZE, Hand};
use crate::state::{RoundReport, RoundView};

const DEFAULT_SEED: u64 = 0x0BE0_F00D_5EED_CAFE;
pub const DEFAULT_LIVES: [i32; SEATS] = [6, 6];

/// How the betting phase of a round is run.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BettingMode {
    /// Both seats signal simultaneously and keep raising until someone stops.
    Escalation,
    /// Seat 0 opens, seat 1 responds, seat 0 may answer a raise once.
    Handshake,
}

/// Configuration required to bootstrap a table.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub lives: [i32; SEATS],
    pub seed: u64,
    pub mode: BettingMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lives: DEFAULT_LIVES,
            seed: DEFAULT_SEED,
            mode: BettingMode::Escalation,
        }
    }
}

/// Builder that enables deterministic deck injection for tests and experiments.
#[derive(Default)]
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lives(mut self, first: i32, second: i32) -> Self {
        self.config.lives = [first, second];
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_mode(mut self, mode: BettingMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Uses `deck` as the draw pile; its last card is dealt first.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// A heads-up One Poker table.
pub struct Game {
    lives: [i32; SEATS],
    hands: [Hand; SEATS],
    deck: Deck,
    mode: BettingMode,
    round: usize,
}

impl Game {
    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        if config.lives.iter().any(|&life| life <= 0) {
            return Err(GameError::InvalidConfiguration("lives must be positive"));
        }
        let rng = StdRng::seed_from_u64(config.seed);
        let deck = match deck {
            Some(cards) => {
                if cards.len() < SEATS * HAND_SIZE {
                    return Err(GameError::InvalidConfiguration(
                        "deck does not contain enough cards to deal",
                    ));
                }
                let unique: HashSet<Card> = cards.iter().copied().collect();
                if unique.len() != cards.len() {
                    return Err(GameError::InvalidConfiguration("deck contains duplicate cards"));
                }
                Deck::from_cards(cards, rng)
            }
            None => Deck::new_shuffled(rng),
        };
        let mut game = Game {
            lives: config.lives,
            hands: from_fn(|_| Hand::new()),
            deck,
            mode: config.mode,
            round: 0,
        };
        game.deal()?;
        Ok(game)
    }

    // Seats take turns drawing, seat 0 first.
    fn deal(&mut self) -> Result<(), GameError> {
        for _ in 0..HAND_SIZE {
            for seat in 0..SEATS {
                let card = self.deck.draw_or_reshuffle()?;
                self.hands[seat].push(card)?;
            }
        }
        Ok(())
    }

    /// Returns both hands to the discard pile, restores lives and deals again.
    pub fn reset(&mut self, lives: [i32; SEATS]) -> Result<(), GameError> {
        for hand in &mut self.hands {
            for card in hand.take_all() {
                self.deck.discard(card);
            }
        }
        self.lives = lives;
        self.deal()
    }

    pub fn lives(&self) -> [i32; SEATS] {
        self.lives
    }

    pub fn hand(&self, seat: PlayerId) -> &Hand {
        &self.hands[seat]
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Number of rounds played since the table was built.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn is_finished(&self) -> bool {
        self.lives.iter().any(|&life| life <= 0)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.lives {
            [first, second] if second <= 0 && first > 0 => Some(0),
            [first, second] if first <= 0 && second > 0 => Some(1),
            _ => None,
        }
    }

    /// Every card at the table: draw pile, discard pile and both hands.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.deck.cards().copied().collect();
        for hand in &self.hands {
            cards.extend_from_slice(hand.cards());
        }
        cards
    }

    pub fn view(&self, seat: PlayerId) -> Result<RoundView, GameError> {
        let own_shape = self.hands[seat].shape().ok_or(GameError::IncompleteHand)?;
        let opponent_shape = self.hands[opponent(seat)]
            .shape()
            .ok_or(GameError::IncompleteHand)?;
        Ok(RoundView {
            round: self.round,
            seat,
            hand: self.hands[seat].clone(),
            own_shape,
            opponent_shape,
            lives: self.lives,
        })
    }

    /// Plays one full round: bet, reveal, replace the played cards and transfer lives.
    pub fn play_round(&mut self, bots: [&mut dyn Bot; SEATS]) -> Result<RoundReport, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let views = [self.view(0)?, self.view(1)?];
        let [first, second] = bots;
        let (choices, settlement) = self.bet(&views, &mut *first, &mut *second);

        let played = [
            self.hands[0].card(choices[0]).ok_or(GameError::IncompleteHand)?,
            self.hands[1].card(choices[1]).ok_or(GameError::IncompleteHand)?,
        ];
        let outcome = settlement.outcome(played);

        // Discard before drawing: the draw pile may be empty.
        for (seat, choice) in choices.into_iter().enumerate() {
            self.deck.discard(played[seat]);
            let card = self.deck.draw_or_reshuffle()?;
            self.hands[seat].replace(choice, card)?;
        }

        let deltas = settlement.life_deltas(outcome);
        for (life, delta) in self.lives.iter_mut().zip(deltas) {
            *life += delta;
        }
        log::debug!(
            "round {}: played {} vs {}, stakes {:?}, {:?}, lives {:?}",
            self.round,
            played[0],
            played[1],
            settlement.stakes,
            outcome,
            self.lives
        );

        let report = RoundReport {
            round: self.round,
            hands: [views[0].hand.clone(), views[1].hand.clone()],
            shapes: [views[0].own_shape, views[1].own_shape],
            choices,
            played,
            settlement,
            outcome,
            lives: self.lives,
        };

        self.round += 1;

        first.observe(0, &report);
        second.observe(1, &report);
        Ok(report)
    }

    fn bet(
        &self,
        views: &[RoundView; SEATS],
        first: &mut dyn Bot,
        second: &mut dyn Bot,
    ) -> ([CardChoice; SEATS], Settlement) {
        let mut choices = [CardChoice::High; SEATS];
        let settlement = match self.mode {
            BettingMode::Escalation => settle(self.lives, |step| {
                if step.index == 0 {
                    let opening = [first.decide(&views[0], false), second.decide(&views[1], false)];
                    choices = opening.map(|action| action.choice);
                    opening.map(|action| action.signal)
                } else {
                    [first.escalate(&views[0], step), second.escalate(&views[1], step)]
                }
            }),
            BettingMode::Handshake => {
                let opening = first.decide(&views[0], false);
                choices[0] = opening.choice;
                let mut reply = CardChoice::High;
                let settlement = handshake(
                    self.lives,
                    opening.signal,
                    |raised| {
                        let action = second.decide(&views[1], raised);
                        reply = action.choice;
                        action.signal
                    },
                    |step| first.escalate(&views[0], step),
                );
                choices[1] = reply;
                settlement
            }
        };
        (choices, settlement)
    }
}
