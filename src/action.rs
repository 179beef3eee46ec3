use serde::{Deserialize, Serialize};

/// Zero-based seat index: 0 or 1.
pub type PlayerId = usize;

pub const SEATS: usize = 2;

/// Index of the seat facing `seat`.
#[inline]
pub fn opponent(seat: PlayerId) -> PlayerId {
    1 - seat
}

/// Which card of an arranged hand is played.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardChoice {
    /// Slot 0, the higher card.
    High,
    /// Slot 1, the lower card.
    Low,
}

impl CardChoice {
    pub const ALL: [CardChoice; 2] = [CardChoice::High, CardChoice::Low];

    pub fn index(self) -> usize {
        match self {
            CardChoice::High => 0,
            CardChoice::Low => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Betting signal, also used as the decision class when scoring.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Fold,
    Check,
    Raise,
}

impl Signal {
    pub const ALL: [Signal; 3] = [Signal::Fold, Signal::Check, Signal::Raise];

    pub fn class(self) -> usize {
        match self {
            Signal::Fold => 0,
            Signal::Check => 1,
            Signal::Raise => 2,
        }
    }

    pub fn from_class(class: usize) -> Option<Self> {
        Self::ALL.get(class).copied()
    }
}

/// Card and opening signal picked by an agent at the start of a round.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub choice: CardChoice,
    pub signal: Signal,
}

impl Action {
    pub fn new(choice: CardChoice, signal: Signal) -> Self {
        Self { choice, signal }
    }
}

pub const ACTION_SLOTS: usize = 6;

/// Position of a (card choice, decision) pair in a score cell:
/// `choice + 2 * decision class`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ActionSlot(u8);

impl ActionSlot {
    /// High card, check.
    pub const NEUTRAL: ActionSlot = ActionSlot(2);

    pub fn new(choice: CardChoice, signal: Signal) -> Self {
        Self((choice.index() + 2 * signal.class()) as u8)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < ACTION_SLOTS).then_some(Self(index as u8))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn choice(self) -> CardChoice {
        if self.0 % 2 == 0 { CardChoice::High } else { CardChoice::Low }
    }

    pub fn signal(self) -> Signal {
        match self.0 / 2 {
            0 => Signal::Fold,
            1 => Signal::Check,
            _ => Signal::Raise,
        }
    }

    pub fn action(self) -> Action {
        Action::new(self.choice(), self.signal())
    }

    pub fn is_fold(self) -> bool {
        self.0 < 2
    }
}

impl From<Action> for ActionSlot {
    fn from(action: Action) -> Self {
        Self::new(action.choice, action.signal)
    }
}
