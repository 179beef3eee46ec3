pub mod human;
pub mod learner;
pub mod random;

pub use human::HumanBot;
pub use learner::{LearnerBot, LearnerMode};
pub use random::RandomBot;
