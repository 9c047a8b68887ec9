//! Three-question assessment: answer model, per-user state, scoring

pub mod answers;
pub mod scorer;
pub mod state;

pub use answers::{parse_symptoms, Answers, CycleLength, CycleRegularity};
pub use scorer::{score, Breakdown, Defaulted, RiskCategory, ScoreResult};
pub use state::{Advance, ConversationState, ConversationStateStore, Stage, UserKey};
