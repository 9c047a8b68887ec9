//! Per-user conversation state for an in-progress assessment.

use dashmap::DashMap;
use serde::Serialize;
use strum::Display;

use super::answers::{parse_symptoms, Answers, CycleLength, CycleRegularity};

/// Identity of the user an assessment belongs to (Telegram user id)
pub type UserKey = u64;

/// Position in the fixed question sequence. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Cycle,
    Length,
    Symptoms,
    Done,
}

impl Stage {
    pub fn next(self) -> Self {
        match self {
            Stage::Cycle => Stage::Length,
            Stage::Length => Stage::Symptoms,
            Stage::Symptoms | Stage::Done => Stage::Done,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    pub user_id: UserKey,
    pub stage: Stage,
    pub answers: Answers,
}

impl ConversationState {
    fn new(user_id: UserKey) -> Self {
        Self {
            user_id,
            stage: Stage::Cycle,
            answers: Answers::default(),
        }
    }
}

/// Outcome of [`ConversationStateStore::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Answer recorded, the state now waits at this stage
    Next(Stage),
    /// All three answers are in; score them and clear the user
    Complete(Answers),
}

/// In-memory table of active assessments keyed by user.
///
/// Entries are locked individually, so handlers for different users never
/// contend and a single user's state is mutated under its entry guard.
#[derive(Debug, Default)]
pub struct ConversationStateStore {
    states: DashMap<UserKey, ConversationState>,
}

impl ConversationStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) an assessment at the first question.
    pub fn start(&self, user_id: UserKey) -> ConversationState {
        let state = ConversationState::new(user_id);
        self.states.insert(user_id, state.clone());
        log::debug!("Assessment started for user {}", user_id);
        state
    }

    /// Snapshot of the user's state, `None` if no assessment is active
    pub fn get(&self, user_id: UserKey) -> Option<ConversationState> {
        self.states.get(&user_id).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, user_id: UserKey) -> bool {
        self.states.contains_key(&user_id)
    }

    /// Records `value` as the answer to the current stage and moves forward.
    ///
    /// Returns `None` when the user has no active assessment. Once the
    /// symptoms answer is in the stage is `Done` and further calls keep
    /// returning the same completed answers.
    pub fn advance(&self, user_id: UserKey, value: &str) -> Option<Advance> {
        let mut entry = self.states.get_mut(&user_id)?;
        let state = entry.value_mut();

        match state.stage {
            Stage::Cycle => {
                state.answers.cycle_regularity = CycleRegularity::from_answer(value);
                if state.answers.cycle_regularity.is_none() {
                    log::debug!("User {} gave unrecognised regularity {:?}", user_id, value);
                }
            }
            Stage::Length => state.answers.cycle_length = Some(CycleLength::from_answer(value)),
            Stage::Symptoms => state.answers.symptoms = parse_symptoms(value),
            Stage::Done => return Some(Advance::Complete(state.answers.clone())),
        }

        state.stage = state.stage.next();
        log::debug!("User {} advanced to stage {}", user_id, state.stage);

        Some(match state.stage {
            Stage::Done => Advance::Complete(state.answers.clone()),
            stage => Advance::Next(stage),
        })
    }

    /// Drops the user's state. Clearing a user without state is a no-op.
    ///
    /// Returns whether an assessment was removed.
    pub fn clear(&self, user_id: UserKey) -> bool {
        self.states.remove(&user_id).is_some()
    }

    /// Number of assessments in progress
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
