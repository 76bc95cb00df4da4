//! Drill state types.

use crate::options::DrillOptions;
use crate::result::{Feedback, SessionStats};

use super::question::Question;

/// Drill state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillState {
    /// No question has been posed.
    Idle,
    /// A question is waiting for an answer.
    Posed,
    /// The current question has been answered and feedback is available.
    Answered,
}

/// The interaction style a drill is created for.
///
/// Each mode keeps its own counters; create one [`Drill`](crate::Drill) per
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrillMode {
    /// Ask on demand and check typed answers.
    Manual,
    /// Timed, hands-free: think, see the answer, move on.
    Auto,
    /// Two-sided cards that are flipped rather than answered.
    Flashcard,
}

/// Everything a drill mutates, guarded by a single lock.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub(crate) options: DrillOptions,
    pub(crate) state: DrillState,
    pub(crate) question: Option<Question>,
    pub(crate) feedback: Option<Feedback>,
    pub(crate) revealed: bool,
    pub(crate) stats: SessionStats,
    pub(crate) running: bool,
}

impl Session {
    pub(crate) const fn new(options: DrillOptions) -> Self {
        Self {
            options,
            state: DrillState::Idle,
            question: None,
            feedback: None,
            revealed: false,
            stats: SessionStats::new(),
            running: false,
        }
    }

    /// Replaces the current question and clears anything tied to the old one.
    pub(crate) fn pose(&mut self, question: Question) {
        self.question = Some(question);
        self.feedback = None;
        self.revealed = false;
        self.state = DrillState::Posed;
    }
}
