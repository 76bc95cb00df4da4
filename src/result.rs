//! Feedback, statistics and the view-model returned by drill operations.

use crate::drill::{Direction, DrillMode, DrillState, Face, Question};
use crate::range::DrillRange;

/// Whether an answer matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The answer matched the expected face.
    Correct,
    /// The answer was wrong or could not be parsed.
    Incorrect,
}

/// Feedback for a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    /// Whether the answer was correct.
    pub outcome: Outcome,
    /// The expected answer.
    pub answer: Face,
    /// The parsed answer, or `None` if the text was malformed.
    pub given: Option<Face>,
}

/// Accuracy over a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accuracy {
    /// No attempts yet.
    NoData,
    /// Percentage of correct attempts (0.0..=100.0).
    Percent(f64),
}

#[cfg(feature = "std")]
fn round_percent(percent: f64) -> u8 {
    percent.round() as u8
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_percent(percent: f64) -> u8 {
    libm::round(percent) as u8
}

impl Accuracy {
    /// The percentage rounded to a whole number, or `None` without data.
    #[must_use]
    pub fn rounded_percent(&self) -> Option<u8> {
        match *self {
            Self::NoData => None,
            Self::Percent(percent) => Some(round_percent(percent)),
        }
    }
}

/// Session counters.
///
/// Counters only grow until [`Drill::reset_stats`](crate::Drill::reset_stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Answers submitted.
    pub attempts: u32,
    /// Answers that were correct.
    pub correct: u32,
    /// Auto-session questions advanced to.
    pub rounds_completed: u32,
    /// Flashcards shown.
    pub cards_reviewed: u32,
}

impl SessionStats {
    /// Creates zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts: 0,
            correct: 0,
            rounds_completed: 0,
            cards_reviewed: 0,
        }
    }

    /// Counts one answer. Counters saturate instead of wrapping.
    pub(crate) const fn record_answer(&mut self, outcome: Outcome) {
        self.attempts = self.attempts.saturating_add(1);
        if matches!(outcome, Outcome::Correct) {
            self.correct = self.correct.saturating_add(1);
        }
    }

    pub(crate) const fn record_round(&mut self) {
        self.rounds_completed = self.rounds_completed.saturating_add(1);
    }

    pub(crate) const fn record_card(&mut self) {
        self.cards_reviewed = self.cards_reviewed.saturating_add(1);
    }

    /// Returns `correct / attempts` as a percentage.
    ///
    /// ```
    /// use stackdrill::{Accuracy, SessionStats};
    ///
    /// assert_eq!(SessionStats::new().accuracy(), Accuracy::NoData);
    /// let stats = SessionStats { attempts: 4, correct: 3, ..SessionStats::new() };
    /// assert_eq!(stats.accuracy(), Accuracy::Percent(75.0));
    /// ```
    #[must_use]
    pub fn accuracy(&self) -> Accuracy {
        if self.attempts == 0 {
            return Accuracy::NoData;
        }
        Accuracy::Percent(f64::from(self.correct) / f64::from(self.attempts) * 100.0)
    }
}

/// Snapshot of a drill, returned by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillView {
    /// The drill's mode.
    pub mode: DrillMode,
    /// Current state.
    pub state: DrillState,
    /// The current question, if any.
    pub question: Option<Question>,
    /// Feedback for the last answer to the current question.
    pub feedback: Option<Feedback>,
    /// The expected answer, once revealed.
    pub revealed: Option<Face>,
    /// Session counters.
    pub stats: SessionStats,
    /// Whether an auto session is running.
    pub running: bool,
    /// Positions questions are drawn from.
    pub range: DrillRange,
    /// Auto-session thinking time in seconds.
    pub interval_seconds: u8,
}

impl DrillView {
    /// The direction of the current question, if any.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.question.map(|question| question.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_saturate_at_max() {
        let mut stats = SessionStats {
            attempts: u32::MAX,
            correct: u32::MAX,
            rounds_completed: u32::MAX,
            cards_reviewed: u32::MAX,
        };
        stats.record_answer(Outcome::Correct);
        stats.record_round();
        stats.record_card();
        assert_eq!(stats.attempts, u32::MAX);
        assert_eq!(stats.correct, u32::MAX);
        assert_eq!(stats.rounds_completed, u32::MAX);
        assert_eq!(stats.cards_reviewed, u32::MAX);
    }

    #[test]
    fn incorrect_answer_only_counts_the_attempt() {
        let mut stats = SessionStats::new();
        stats.record_answer(Outcome::Incorrect);
        stats.record_answer(Outcome::Correct);
        assert_eq!((stats.correct, stats.attempts), (1, 2));
    }
}
