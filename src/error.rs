//! Error types for stack and drill operations.

use thiserror::Error;

use crate::card::Card;

/// Errors raised while building or querying a [`Stack`](crate::Stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// The stack does not hold exactly 52 cards.
    #[error("stack must hold 52 cards, got {0}")]
    WrongSize(usize),
    /// A card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// A card has a rank outside A..K.
    #[error("card rank {} is not a valid rank", .0.rank)]
    InvalidRank(Card),
    /// The card is not part of the stack.
    #[error("card {0} is not in the stack")]
    UnknownCard(Card),
}

/// Errors raised when configuring a [`DrillRange`](crate::DrillRange).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Start position is after the end position.
    #[error("start position {start} must be <= end position {end}")]
    StartAfterEnd {
        /// Requested start.
        start: u8,
        /// Requested end.
        end: u8,
    },
    /// A bound lies outside 1..=52.
    #[error("positions must lie within 1..=52, got {start}..={end}")]
    OutOfBounds {
        /// Requested start.
        start: u8,
        /// Requested end.
        end: u8,
    },
}

/// Errors that can occur when submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// No question has been posed yet.
    #[error("no question has been posed")]
    NotPosed,
    /// The current question was already answered.
    #[error("the current question was already answered")]
    AlreadyAnswered,
}

/// Errors that can occur when revealing the current answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    /// No question has been posed yet.
    #[error("no question has been posed")]
    NotPosed,
}

/// Errors that can occur when controlling an auto session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AutoError {
    /// Thinking time outside 1..=60 seconds.
    #[error("thinking time must be 1..=60 seconds, got {0}")]
    InvalidInterval(u8),
    /// Auto sessions only run on auto drills.
    #[error("auto sessions can only run on an auto drill")]
    NotAutoDrill,
}

/// Errors that can occur when creating a drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrillError {
    /// The stack failed validation.
    #[error(transparent)]
    Stack(#[from] StackError),
    /// The configured thinking time is invalid.
    #[error(transparent)]
    Auto(#[from] AutoError),
}
