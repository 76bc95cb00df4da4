//! Questions and their two faces.

use core::fmt;

use crate::card::Card;

/// Which way a question is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Given a position, name the card.
    PositionToCard,
    /// Given a card, name its position.
    CardToPosition,
}

/// One side of a question: either a stack position or a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// A 1-based stack position.
    Position(u8),
    /// A card.
    Card(Card),
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "{position}"),
            Self::Card(card) => write!(f, "{card}"),
        }
    }
}

/// A posed question.
///
/// A question carries both the position and the card at that position; the
/// direction decides which one is shown and which one is asked for.
/// Questions are replaced, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Question {
    /// Which way the question is asked.
    pub direction: Direction,
    /// The stack position involved.
    pub position: u8,
    /// The card at [`Question::position`].
    pub card: Card,
}

impl Question {
    /// The face shown to the user.
    #[must_use]
    pub const fn front(&self) -> Face {
        match self.direction {
            Direction::PositionToCard => Face::Position(self.position),
            Direction::CardToPosition => Face::Card(self.card),
        }
    }

    /// The face the user is expected to recall.
    #[must_use]
    pub const fn back(&self) -> Face {
        match self.direction {
            Direction::PositionToCard => Face::Card(self.card),
            Direction::CardToPosition => Face::Position(self.position),
        }
    }
}
