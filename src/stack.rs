//! Memorized stacks: a fixed card order and its inverse lookup.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::StackError;

const fn c(rank: u8, suit: Suit) -> Card {
    Card::new(suit, rank)
}

use Suit::{Clubs as C, Diamonds as D, Hearts as H, Spades as S};

/// Juan Tamariz's Mnemonica, position 1 (top of deck) first.
pub const MNEMONICA: [Card; DECK_SIZE] = [
    c(4, C),
    c(2, H),
    c(7, D),
    c(3, C),
    c(4, H),
    c(6, D),
    c(1, S),
    c(5, H),
    c(9, S),
    c(2, S),
    c(12, H),
    c(3, D),
    c(12, C),
    c(8, H),
    c(6, S),
    c(5, S),
    c(9, H),
    c(13, C),
    c(2, D),
    c(11, H),
    c(3, S),
    c(8, S),
    c(6, H),
    c(10, C),
    c(5, D),
    c(13, D),
    c(2, C),
    c(3, H),
    c(8, D),
    c(5, C),
    c(13, S),
    c(11, D),
    c(8, C),
    c(10, S),
    c(13, H),
    c(11, C),
    c(7, S),
    c(10, H),
    c(1, D),
    c(4, S),
    c(7, H),
    c(4, D),
    c(1, C),
    c(9, C),
    c(11, S),
    c(12, D),
    c(7, C),
    c(12, S),
    c(10, D),
    c(6, C),
    c(1, H),
    c(9, D),
];

/// A validated memorized stack.
///
/// Positions are 1-based: position 1 is the top of the deck. The stack keeps
/// an inverse index so [`Stack::position_of`] is a single lookup.
#[derive(Debug, Clone)]
pub struct Stack {
    cards: [Card; DECK_SIZE],
    positions: HashMap<Card, u8>,
}

impl Stack {
    /// Builds a stack from 52 distinct cards in top-down order.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice does not hold exactly 52 cards, if any
    /// card has an invalid rank, or if a card appears twice.
    pub fn new(cards: &[Card]) -> Result<Self, StackError> {
        let cards: [Card; DECK_SIZE] = cards
            .try_into()
            .map_err(|_| StackError::WrongSize(cards.len()))?;

        let mut positions = HashMap::with_capacity(DECK_SIZE);
        for (index, &card) in cards.iter().enumerate() {
            if !card.has_valid_rank() {
                return Err(StackError::InvalidRank(card));
            }
            if positions.insert(card, index as u8 + 1).is_some() {
                return Err(StackError::DuplicateCard(card));
            }
        }

        Ok(Self { cards, positions })
    }

    /// Returns the Mnemonica stack.
    ///
    /// Under `std` the table is validated once per process and cloned from a
    /// cache afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in table is malformed.
    #[cfg(feature = "std")]
    pub fn mnemonica() -> Result<Self, StackError> {
        static MNEMONICA_STACK: std::sync::OnceLock<Result<Stack, StackError>> =
            std::sync::OnceLock::new();
        MNEMONICA_STACK.get_or_init(|| Self::new(&MNEMONICA)).clone()
    }

    /// Returns the Mnemonica stack.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in table is malformed.
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn mnemonica() -> Result<Self, StackError> {
        Self::new(&MNEMONICA)
    }

    /// Returns the cards in top-down order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// Returns the card at a 1-based position, or `None` outside 1..=52.
    #[must_use]
    pub fn card_at(&self, position: u8) -> Option<Card> {
        let index = usize::from(position).checked_sub(1)?;
        self.cards.get(index).copied()
    }

    /// Returns the 1-based position of a card.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::UnknownCard`] if the card is not in the stack.
    pub fn position_of(&self, card: Card) -> Result<u8, StackError> {
        self.positions
            .get(&card)
            .copied()
            .ok_or(StackError::UnknownCard(card))
    }

    /// Iterates `(position, card)` pairs from the top of the deck.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Card)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, &card)| (index as u8 + 1, card))
    }
}
