//! Card types and display helpers.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Returns the single-letter form (`S`, `H`, `D`, `C`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }

    /// Returns the suit glyph (`♠`, `♥`, `♦`, `♣`).
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    /// Parses a suit letter (either case) or glyph.
    ///
    /// White-outline glyphs (`♤♡♢♧`) are accepted as well.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'S' | 's' | '♠' | '♤' => Some(Self::Spades),
            'H' | 'h' | '♥' | '♡' => Some(Self::Hearts),
            'D' | 'd' | '♦' | '♢' => Some(Self::Diamonds),
            'C' | 'c' | '♣' | '♧' => Some(Self::Clubs),
            _ => None,
        }
    }

    /// Whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. A card with a rank
    /// outside 1..=13 never appears in a valid [`Stack`](crate::Stack), so
    /// stack construction rejects it.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Whether the rank is one of A, 2-10, J, Q, K.
    #[must_use]
    pub const fn has_valid_rank(&self) -> bool {
        matches!(self.rank, 1..=13)
    }

    /// Returns the canonical rank text (`A`, `2`..`10`, `J`, `Q`, `K`).
    ///
    /// Ten is always written `10`.
    #[must_use]
    pub const fn rank_str(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }

    /// Returns a value that displays the card with its suit glyph, e.g. `Q♣`.
    #[must_use]
    pub const fn pretty(self) -> Pretty {
        Pretty(self)
    }
}

/// Canonical form: rank followed by suit letter, e.g. `AS`, `10C`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_str(), self.suit.letter())
    }
}

/// Glyph rendering of a [`Card`], returned by [`Card::pretty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pretty(Card);

impl fmt::Display for Pretty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.rank_str(), self.0.suit.glyph())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
