//! Free-form answer text to [`Card`] normalization.

use crate::card::{Card, Suit};

/// Parses user-typed card text into a [`Card`].
///
/// Case and whitespace are ignored. The suit may be a letter (`S`, `H`, `D`,
/// `C`) or a glyph (`♠♥♦♣`). The rank must be one of `A`, `2`-`10`, `J`, `Q`,
/// `K`; ten may also be typed as `T`, but always normalizes to the same card
/// whose canonical text is `10`.
///
/// Malformed input yields `None`; this function never panics.
///
/// ```
/// use stackdrill::{Card, Suit, normalize};
///
/// let ace = Some(Card::new(Suit::Spades, 1));
/// assert_eq!(normalize("as"), ace);
/// assert_eq!(normalize(" A S "), ace);
/// assert_eq!(normalize("a♠"), ace);
/// assert_eq!(normalize("tc"), normalize("10C"));
/// assert_eq!(normalize(""), None);
/// ```
#[must_use]
pub fn normalize(text: &str) -> Option<Card> {
    let mut chars = text.chars().filter(|c| !c.is_whitespace());

    let suit = Suit::from_char(chars.next_back()?)?;
    let rank = parse_rank(chars)?;

    Some(Card::new(suit, rank))
}

fn parse_rank(mut chars: impl Iterator<Item = char>) -> Option<u8> {
    let first = chars.next()?;
    let second = chars.next();
    if chars.next().is_some() {
        return None;
    }

    match (first.to_ascii_uppercase(), second) {
        ('A', None) => Some(1),
        ('J', None) => Some(11),
        ('Q', None) => Some(12),
        ('K', None) => Some(13),
        ('T', None) | ('1', Some('0')) => Some(10),
        (digit @ '2'..='9', None) => Some(digit as u8 - b'0'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_rank_only_and_suit_only() {
        assert_eq!(normalize("Q"), None);
        assert_eq!(normalize("♣"), None);
        assert_eq!(normalize("1C"), None);
        assert_eq!(normalize("11C"), None);
        assert_eq!(normalize("100C"), None);
    }
}
