//! Answer normalization tests.

use proptest::prelude::*;
use stackdrill::{Card, MNEMONICA, Suit, normalize};

#[test]
fn accepts_letters_glyphs_and_spacing() {
    let ace = Some(Card::new(Suit::Spades, 1));
    assert_eq!(normalize("as"), ace);
    assert_eq!(normalize("A S"), ace);
    assert_eq!(normalize("a♠"), ace);
    assert_eq!(normalize("\tA  ♠\n"), ace);

    assert_eq!(normalize("qc"), Some(Card::new(Suit::Clubs, 12)));
    assert_eq!(normalize("K♦"), Some(Card::new(Suit::Diamonds, 13)));
    assert_eq!(normalize("7 h"), Some(Card::new(Suit::Hearts, 7)));
}

#[test]
fn ten_has_one_canonical_form() {
    let ten = Some(Card::new(Suit::Hearts, 10));
    assert_eq!(normalize("10H"), ten);
    assert_eq!(normalize("1 0 h"), ten);
    assert_eq!(normalize("TH"), ten);
    assert_eq!(normalize("th").map(|card| card.to_string()), Some("10H".into()));
}

#[test]
fn malformed_input_is_none() {
    for text in ["", "   ", "A", "S", "ZS", "AX", "0S", "1S", "11S", "AAS", "A♠♠", "🂡"] {
        assert_eq!(normalize(text), None, "{text:?}");
    }
}

#[test]
fn canonical_text_is_a_fixed_point() {
    for card in MNEMONICA {
        let text = card.to_string();
        let normalized = normalize(&text).unwrap();
        assert_eq!(normalized, card);
        assert_eq!(normalize(&normalized.to_string()), Some(normalized));
        assert_eq!(normalize(&card.pretty().to_string()), Some(card));
    }
}

proptest! {
    #[test]
    fn never_panics(text in "\\PC*") {
        let _ = normalize(&text);
    }

    #[test]
    fn normalized_output_is_stable(text in "[ 0-9ATJQKatjqk]{1,3}[SHDCshdc♠♥♦♣]") {
        if let Some(card) = normalize(&text) {
            prop_assert_eq!(normalize(&card.to_string()), Some(card));
        }
    }
}
