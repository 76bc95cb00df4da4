//! Stack table integration tests.

use proptest::prelude::*;
use stackdrill::{Card, DECK_SIZE, MNEMONICA, Stack, StackError, Suit};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn mnemonica_is_a_valid_stack() {
    let stack = Stack::mnemonica().unwrap();
    assert_eq!(stack.cards().len(), DECK_SIZE);
    assert_eq!(stack.card_at(1), Some(card(Suit::Clubs, 4)));
    assert_eq!(stack.card_at(13), Some(card(Suit::Clubs, 12)));
    assert_eq!(stack.card_at(27), Some(card(Suit::Clubs, 2)));
    assert_eq!(stack.card_at(52), Some(card(Suit::Diamonds, 9)));
    assert_eq!(stack.position_of(card(Suit::Spades, 1)), Ok(7));
}

#[test]
fn card_at_rejects_out_of_range_positions() {
    let stack = Stack::mnemonica().unwrap();
    assert_eq!(stack.card_at(0), None);
    assert_eq!(stack.card_at(53), None);
}

#[test]
fn construction_errors() {
    assert_eq!(
        Stack::new(&MNEMONICA[..51]).unwrap_err(),
        StackError::WrongSize(51)
    );

    let mut duplicated = MNEMONICA;
    duplicated[51] = duplicated[0];
    assert_eq!(
        Stack::new(&duplicated).unwrap_err(),
        StackError::DuplicateCard(card(Suit::Clubs, 4))
    );

    let mut bad_rank = MNEMONICA;
    bad_rank[10] = card(Suit::Hearts, 14);
    assert_eq!(
        Stack::new(&bad_rank).unwrap_err(),
        StackError::InvalidRank(card(Suit::Hearts, 14))
    );
}

#[test]
fn position_of_unknown_card() {
    let stack = Stack::mnemonica().unwrap();
    let joker = card(Suit::Spades, 0);
    assert_eq!(stack.position_of(joker), Err(StackError::UnknownCard(joker)));
}

#[test]
fn iter_lists_the_stack_top_down() {
    let stack = Stack::mnemonica().unwrap();
    let listed: Vec<(u8, Card)> = stack.iter().collect();
    assert_eq!(listed.len(), DECK_SIZE);
    assert_eq!(listed[0], (1, MNEMONICA[0]));
    assert_eq!(listed[51], (52, MNEMONICA[51]));
}

#[test]
fn card_display_forms() {
    assert_eq!(card(Suit::Spades, 1).to_string(), "AS");
    assert_eq!(card(Suit::Clubs, 10).to_string(), "10C");
    assert_eq!(card(Suit::Hearts, 12).pretty().to_string(), "Q♥");
    assert!(Suit::Diamonds.is_red());
    assert!(!Suit::Clubs.is_red());
}

proptest! {
    #[test]
    fn position_index_inverts_any_ordering(
        cards in Just(MNEMONICA.to_vec()).prop_shuffle()
    ) {
        let stack = Stack::new(&cards).unwrap();
        for position in 1..=52u8 {
            let card = cards[usize::from(position) - 1];
            prop_assert_eq!(stack.position_of(card), Ok(position));
            prop_assert_eq!(stack.card_at(position), Some(card));
        }
    }
}
