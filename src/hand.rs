use crate::Card;
use serde::{Deserialize, Serialize};

/// Which side of the table a card belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Player,
    Dealer,
}

/// Calculate the best value of a blackjack hand
pub fn calculate_hand_value(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut aces = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.value());
    }

    // Demote aces to 1 until the hand fits
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// Value with every ace counted as 1
pub fn hard_hand_value(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.face_value()))
}

/// Check if a hand is soft (has an ace counted as 11)
pub fn is_soft_hand(cards: &[Card]) -> bool {
    calculate_hand_value(cards) != hard_hand_value(cards)
}

/// Check if a hand is busted
pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > 21
}

/// Check if a hand is a natural (21 with 2 cards)
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards) == 21
}

/// Cards that have landed on one side of the table. Grows only by append.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Spades: code == rank
    const ACE: usize = 0;
    const TWO: usize = 1;
    const FIVE: usize = 4;
    const SIX: usize = 5;
    const SEVEN: usize = 6;
    const NINE: usize = 8;
    const QUEEN: usize = 11;
    const KING: usize = 12;
    const HEARTS: usize = 13;

    fn cards(codes: &[usize]) -> Vec<Card> {
        codes.iter().map(|&c| Card::from_index(c)).collect()
    }

    #[test]
    fn test_calculate_hand_value_simple() {
        assert_eq!(calculate_hand_value(&cards(&[TWO, HEARTS + 2])), 5);
    }

    #[test]
    fn test_calculate_hand_value_with_face_cards() {
        assert_eq!(calculate_hand_value(&cards(&[HEARTS + KING, QUEEN])), 20);
    }

    #[test]
    fn test_calculate_hand_value_blackjack() {
        let hand = cards(&[HEARTS + ACE, KING]);
        assert_eq!(calculate_hand_value(&hand), 21);
        assert!(is_natural(&hand));
    }

    #[test]
    fn test_calculate_hand_value_soft_ace() {
        assert_eq!(calculate_hand_value(&cards(&[HEARTS + ACE, SIX])), 17);
    }

    #[test]
    fn test_calculate_hand_value_hard_ace() {
        assert_eq!(calculate_hand_value(&cards(&[HEARTS + ACE, SIX, 39 + NINE])), 16);
    }

    #[test]
    fn test_calculate_hand_value_multiple_aces() {
        // One ace as 11, one as 1
        assert_eq!(calculate_hand_value(&cards(&[HEARTS + ACE, ACE, NINE])), 21);
        assert_eq!(calculate_hand_value(&cards(&[ACE, 13, 26, 39])), 14);
    }

    #[test]
    fn test_bust_without_aces_to_demote() {
        let hand = cards(&[KING, QUEEN, FIVE]);
        assert_eq!(calculate_hand_value(&hand), 25);
        assert!(is_busted(&hand));
    }

    #[test]
    fn test_not_busted() {
        assert!(!is_busted(&cards(&[HEARTS + KING, QUEEN])));
    }

    #[test]
    fn test_not_natural_three_cards() {
        assert!(!is_natural(&cards(&[SEVEN, HEARTS + SEVEN, 39 + SEVEN])));
    }

    #[test]
    fn test_not_natural_wrong_value() {
        assert!(!is_natural(&cards(&[HEARTS + KING, QUEEN])));
    }

    #[test]
    fn test_is_soft_hand() {
        assert!(is_soft_hand(&cards(&[HEARTS + ACE, SIX])));
        assert!(is_soft_hand(&cards(&[ACE, HEARTS + ACE, FIVE])));
    }

    #[test]
    fn test_not_soft_hand_hard_ace() {
        assert!(!is_soft_hand(&cards(&[HEARTS + ACE, SIX, 39 + NINE])));
    }

    #[test]
    fn test_not_soft_hand_no_ace() {
        assert!(!is_soft_hand(&cards(&[HEARTS + KING, QUEEN])));
    }

    #[test]
    fn test_hard_hand_value() {
        assert_eq!(hard_hand_value(&cards(&[ACE, HEARTS + ACE, NINE])), 11);
        assert_eq!(hard_hand_value(&[]), 0);
    }

    #[test]
    fn test_hand_struct_value() {
        let mut hand = Hand::new();
        hand.add_card(Card::from_index(HEARTS + KING));
        hand.add_card(Card::from_index(SEVEN));
        assert_eq!(hand.value(), 17);
        assert_eq!(hand.len(), 2);
        assert!(!hand.is_soft());
    }

    #[test]
    fn test_hand_struct_is_natural() {
        let hand = Hand::from(cards(&[HEARTS + ACE, KING]));
        assert!(hand.is_natural());
        assert!(hand.is_soft());
    }

    #[test]
    fn test_hand_clear() {
        let mut hand = Hand::from(cards(&[TWO, FIVE]));
        hand.clear();
        assert!(hand.is_empty());
        assert_eq!(hand.value(), 0);
    }
}
