use crate::SessionError;
use serde::{Deserialize, Serialize};
use std::fmt;

const RANK_LABELS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];
const SUIT_LABELS: [&str; 4] = ["♠", "♥", "♦", "♣"];

/// A card code in `0..52`. Rank is `code % 13` (0 is the Ace), suit is `code / 13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    pub fn new(code: u8) -> Result<Self, SessionError> {
        if (code as usize) < crate::DECK_SIZE {
            Ok(Self(code))
        } else {
            Err(SessionError::InvalidCard(code))
        }
    }

    pub fn from_rank_suit(rank: u8, suit: u8) -> Result<Self, SessionError> {
        if rank >= 13 || suit >= 4 {
            return Err(SessionError::InvalidCard(suit.saturating_mul(13).saturating_add(rank)));
        }
        Ok(Self(suit * 13 + rank))
    }

    pub fn from_index(index: usize) -> Self {
        if index >= crate::DECK_SIZE {
            panic!("Invalid card index: {}", index);
        }
        Self(index as u8)
    }

    pub fn code(self) -> u8 {
        self.0
    }

    pub fn rank(self) -> u8 {
        self.0 % 13
    }

    pub fn suit(self) -> u8 {
        self.0 / 13
    }

    pub fn is_ace(self) -> bool {
        self.rank() == 0
    }

    /// Blackjack value with the Ace counted high.
    pub fn value(self) -> u8 {
        match self.rank() {
            0 => 11,
            rank if rank >= 9 => 10, // Ten, Jack, Queen, King
            rank => rank + 1,
        }
    }

    /// Value with the Ace counted as 1.
    pub fn face_value(self) -> u8 {
        if self.is_ace() {
            1
        } else {
            self.value()
        }
    }

    pub fn to_display(self) -> String {
        format!(
            "{}{}",
            RANK_LABELS[self.rank() as usize],
            SUIT_LABELS[self.suit() as usize]
        )
    }
}

impl TryFrom<u8> for Card {
    type Error = SessionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_and_suit_from_code() {
        let card = Card::from_index(25);
        assert_eq!(card.rank(), 12);
        assert_eq!(card.suit(), 1);
        assert_eq!(card.to_display(), "K♥");
    }

    #[test]
    fn test_values() {
        assert_eq!(Card::from_index(0).value(), 11);
        assert_eq!(Card::from_index(1).value(), 2);
        assert_eq!(Card::from_index(8).value(), 9);
        assert_eq!(Card::from_index(9).value(), 10);
        assert_eq!(Card::from_index(12).value(), 10);
        assert_eq!(Card::from_index(39).value(), 11);
    }

    #[test]
    fn test_face_value_counts_ace_low() {
        assert_eq!(Card::from_index(13).face_value(), 1);
        assert_eq!(Card::from_index(23).face_value(), 10);
        assert_eq!(Card::from_index(5).face_value(), 6);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Card::new(52), Err(SessionError::InvalidCard(52)));
        assert!(Card::new(51).is_ok());
    }

    #[test]
    fn test_from_rank_suit() {
        let card = Card::from_rank_suit(9, 3).unwrap();
        assert_eq!(card.code(), 48);
        assert_eq!(card.to_string(), "10♣");
        assert!(Card::from_rank_suit(13, 0).is_err());
        assert!(Card::from_rank_suit(0, 4).is_err());
    }

    #[test]
    #[should_panic(expected = "Invalid card index")]
    fn test_from_index_panics_past_deck() {
        Card::from_index(52);
    }

    #[test]
    #[should_panic(expected = "Invalid card index")]
    fn test_from_index_does_not_wrap() {
        // 261 would truncate to code 5
        Card::from_index(261);
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&Card::from_index(14)).unwrap();
        assert_eq!(json, "14");
        let card: Card = serde_json::from_str("51").unwrap();
        assert_eq!(card.code(), 51);
        assert!(serde_json::from_str::<Card>("60").is_err());
    }
}
