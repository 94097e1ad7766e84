use crate::hand::{calculate_hand_value, is_soft_hand};
use crate::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Hit,
    Stand,
}

/// Basic-strategy hit/stand decision against the dealer's up card
pub fn advise(player_cards: &[Card], dealer_up_card: Card) -> Move {
    let player_value = calculate_hand_value(player_cards);
    let dealer_value = dealer_up_card.value();

    if is_soft_hand(player_cards) {
        if player_value >= 19 {
            Move::Stand
        } else if player_value == 18 {
            if dealer_value >= 9 {
                Move::Hit
            } else {
                Move::Stand
            }
        } else {
            Move::Hit
        }
    } else if player_value >= 17 {
        Move::Stand
    } else if (13..=16).contains(&player_value) {
        if (2..=6).contains(&dealer_value) {
            Move::Stand
        } else {
            Move::Hit
        }
    } else if player_value == 12 {
        if (4..=6).contains(&dealer_value) {
            Move::Stand
        } else {
            Move::Hit
        }
    } else {
        Move::Hit
    }
}
