use serde::{Deserialize, Serialize};
use std::fmt;

/// How a round ended. Set exactly once per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerBlackjack,
    DealerBlackjackLoss,
    PushBlackjack,
    PlayerWin,
    DealerWin,
    Push,
    PlayerBust,
    DealerBust,
}

/// What happens to the wager for an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    /// Stake plus the blackjack ratio
    Blackjack,
    /// Stake doubled
    EvenMoney,
    /// Stake left untouched
    Returned,
    /// Stake lost
    Forfeit,
}

impl Outcome {
    /// Showdown when neither side busted or had a natural.
    pub fn from_totals(player: u8, dealer: u8) -> Self {
        if dealer > 21 {
            Outcome::DealerBust
        } else if player > dealer {
            Outcome::PlayerWin
        } else if player < dealer {
            Outcome::DealerWin
        } else {
            Outcome::Push
        }
    }

    pub fn disposition(self) -> Disposition {
        match self {
            Outcome::PlayerBlackjack => Disposition::Blackjack,
            Outcome::PlayerWin | Outcome::DealerBust => Disposition::EvenMoney,
            Outcome::Push | Outcome::PushBlackjack => Disposition::Returned,
            Outcome::DealerWin | Outcome::PlayerBust | Outcome::DealerBlackjackLoss => {
                Disposition::Forfeit
            }
        }
    }

    pub fn is_player_win(self) -> bool {
        matches!(
            self.disposition(),
            Disposition::Blackjack | Disposition::EvenMoney
        )
    }

    pub fn is_push(self) -> bool {
        self.disposition() == Disposition::Returned
    }

    /// Localization key looked up by the host.
    pub fn status_key(self) -> &'static str {
        match self {
            Outcome::PlayerBlackjack => "PlayerBlackjack",
            Outcome::DealerBlackjackLoss => "DealerBlackjack",
            Outcome::PushBlackjack => "PushBlackjack",
            Outcome::PlayerWin => "PlayerWin",
            Outcome::DealerWin => "DealerWin",
            Outcome::Push => "Push",
            Outcome::PlayerBust => "PlayerBust",
            Outcome::DealerBust => "DealerBust",
        }
    }

    /// English fallback when the host has no translation.
    pub fn default_text(self) -> &'static str {
        match self {
            Outcome::PlayerBlackjack => "Blackjack! You win!",
            Outcome::DealerBlackjackLoss => "Dealer Blackjack. You lose...",
            Outcome::PushBlackjack => "Push. Player and Dealer tied Blackjack.",
            Outcome::PlayerWin => "You win!",
            Outcome::DealerWin => "Dealer wins.",
            Outcome::Push => "Push.",
            Outcome::PlayerBust => "Bust! You lose...",
            Outcome::DealerBust => "Dealer busts! You win!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_text())
    }
}

/// Dealer total as the table shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerDisplay {
    /// Fewer than two dealer cards have landed
    Pending,
    /// Hole card still hidden; carries the up card's value
    Partial(u8),
    Full(u8),
}

impl fmt::Display for DealerDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealerDisplay::Pending => f.write_str("..."),
            DealerDisplay::Partial(up) => write!(f, "{up} + ???"),
            DealerDisplay::Full(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_totals() {
        assert_eq!(Outcome::from_totals(18, 22), Outcome::DealerBust);
        assert_eq!(Outcome::from_totals(20, 19), Outcome::PlayerWin);
        assert_eq!(Outcome::from_totals(18, 21), Outcome::DealerWin);
        assert_eq!(Outcome::from_totals(19, 19), Outcome::Push);
    }

    #[test]
    fn test_dispositions() {
        assert_eq!(Outcome::PlayerBlackjack.disposition(), Disposition::Blackjack);
        assert_eq!(Outcome::DealerBust.disposition(), Disposition::EvenMoney);
        assert_eq!(Outcome::PushBlackjack.disposition(), Disposition::Returned);
        assert_eq!(Outcome::DealerBlackjackLoss.disposition(), Disposition::Forfeit);
        assert_eq!(Outcome::PlayerBust.disposition(), Disposition::Forfeit);
    }

    #[test]
    fn test_classification() {
        assert!(Outcome::PlayerWin.is_player_win());
        assert!(!Outcome::Push.is_player_win());
        assert!(Outcome::PushBlackjack.is_push());
        assert!(!Outcome::DealerWin.is_push());
    }

    #[test]
    fn test_dealer_display_text() {
        assert_eq!(DealerDisplay::Pending.to_string(), "...");
        assert_eq!(DealerDisplay::Partial(10).to_string(), "10 + ???");
        assert_eq!(DealerDisplay::Full(19).to_string(), "19");
    }

    #[test]
    fn test_status_keys() {
        assert_eq!(Outcome::DealerBlackjackLoss.status_key(), "DealerBlackjack");
        assert_eq!(Outcome::PlayerBlackjack.to_string(), "Blackjack! You win!");
    }
}
