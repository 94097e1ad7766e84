use crate::SessionError;
use serde::{Deserialize, Serialize};

/// Blackjack payout multiplier as a ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRatio {
    pub numerator: u16,
    pub denominator: u16,
}

impl PayoutRatio {
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };
    pub const SIX_TO_FIVE: Self = Self {
        numerator: 6,
        denominator: 5,
    };
    pub const ONE_TO_ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    pub fn new(numerator: u16, denominator: u16) -> Result<Self, SessionError> {
        if denominator == 0 {
            return Err(SessionError::InvalidRules("payout denominator cannot be zero"));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Winnings on top of the stake, rounded down.
    pub fn calculate_payout(&self, bet: u64) -> u64 {
        let winnings = (bet as u128 * self.numerator as u128) / self.denominator as u128;
        u64::try_from(winnings).unwrap_or(u64::MAX)
    }
}

/// Table rules and pacing. Progress speeds are the fraction of an animation completed per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRules {
    /// Dealer hits on soft 17
    pub dealer_hits_soft_17: bool,

    /// Payout for a player natural (commonly 3:2)
    pub blackjack_payout: PayoutRatio,

    /// Progress added to the in-flight card each tick
    pub deal_speed: f32,

    /// Progress added to the hole-card flip each tick
    pub reveal_speed: f32,

    /// Ticks the dealer waits between draws
    pub dealer_draw_delay: u32,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            dealer_hits_soft_17: true,
            blackjack_payout: PayoutRatio::THREE_TO_TWO,
            deal_speed: 0.05,
            reveal_speed: 0.15,
            dealer_draw_delay: 60,
        }
    }
}

impl TableRules {
    /// Every animation completes in one tick and the dealer never waits.
    pub fn instant() -> Self {
        Self {
            deal_speed: 1.0,
            reveal_speed: 1.0,
            dealer_draw_delay: 0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        let in_range = |speed: f32| speed > 0.0 && speed <= 1.0;
        if !in_range(self.deal_speed) {
            return Err(SessionError::InvalidRules("deal_speed must be in (0, 1]"));
        }
        if !in_range(self.reveal_speed) {
            return Err(SessionError::InvalidRules("reveal_speed must be in (0, 1]"));
        }
        if self.blackjack_payout.denominator == 0 {
            return Err(SessionError::InvalidRules("payout denominator cannot be zero"));
        }
        Ok(())
    }
}
