use crate::hand::{calculate_hand_value, is_soft_hand};
use crate::{Card, TableRules};
use serde::{Deserialize, Serialize};

/// Dealer drawing rule: hit 16 or less, stand on hard 17 and anything above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerPolicy {
    pub hits_soft_17: bool,
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self { hits_soft_17: true }
    }
}

impl DealerPolicy {
    pub fn from_rules(rules: &TableRules) -> Self {
        Self {
            hits_soft_17: rules.dealer_hits_soft_17,
        }
    }

    pub fn should_draw(&self, dealer_hand: &[Card]) -> bool {
        let value = calculate_hand_value(dealer_hand);
        if value >= 17 {
            value == 17 && self.hits_soft_17 && is_soft_hand(dealer_hand)
        } else {
            true
        }
    }
}

/// Tick countdown between consecutive dealer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawPacer {
    delay: u32,
    remaining: u32,
}

impl DrawPacer {
    pub fn new(delay: u32) -> Self {
        Self {
            delay,
            remaining: 0,
        }
    }

    /// Restart the countdown after a draw.
    pub fn arm(&mut self) {
        self.remaining = self.delay;
    }

    /// Spends one tick of the countdown; true once it has run out.
    pub fn ready(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            false
        } else {
            true
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn clear(&mut self) {
        self.remaining = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(codes: &[usize]) -> Vec<Card> {
        codes.iter().map(|&c| Card::from_index(c)).collect()
    }

    #[test]
    fn test_draws_on_16() {
        assert!(DealerPolicy::default().should_draw(&cards(&[9, 5])));
    }

    #[test]
    fn test_stands_on_hard_17() {
        assert!(!DealerPolicy::default().should_draw(&cards(&[9, 6])));
        assert!(!DealerPolicy::default().should_draw(&cards(&[0, 5, 9])));
    }

    #[test]
    fn test_hits_soft_17() {
        assert!(DealerPolicy::default().should_draw(&cards(&[0, 5])));
    }

    #[test]
    fn test_stands_soft_17_when_disabled() {
        let policy = DealerPolicy {
            hits_soft_17: false,
        };
        assert!(!policy.should_draw(&cards(&[0, 5])));
    }

    #[test]
    fn test_stands_on_18_and_soft_18() {
        assert!(!DealerPolicy::default().should_draw(&cards(&[9, 7])));
        assert!(!DealerPolicy::default().should_draw(&cards(&[0, 6])));
    }

    #[test]
    fn test_from_rules() {
        let rules = TableRules {
            dealer_hits_soft_17: false,
            ..TableRules::default()
        };
        assert!(!DealerPolicy::from_rules(&rules).hits_soft_17);
    }

    #[test]
    fn test_pacer_counts_down() {
        let mut pacer = DrawPacer::new(2);
        assert!(pacer.ready());
        pacer.arm();
        assert_eq!(pacer.remaining(), 2);
        assert!(!pacer.ready());
        assert!(!pacer.ready());
        assert!(pacer.ready());
    }

    #[test]
    fn test_zero_delay_is_always_ready() {
        let mut pacer = DrawPacer::new(0);
        pacer.arm();
        assert!(pacer.ready());
    }
}
