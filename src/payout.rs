use crate::{Disposition, Outcome, PayoutRatio, WagerHolder};
use serde::{Deserialize, Serialize};

/// Result of paying out one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Slot count before payout
    pub stake: u32,
    /// Total owed to the player after payout
    pub total: u64,
    /// Left in the slot
    pub kept: u32,
    /// Deposited outside the slot
    pub overflow: u64,
}

/// Stack the player is owed for `outcome` on a stake of `stack`.
pub fn settle_stack(outcome: Outcome, stack: u32, blackjack: PayoutRatio) -> u64 {
    let stake = stack as u64;
    match outcome.disposition() {
        Disposition::Blackjack => stake.saturating_add(blackjack.calculate_payout(stake)),
        Disposition::EvenMoney => stake * 2,
        Disposition::Returned => stake,
        Disposition::Forfeit => 0,
    }
}

/// Pay `outcome` into `holder`. Anything past the slot's max stack is deposited in
/// max-size chunks until the remainder fits.
pub fn apply_payout<W: WagerHolder + ?Sized>(
    holder: &mut W,
    outcome: Outcome,
    blackjack: PayoutRatio,
) -> Settlement {
    let stake = holder.stack_count();
    let total = settle_stack(outcome, stake, blackjack);

    if total == 0 {
        holder.clear_to_empty();
        return Settlement {
            stake,
            total,
            kept: 0,
            overflow: 0,
        };
    }
    if total == stake as u64 {
        return Settlement {
            stake,
            total,
            kept: stake,
            overflow: 0,
        };
    }

    let chunk = match holder.max_stack_size() {
        0 => u32::MAX,
        max => max,
    };
    let mut remaining = total;
    let mut overflow = 0;
    while remaining > chunk as u64 {
        holder.deposit_overflow(chunk);
        remaining -= chunk as u64;
        overflow += chunk as u64;
    }
    // remaining <= chunk, which is a u32
    let kept = remaining as u32;
    holder.set_stack(kept);

    Settlement {
        stake,
        total,
        kept,
        overflow,
    }
}
