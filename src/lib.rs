mod animator;
mod card;
mod config;
mod dealer;
mod deck;
mod error;
mod hand;
mod layout;
mod outcome;
mod payout;
mod rules;
mod session;
mod strategy;
mod wager;

pub use animator::{DealAnimator, DealTask, HoleCardReveal, Landing};
pub use card::Card;
pub use config::TableConfig;
pub use dealer::{DealerPolicy, DrawPacer};
pub use deck::{Deck, NoShuffle, RandomSource, UniformSource, DECK_SIZE};
pub use error::{ConfigError, SessionError};
pub use hand::{
    calculate_hand_value, hard_hand_value, is_busted, is_natural, is_soft_hand, Hand, Seat,
};
pub use layout::{Position, TableLayout};
pub use outcome::{DealerDisplay, Disposition, Outcome};
pub use payout::{apply_payout, settle_stack, Settlement};
pub use rules::{PayoutRatio, TableRules};
pub use session::{RoundState, Session, SessionEvent};
pub use strategy::{advise, Move};
pub use wager::{StackSlot, WagerHolder};
