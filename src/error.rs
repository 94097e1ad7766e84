use crate::Card;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Deck exhausted: all 52 cards have been drawn")]
    DeckExhausted,
    #[error("Cannot start: the bet slot is empty")]
    InvalidWager,
    #[error("Session busy: a card is still in motion")]
    Busy,
    #[error("A round is already in progress")]
    RoundInProgress,
    #[error("Not the player's turn")]
    NotPlayerTurn,
    #[error("Invalid card code: {0}")]
    InvalidCard(u8),
    #[error("Duplicate card in stacked deck: {0}")]
    DuplicateCard(Card),
    #[error("Invalid deck: {0}")]
    InvalidDeck(&'static str),
    #[error("Invalid rules: {0}")]
    InvalidRules(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Config read error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Rules(#[from] SessionError),
}
