use crate::{Card, SessionError};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 52;

/// Uniform integer source consumed by [`Deck::shuffle`].
pub trait RandomSource {
    /// Returns an index in `0..bound`. `bound` is always at least 2.
    fn below(&mut self, bound: usize) -> usize;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct UniformSource<R>(R);

impl<R: RngCore> UniformSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl UniformSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for UniformSource<R> {
    fn below(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Leaves the deck order untouched. Pair with [`Deck::stacked`] to replay a known deal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShuffle;

impl RandomSource for NoShuffle {
    fn below(&mut self, bound: usize) -> usize {
        bound - 1
    }
}

/// Single 52-card shoe with a draw cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeckRepr")]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Deck {
    pub fn new() -> Self {
        Self {
            cards: (0..DECK_SIZE).map(Card::from_index).collect(),
            next: 0,
        }
    }

    /// A deck whose first cards are `top`, followed by every other card in code order.
    pub fn stacked(top: &[Card]) -> Result<Self, SessionError> {
        let mut seen = [false; DECK_SIZE];
        for card in top {
            let slot = &mut seen[card.code() as usize];
            if *slot {
                return Err(SessionError::DuplicateCard(*card));
            }
            *slot = true;
        }

        let mut cards = top.to_vec();
        cards.extend(
            (0..DECK_SIZE)
                .filter(|&code| !seen[code])
                .map(Card::from_index),
        );
        Ok(Self { cards, next: 0 })
    }

    /// Fisher–Yates over all 52 entries; resets the cursor.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let mut n = self.cards.len();
        while n > 1 {
            let k = rng.below(n);
            n -= 1;
            self.cards.swap(n, k);
        }
        self.next = 0;
    }

    pub fn draw(&mut self) -> Result<Card, SessionError> {
        let card = *self
            .cards
            .get(self.next)
            .ok_or(SessionError::DeckExhausted)?;
        self.next += 1;
        Ok(card)
    }

    pub fn has_cards(&self) -> bool {
        self.next < self.cards.len()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.next)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[derive(Deserialize)]
struct DeckRepr {
    cards: Vec<Card>,
    next: usize,
}

impl TryFrom<DeckRepr> for Deck {
    type Error = SessionError;

    fn try_from(repr: DeckRepr) -> Result<Self, Self::Error> {
        if repr.cards.len() > DECK_SIZE {
            return Err(SessionError::InvalidDeck("more than 52 cards"));
        }
        if repr.next > repr.cards.len() {
            return Err(SessionError::InvalidDeck("cursor past the last card"));
        }
        let mut seen = [false; DECK_SIZE];
        for card in &repr.cards {
            let slot = &mut seen[card.code() as usize];
            if *slot {
                return Err(SessionError::DuplicateCard(*card));
            }
            *slot = true;
        }
        Ok(Self {
            cards: repr.cards,
            next: repr.next,
        })
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
