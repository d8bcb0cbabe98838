//! Card faces, decks and the difficulty-driven deck builder.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use rand::Rng;

use crate::common::GameError;
use crate::config::{CATALOG, MAX_CARDS};

/// Board difficulty, driving pair count and grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    /// Number of pairs dealt at this difficulty.
    pub fn pairs(self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Hard => 12,
        }
    }

    /// Total cards dealt at this difficulty.
    pub fn card_count(self) -> usize {
        self.pairs() * 2
    }

    /// Fixed column count of the display grid (4x3 or 6x4).
    pub fn columns(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Hard => 6,
        }
    }

    /// Row count of the display grid.
    pub fn rows(self) -> usize {
        self.card_count() / self.columns()
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a difficulty label as entered at the prompt.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("easy") {
            Some(Difficulty::Easy)
        } else if label.eq_ignore_ascii_case("hard") {
            Some(Difficulty::Hard)
        } else {
            None
        }
    }
}

/// Catalog entry: pair identity and display icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardFace {
    id: u8,
    icon: &'static str,
}

impl CardFace {
    /// Create a new face.
    pub const fn new(id: u8, icon: &'static str) -> Self {
        Self { id, icon }
    }

    /// Pair identity of the face.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Display icon of the face.
    pub fn icon(&self) -> &'static str {
        self.icon
    }
}

/// One dealt card. Two cards share a `pair_id` per pair; immutable once dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pair_id: u8,
    icon: &'static str,
}

impl Card {
    pub const fn new(pair_id: u8, icon: &'static str) -> Self {
        Self { pair_id, icon }
    }

    /// Both cards of a pair are dealt from the same face.
    pub fn of(face: CardFace) -> Self {
        Self {
            pair_id: face.id(),
            icon: face.icon(),
        }
    }

    pub fn pair_id(&self) -> u8 {
        self.pair_id
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }
}

/// An ordered, validated card sequence: exactly two cards per pair id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal and shuffle a deck for `difficulty`.
    ///
    /// Selects the first `pairs` catalog faces, duplicates each, then applies
    /// a Fisher–Yates permutation so every ordering is equally likely given a
    /// uniform random source.
    pub fn build<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Result<Self, GameError> {
        let pairs = difficulty.pairs();
        if pairs > CATALOG.len() {
            return Err(GameError::NotEnoughFaces {
                pairs,
                faces: CATALOG.len(),
            });
        }

        let mut cards = Vec::with_capacity(pairs * 2);
        for face in &CATALOG[..pairs] {
            cards.push(Card::of(*face));
            cards.push(Card::of(*face));
        }

        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }

        Self::from_cards(cards)
    }

    /// Build a deck from an explicit card sequence, validating its structure.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        if cards.len() > MAX_CARDS {
            return Err(GameError::DeckTooLarge {
                cards: cards.len(),
                capacity: MAX_CARDS,
            });
        }
        let mut counts = [0u8; 256];
        for card in &cards {
            counts[card.pair_id() as usize] += 1;
        }
        for (pair_id, &count) in counts.iter().enumerate() {
            if count != 0 && count != 2 {
                return Err(GameError::UnpairedCard {
                    pair_id: pair_id as u8,
                });
            }
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs in the deck.
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Card at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}
