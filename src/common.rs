//! Common types for the memory game: game errors and flip outcomes.

use crate::cardset::CardSetError;

/// Result of a flip attempt against the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The flip was a no-op: wrong phase, repeated index, matched card or an
    /// index outside the deck.
    Ignored,
    /// First card of a move turned face up.
    Revealed,
    /// Second card completed a matching pair; `won` is set when it was the
    /// final pair of the deck.
    Matched { won: bool },
    /// Second card did not match. Both cards stay face up until the caller
    /// reports the revert delay elapsed for this deck `generation`.
    Mismatch { generation: u64 },
}

/// Errors returned by deck and engine construction.
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    /// Underlying card set error (e.g., capacity or index violation).
    CardSet(CardSetError),
    /// The face catalog has fewer unique faces than the requested pair count.
    NotEnoughFaces { pairs: usize, faces: usize },
    /// A deck exceeds the fixed card capacity.
    DeckTooLarge { cards: usize, capacity: usize },
    /// A fixture deck does not hold exactly two cards for this pair id.
    UnpairedCard { pair_id: u8 },
}

impl From<CardSetError> for GameError {
    fn from(err: CardSetError) -> Self {
        GameError::CardSet(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::CardSet(e) => write!(f, "Card set error: {}", e),
            GameError::NotEnoughFaces { pairs, faces } => {
                write!(f, "Catalog holds {} faces but {} pairs requested", faces, pairs)
            }
            GameError::DeckTooLarge { cards, capacity } => {
                write!(f, "Deck of {} cards exceeds capacity {}", cards, capacity)
            }
            GameError::UnpairedCard { pair_id } => {
                write!(f, "Pair id {} does not appear exactly twice", pair_id)
            }
        }
    }
}
