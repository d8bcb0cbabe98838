//! Turn logic: flipping, match resolution, scoring and the win condition.

use rand::Rng;

use crate::cardset::CardSet;
use crate::common::{FlipOutcome, GameError};
use crate::config::MAX_CARDS;
use crate::deck::{Deck, Difficulty};

/// Card set type used for matched-card tracking.
type Cards = CardSet<u32, MAX_CARDS>;

/// Phase of one play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Board dealt, clicks ignored until an explicit start.
    Idle,
    /// Accepting flips.
    Active,
    /// Two mismatched cards face up, awaiting the revert delay.
    Evaluating,
    /// All pairs matched. Terminal until the next rebuild.
    Won,
}

/// Core state machine owning the deck and all per-session counters.
///
/// The engine is display-free; callers project it through
/// [`crate::board_view`] and drive the mismatch-revert delay
/// themselves. A `generation` counter increments on every rebuild so revert
/// timers scheduled against an old deck become no-ops.
pub struct GameEngine {
    difficulty: Difficulty,
    deck: Deck,
    flipped: [Option<usize>; 2],
    matched: Cards,
    moves: u32,
    matches: u32,
    phase: Phase,
    generation: u64,
}

impl GameEngine {
    /// Create an engine with a freshly shuffled deck, in `Idle`.
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Result<Self, GameError> {
        let deck = Deck::build(difficulty, rng)?;
        Ok(Self::with_deck(difficulty, deck))
    }

    /// Create an engine over an explicit deck. Fixture seam for tests and
    /// scripted runs; the deck is already validated by its constructor.
    pub fn with_deck(difficulty: Difficulty, deck: Deck) -> Self {
        Self {
            difficulty,
            deck,
            flipped: [None, None],
            matched: Cards::new(),
            moves: 0,
            matches: 0,
            phase: Phase::Idle,
            generation: 0,
        }
    }

    /// Replace the deck and reset every counter; phase returns to `Idle` and
    /// the generation advances, invalidating in-flight revert timers.
    pub fn rebuild<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.deck = Deck::build(difficulty, rng)?;
        self.difficulty = difficulty;
        self.flipped = [None, None];
        self.matched.clear();
        self.moves = 0;
        self.matches = 0;
        self.phase = Phase::Idle;
        self.generation += 1;
        Ok(())
    }

    /// `Idle -> Active`. Returns whether the transition happened; a second
    /// start within one session is a no-op.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Idle {
            self.phase = Phase::Active;
            true
        } else {
            false
        }
    }

    /// Flip the card at `index`.
    ///
    /// Anything that cannot be acted on (wrong phase, out-of-range index, a
    /// card already face up or matched) is reported as
    /// [`FlipOutcome::Ignored`] rather than an error. A second flip counts a
    /// move and resolves the pair synchronously; on a mismatch the engine
    /// stays in `Evaluating` until [`GameEngine::revert_mismatch`].
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.phase != Phase::Active {
            return FlipOutcome::Ignored;
        }
        if index >= self.deck.len() {
            return FlipOutcome::Ignored;
        }
        if self.is_flipped(index) || self.is_matched(index) {
            return FlipOutcome::Ignored;
        }

        match self.flipped {
            [None, _] => {
                self.flipped[0] = Some(index);
                FlipOutcome::Revealed
            }
            [Some(_), None] => {
                self.flipped[1] = Some(index);
                self.moves += 1;
                self.phase = Phase::Evaluating;
                self.resolve()
            }
            // Both slots occupied only happens in Evaluating, which the phase
            // guard already rejected.
            [Some(_), Some(_)] => FlipOutcome::Ignored,
        }
    }

    /// Compare the two face-up cards and settle the move.
    fn resolve(&mut self) -> FlipOutcome {
        let (first, second) = match self.flipped {
            [Some(a), Some(b)] => (a, b),
            _ => return FlipOutcome::Ignored,
        };
        let (card_a, card_b) = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => (a, b),
            _ => return FlipOutcome::Ignored,
        };

        if card_a.pair_id() == card_b.pair_id() {
            // Indices were bounds-checked on flip, inserts cannot fail.
            let _ = self.matched.insert(first);
            let _ = self.matched.insert(second);
            self.matches += 1;
            self.flipped = [None, None];
            let won = self.matches as usize == self.deck.pair_count();
            self.phase = if won { Phase::Won } else { Phase::Active };
            FlipOutcome::Matched { won }
        } else {
            FlipOutcome::Mismatch {
                generation: self.generation,
            }
        }
    }

    /// Turn a mismatched pair face down after the revert delay.
    ///
    /// Applies only while still `Evaluating` and only for the generation the
    /// mismatch was reported against; a timer that fires after a rebuild
    /// finds a stale generation and does nothing. Returns whether the revert
    /// was applied.
    pub fn revert_mismatch(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != Phase::Evaluating {
            return false;
        }
        self.flipped = [None, None];
        self.phase = Phase::Active;
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Moves completed (pairs of flips).
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs matched so far.
    pub fn matches(&self) -> u32 {
        self.matches
    }

    /// Deck generation, advanced on every rebuild.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the card at `index` is currently face up mid-move.
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.iter().any(|f| *f == Some(index))
    }

    /// Whether the card at `index` belongs to a matched pair.
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.contains(index).unwrap_or(false)
    }

    /// Indices currently face up mid-move, in flip order.
    pub fn flipped(&self) -> impl Iterator<Item = usize> + '_ {
        self.flipped.iter().flatten().copied()
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }
}
