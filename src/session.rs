//! Session orchestration: difficulty changes, start/restart and timer guards.

use core::time::Duration;

use rand::rngs::SmallRng;

use crate::common::{FlipOutcome, GameError};
use crate::config::MISMATCH_DELAY_MS;
use crate::deck::Difficulty;
use crate::game::GameEngine;

/// One play session: the state machine plus the RNG that deals its decks.
///
/// The controller owns the session object and threads it through event
/// handlers; nothing here is process-global.
pub struct Session {
    engine: GameEngine,
    rng: SmallRng,
}

impl Session {
    /// Deal a fresh board at `difficulty`. The board starts `Idle`; play
    /// begins on an explicit [`Session::start`].
    pub fn new(difficulty: Difficulty, mut rng: SmallRng) -> Result<Self, GameError> {
        let engine = GameEngine::new(difficulty, &mut rng)?;
        Ok(Self { engine, rng })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Rebuild the board at a new difficulty without activating play.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        self.engine.rebuild(difficulty, &mut self.rng)
    }

    /// Activate play. No-op after the first start, until a restart.
    pub fn start(&mut self) -> bool {
        self.engine.start()
    }

    /// Rebuild at the current difficulty and activate play immediately.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let difficulty = self.engine.difficulty();
        self.engine.rebuild(difficulty, &mut self.rng)?;
        self.engine.start();
        Ok(())
    }

    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        self.engine.flip(index)
    }

    /// Report that the mismatch-revert delay elapsed for `generation`.
    pub fn revert_elapsed(&mut self, generation: u64) -> bool {
        self.engine.revert_mismatch(generation)
    }

    /// Fixed delay before a mismatched pair turns face down.
    pub fn mismatch_delay() -> Duration {
        Duration::from_millis(MISMATCH_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use rand::SeedableRng;

    fn session(difficulty: Difficulty) -> Session {
        Session::new(difficulty, SmallRng::seed_from_u64(17)).unwrap()
    }

    #[test]
    fn difficulty_change_rebuilds_without_activating() {
        let mut session = session(Difficulty::Easy);
        session.start();
        session.change_difficulty(Difficulty::Hard).unwrap();
        assert_eq!(session.engine().phase(), Phase::Idle);
        assert_eq!(session.engine().deck().len(), 24);
        assert_eq!(session.flip(0), FlipOutcome::Ignored);
    }

    #[test]
    fn restart_rebuilds_and_activates() {
        let mut session = session(Difficulty::Easy);
        session.start();
        session.flip(0);
        session.restart().unwrap();
        assert_eq!(session.engine().phase(), Phase::Active);
        assert_eq!(session.engine().moves(), 0);
        assert_eq!(session.engine().flipped().count(), 0);
    }

    #[test]
    fn start_is_disabled_until_restart() {
        let mut session = session(Difficulty::Easy);
        assert!(session.start());
        assert!(!session.start());
        session.restart().unwrap();
        // Restart already activated play; a further start stays a no-op.
        assert!(!session.start());
    }

    #[test]
    fn restart_mid_evaluation_invalidates_the_pending_revert() {
        let mut session = session(Difficulty::Easy);
        session.start();

        // Find a mismatching partner for card 0 on this seeded deck.
        let first = session.engine().deck().get(0).unwrap();
        let other = session
            .engine()
            .deck()
            .iter()
            .enumerate()
            .position(|(i, c)| i != 0 && c.pair_id() != first.pair_id())
            .unwrap();
        session.flip(0);
        let generation = match session.flip(other) {
            FlipOutcome::Mismatch { generation } => generation,
            other => panic!("expected mismatch, got {:?}", other),
        };

        session.restart().unwrap();
        assert!(!session.revert_elapsed(generation));
        assert_eq!(session.engine().phase(), Phase::Active);
        assert_eq!(session.engine().flipped().count(), 0);
        assert_eq!(session.engine().matches(), 0);
    }

    #[test]
    fn mismatch_delay_is_one_second() {
        assert_eq!(Session::mismatch_delay(), Duration::from_millis(1000));
    }
}
