use std::collections::BTreeMap;

use pairup::{Deck, Difficulty, FlipOutcome, GameEngine, Phase};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn seeded_game_plays_to_a_win() {
    let mut rng = SmallRng::seed_from_u64(1234);
    let mut engine = GameEngine::new(Difficulty::Hard, &mut rng).unwrap();
    engine.start();

    let mut by_id: BTreeMap<u8, Vec<usize>> = BTreeMap::new();
    for (index, card) in engine.deck().iter().enumerate() {
        by_id.entry(card.pair_id()).or_default().push(index);
    }

    for indices in by_id.values() {
        assert_eq!(indices.len(), 2);
        assert_eq!(engine.flip(indices[0]), FlipOutcome::Revealed);
        match engine.flip(indices[1]) {
            FlipOutcome::Matched { .. } => {}
            other => panic!("expected a match, got {:?}", other),
        }
    }

    assert_eq!(engine.phase(), Phase::Won);
    assert_eq!(engine.moves(), 12);
    assert_eq!(engine.matches(), 12);
}

proptest! {
    #[test]
    fn built_decks_hold_each_pair_exactly_twice(seed in any::<u64>(), hard in any::<bool>()) {
        let difficulty = if hard { Difficulty::Hard } else { Difficulty::Easy };
        let mut rng = SmallRng::seed_from_u64(seed);
        let deck = Deck::build(difficulty, &mut rng).unwrap();

        prop_assert_eq!(deck.len(), difficulty.card_count());
        let mut counts = [0usize; 256];
        for card in deck.iter() {
            counts[card.pair_id() as usize] += 1;
        }
        prop_assert!(counts.iter().all(|&c| c == 0 || c == 2));
        prop_assert_eq!(
            counts.iter().filter(|&&c| c == 2).count(),
            difficulty.pairs()
        );
    }

    #[test]
    fn shuffle_preserves_the_card_multiset(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let deck = Deck::build(Difficulty::Hard, &mut rng).unwrap();

        let mut shuffled: Vec<(u8, &'static str)> =
            deck.iter().map(|c| (c.pair_id(), c.icon())).collect();
        shuffled.sort_unstable();

        // An unshuffled build of the same difficulty carries the same cards.
        let mut unshuffled: Vec<(u8, &'static str)> = pairup::CATALOG
            .iter()
            .flat_map(|f| [(f.id(), f.icon()), (f.id(), f.icon())])
            .collect();
        unshuffled.sort_unstable();

        prop_assert_eq!(shuffled, unshuffled);
    }

    #[test]
    fn arbitrary_flip_sequences_preserve_invariants(
        seed in any::<u64>(),
        flips in prop::collection::vec(0usize..30, 0..200),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new(Difficulty::Easy, &mut rng).unwrap();
        engine.start();

        for index in flips {
            let moves_before = engine.moves();
            match engine.flip(index) {
                // A completed pair of flips counts exactly one move.
                FlipOutcome::Matched { .. } => {
                    prop_assert_eq!(engine.moves(), moves_before + 1);
                }
                FlipOutcome::Mismatch { generation } => {
                    prop_assert_eq!(engine.moves(), moves_before + 1);
                    prop_assert_eq!(engine.phase(), Phase::Evaluating);
                    // Both cards stay up and disjoint until the revert lands,
                    // and no flip is accepted in between.
                    let up: Vec<usize> = engine.flipped().collect();
                    prop_assert_eq!(up.len(), 2);
                    prop_assert_ne!(up[0], up[1]);
                    prop_assert_eq!(engine.flip(index), FlipOutcome::Ignored);
                    prop_assert!(engine.revert_mismatch(generation));
                }
                FlipOutcome::Revealed | FlipOutcome::Ignored => {
                    prop_assert_eq!(engine.moves(), moves_before);
                }
            }

            let flipped: Vec<usize> = engine.flipped().collect();
            prop_assert!(flipped.len() <= 2);
            for &f in &flipped {
                prop_assert!(!engine.is_matched(f));
            }
            if flipped.len() == 2 {
                prop_assert_ne!(flipped[0], flipped[1]);
            }
            prop_assert!(engine.matches() as usize * 2 <= engine.deck().len());
            prop_assert_eq!(
                engine.is_won(),
                engine.matches() as usize == engine.deck().pair_count()
            );
        }
    }
}
