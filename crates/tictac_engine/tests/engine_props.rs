//! Property tests over random play sequences.

use proptest::prelude::*;
use tictac_engine::rules::{is_draw, winning_line};
use tictac_engine::{GameEngine, GamePhase, Outcome, Player};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every accepted or rejected move keeps the board consistent.
    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        clicks in prop::collection::vec((0usize..4, 0usize..4), 0..30),
    ) {
        let mut engine = GameEngine::seeded(seed);
        engine.start_game();

        for (row, col) in clicks {
            let before = engine.snapshot();
            match engine.try_play(row, col) {
                Err(_) => prop_assert_eq!(engine.snapshot(), before),
                Ok(turn) => {
                    let added = engine.moves() - before.moves;
                    if turn.reply.is_some() {
                        prop_assert_eq!(added, 2);
                    } else {
                        prop_assert_eq!(added, 1);
                        prop_assert!(engine.show_end());
                    }
                }
            }

            prop_assert_eq!(engine.snapshot().validate(), Ok(()));

            let board = engine.board();
            let xs = board.count(Player::X);
            let os = board.count(Player::O);
            prop_assert!(xs == os || xs == os + 1);
            prop_assert_eq!(board.marks(), engine.moves());

            let decided = winning_line(board).is_some() || board.is_full();
            prop_assert_eq!(engine.show_end(), decided);
            match engine.outcome() {
                Outcome::Ongoing => prop_assert_eq!(engine.phase(), GamePhase::InProgress),
                Outcome::Draw => prop_assert!(is_draw(board)),
                Outcome::Win { player, line } => {
                    for c in line {
                        prop_assert_eq!(board.get(c).owner(), Some(player));
                    }
                }
            }
        }
    }
}
