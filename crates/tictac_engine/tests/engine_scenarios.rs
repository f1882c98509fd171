//! End-to-end scenarios for the game engine.

use tictac_engine::Cell::{Empty as E, MarkO as O, MarkX as X};
use tictac_engine::{
    Board, Coord, GameEngine, GamePhase, MoveError, MoveKind, Outcome, Player, RandomChoice,
    Snapshot, SnapshotError,
};

/// Fails the test if the random fallback is reached.
struct NoRandom;

impl RandomChoice for NoRandom {
    fn choose_index(&mut self, _len: usize) -> usize {
        panic!("random fallback should not be consulted");
    }
}

fn coord(row: usize, col: usize) -> Coord {
    Coord::new(row, col).expect("coordinate on board")
}

/// Engine in play with `rows` on the board and X to move.
fn human_to_move(rows: [[tictac_engine::Cell; 3]; 3]) -> GameEngine<NoRandom> {
    let board = Board::from_rows(rows);
    let snapshot = Snapshot {
        board,
        player: Player::X,
        phase: GamePhase::InProgress,
        outcome: Outcome::Ongoing,
        moves: board.marks(),
    };
    GameEngine::from_snapshot(snapshot, NoRandom).expect("consistent snapshot")
}

#[test]
fn test_start_state() {
    let mut engine = GameEngine::seeded(3);
    engine.start_game();
    engine.play(0, 0);
    engine.start();

    assert_eq!(engine.phase(), GamePhase::Start);
    assert_eq!(engine.player(), Player::X);
    assert_eq!(engine.outcome(), Outcome::Ongoing);
    assert_eq!(*engine.board(), Board::new());
}

#[test]
fn test_first_move_gets_one_reply() {
    for seed in 0..20 {
        let mut engine = GameEngine::seeded(seed);
        engine.start_game();
        let turn = engine.try_play(0, 0).expect("legal move");

        assert!(engine.show_x(0, 0));
        assert_eq!(engine.board().count(Player::X), 1);
        assert_eq!(engine.board().count(Player::O), 1);
        let reply = turn.reply.expect("computer replies");
        assert_ne!(reply.coord, coord(0, 0));
        assert_eq!(reply.kind, MoveKind::Random);
        assert!(engine.show_o(reply.coord.row(), reply.coord.col()));
        assert_eq!(engine.phase(), GamePhase::InProgress);
        assert_eq!(engine.outcome(), Outcome::Ongoing);
    }
}

#[test]
fn test_human_completes_top_row() {
    // X X . / O O . / . . .
    let mut engine = human_to_move([[X, X, E], [O, O, E], [E, E, E]]);
    let turn = engine.try_play(0, 2).expect("legal move");

    let line = [coord(0, 0), coord(0, 1), coord(0, 2)];
    assert_eq!(turn.reply, None);
    assert_eq!(
        engine.outcome(),
        Outcome::Win {
            player: Player::X,
            line
        }
    );
    assert_eq!(engine.phase(), GamePhase::Ended);
    assert!(engine.show_end());
    assert_eq!(engine.board().count(Player::O), 2);
    for c in Coord::ALL {
        assert_eq!(engine.show_victory(c.row(), c.col()), line.contains(&c));
    }
}

#[test]
fn test_computer_wins_instead_of_blocking() {
    // X . . / O O . / X . .
    let mut engine = human_to_move([[X, E, E], [O, O, E], [X, E, E]]);
    let turn = engine.try_play(2, 2).expect("legal move");

    // Both (1,2) wins for O and (2,1) blocks X; the win comes first.
    let reply = turn.reply.expect("computer replies");
    assert_eq!(reply.coord, coord(1, 2));
    assert_eq!(reply.kind, MoveKind::Win);
    assert_eq!(engine.outcome().winner(), Some(Player::O));
    assert_eq!(
        engine.outcome().line(),
        Some([coord(1, 0), coord(1, 1), coord(1, 2)])
    );
    assert!(engine.show_end());
}

#[test]
fn test_computer_blocks_threat() {
    // X . . / . O . / . . .
    let mut engine = human_to_move([[X, E, E], [E, O, E], [E, E, E]]);
    let turn = engine.try_play(2, 0).expect("legal move");

    let reply = turn.reply.expect("computer replies");
    assert_eq!(reply.coord, coord(1, 0));
    assert_eq!(reply.kind, MoveKind::Block);
    assert!(engine.show_o(1, 0));
    assert_eq!(engine.outcome(), Outcome::Ongoing);
    assert_eq!(engine.player(), Player::X);
    assert_eq!(engine.moves(), 4);
}

#[test]
fn test_last_cell_draws() {
    // X O X / O X X / O . O
    let mut engine = human_to_move([[X, O, X], [O, X, X], [O, E, O]]);
    let turn = engine.try_play(2, 1).expect("legal move");

    assert_eq!(turn.reply, None);
    assert_eq!(turn.outcome, Outcome::Draw);
    assert_eq!(engine.phase(), GamePhase::Ended);
    assert!(engine.board().is_full());
    assert!(Coord::ALL.iter().all(|c| !engine.show_victory(c.row(), c.col())));
}

#[test]
fn test_moves_after_end_are_ignored() {
    let mut engine = human_to_move([[X, X, E], [O, O, E], [E, E, E]]);
    engine.play(0, 2);
    let before = engine.snapshot();

    assert_eq!(
        engine.try_play(2, 2),
        Err(MoveError::NotInProgress(GamePhase::Ended))
    );
    engine.play(2, 2);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_new_game_from_ended() {
    let mut engine = human_to_move([[X, X, E], [O, O, E], [E, E, E]]);
    engine.play(0, 2);
    assert!(engine.show_end());

    engine.new_game();
    assert_eq!(engine.phase(), GamePhase::InProgress);
    assert_eq!(*engine.board(), Board::new());
    assert_eq!(engine.outcome(), Outcome::Ongoing);
    assert_eq!(engine.player(), Player::X);
    assert!(Coord::ALL.iter().all(|c| !engine.show_victory(c.row(), c.col())));
}

#[test]
fn test_start_game_ignored_after_end() {
    let mut engine = human_to_move([[X, X, E], [O, O, E], [E, E, E]]);
    engine.play(0, 2);
    engine.start_game();
    assert_eq!(engine.phase(), GamePhase::Ended);
}

/// Plays the first empty cell until the game ends.
fn play_out(seed: u64) -> Vec<Snapshot> {
    let mut engine = GameEngine::seeded(seed);
    engine.start_game();
    let mut history = vec![engine.snapshot()];
    while engine.show_board() {
        let next = engine
            .board()
            .empty_cells()
            .next()
            .expect("board in play has an empty cell");
        engine.play(next.row(), next.col());
        history.push(engine.snapshot());
    }
    history
}

#[test]
fn test_seeded_games_replay() {
    for seed in [0, 1, 99, u64::MAX] {
        let first = play_out(seed);
        let second = play_out(seed);
        assert_eq!(first, second);
        let last = first.last().expect("at least one snapshot");
        assert_eq!(last.phase, GamePhase::Ended);
        assert!(last.outcome.is_decided());
    }
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = human_to_move([[X, X, E], [O, O, E], [E, E, E]]);
    engine.play(0, 2);
    let json = serde_json::to_value(engine.snapshot()).expect("snapshot serializes");
    assert_eq!(json["phase"], "Ended");
    assert_eq!(json["moves"], 5);
    assert_eq!(
        json["outcome"]["Win"]["line"],
        serde_json::json!([[0, 0], [0, 1], [0, 2]])
    );
    let back: Snapshot = serde_json::from_value(json).expect("snapshot deserializes");
    assert_eq!(back, engine.snapshot());
}

/// Snapshot of a board in play with X to move.
fn in_play(rows: [[tictac_engine::Cell; 3]; 3]) -> Snapshot {
    let board = Board::from_rows(rows);
    Snapshot {
        board,
        player: Player::X,
        phase: GamePhase::InProgress,
        outcome: Outcome::Ongoing,
        moves: board.marks(),
    }
}

#[test]
fn test_snapshot_move_count_must_match_marks() {
    // X O X / O X X / O . O
    let mut snapshot = in_play([[X, O, X], [O, X, X], [O, E, O]]);
    snapshot.moves = 0;

    let result = GameEngine::from_snapshot(snapshot, NoRandom);
    assert_eq!(
        result.err(),
        Some(SnapshotError::MoveCount { moves: 0, marks: 8 })
    );
}

#[test]
fn test_snapshot_with_huge_move_count_rejected() {
    let mut snapshot = in_play([[E; 3]; 3]);
    snapshot.moves = usize::MAX;
    let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
    let restored: Snapshot = serde_json::from_str(&json).expect("snapshot deserializes");

    let result = GameEngine::from_snapshot(restored, NoRandom);
    assert!(matches!(
        result.err(),
        Some(SnapshotError::MoveCount { marks: 0, .. })
    ));
}

#[test]
fn test_snapshot_mark_balance_and_turn() {
    // X X . / . . . / . . .
    let snapshot = in_play([[X, X, E], [E; 3], [E; 3]]);
    assert_eq!(
        snapshot.validate(),
        Err(SnapshotError::Unbalanced { x: 2, o: 0 })
    );

    // X . . / . . . / . . .  with X to move again
    let snapshot = in_play([[X, E, E], [E; 3], [E; 3]]);
    assert_eq!(
        snapshot.validate(),
        Err(SnapshotError::WrongPlayer {
            expected: Player::O,
            found: Player::X
        })
    );
}

#[test]
fn test_snapshot_outcome_must_match_board() {
    // X X X / O O . / . . .  recorded as still ongoing
    let mut snapshot = in_play([[X, X, X], [O, O, E], [E; 3]]);
    snapshot.player = Player::O;
    let line = [coord(0, 0), coord(0, 1), coord(0, 2)];
    assert_eq!(
        snapshot.validate(),
        Err(SnapshotError::Outcome {
            expected: Outcome::Win {
                player: Player::X,
                line
            },
            found: Outcome::Ongoing,
        })
    );

    // Full board with no line recorded as ongoing.
    let mut snapshot = in_play([[X, O, X], [O, X, X], [O, X, O]]);
    snapshot.player = Player::O;
    assert!(matches!(
        snapshot.validate(),
        Err(SnapshotError::Outcome {
            expected: Outcome::Draw,
            ..
        })
    ));
}

#[test]
fn test_snapshot_phase_must_match_outcome() {
    // Win recorded but still in play.
    let mut snapshot = in_play([[X, X, X], [O, O, E], [E; 3]]);
    snapshot.player = Player::O;
    snapshot.outcome = Outcome::Win {
        player: Player::X,
        line: [coord(0, 0), coord(0, 1), coord(0, 2)],
    };
    assert!(matches!(
        snapshot.validate(),
        Err(SnapshotError::Phase {
            phase: GamePhase::InProgress,
            ..
        })
    ));
    snapshot.phase = GamePhase::Ended;
    assert_eq!(snapshot.validate(), Ok(()));

    // Start screen with marks on the board.
    let mut snapshot = in_play([[X, O, E], [E; 3], [E; 3]]);
    snapshot.phase = GamePhase::Start;
    assert!(matches!(
        snapshot.validate(),
        Err(SnapshotError::Phase {
            phase: GamePhase::Start,
            ..
        })
    ));
}

#[test]
fn test_restored_game_draws_on_full_board() {
    // X O X / O X X / O . O
    let mut engine = GameEngine::from_snapshot(in_play([[X, O, X], [O, X, X], [O, E, O]]), NoRandom)
        .expect("consistent snapshot");
    engine.play(2, 1);

    assert!(engine.board().is_full());
    assert_eq!(engine.moves(), engine.board().marks());
    assert_eq!(engine.outcome(), Outcome::Draw);
    assert_eq!(engine.phase(), GamePhase::Ended);
}
