//! Tic-tac-toe rules engine with a computer opponent.
//!
//! A single human plays X against the computer, which plays O with a
//! one-ply heuristic: take a winning cell, otherwise block, otherwise play
//! at random.
//!
//! # Architecture
//!
//! - **Types**: board, cells, coordinates, players
//! - **Rules**: pure win and draw detection
//! - **Opponent**: the computer's move selection
//! - **Engine**: the game-state machine a presentation layer drives
//!
//! # Example
//!
//! ```
//! use tictac_engine::GameEngine;
//!
//! let mut engine = GameEngine::seeded(7);
//! engine.start_game();
//! engine.play(1, 1);
//!
//! assert!(engine.show_x(1, 1));
//! assert_eq!(engine.moves(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod opponent;
mod phase;
mod random;
pub mod rules;
mod types;

pub use engine::{GameEngine, Snapshot, Turn};
pub use error::{MoveError, PhaseError, SnapshotError};
pub use opponent::{CpuMove, MoveKind, choose_move, winning_cell};
pub use phase::{GamePhase, Outcome};
pub use random::RandomChoice;
pub use rules::end_game;
pub use types::{BOARD_SIZE, Board, CELL_COUNT, Cell, Coord, Player};
