//! Errors reported by the checked engine commands.
//!
//! The UI-facing commands never surface these: they log and ignore them.

use crate::phase::{GamePhase, Outcome};
use crate::types::{Coord, Player};
use derive_more::{Display, Error};

/// Error that can occur when validating a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates fall outside the board.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Coord),

    /// A win or draw has already been recorded.
    #[display("Game is already over")]
    GameDecided,

    /// Moves are only accepted while the board is in play.
    #[display("Moves are not accepted during the {} phase", _0)]
    NotInProgress(#[error(not(source))] GamePhase),
}

/// Error raised by an out-of-order phase transition.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PhaseError {
    /// `start_game` was called outside the start screen.
    #[display("Cannot start the game from the {} phase", _0)]
    NotAtStart(#[error(not(source))] GamePhase),
}

/// A [`Snapshot`](crate::Snapshot) that no sequence of moves could produce.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SnapshotError {
    /// Move count disagrees with the marks on the board.
    #[display("Snapshot records {} moves but the board holds {} marks", moves, marks)]
    MoveCount {
        /// Recorded move count.
        moves: usize,
        /// Marks on the board.
        marks: usize,
    },

    /// X must have as many marks as O, or one more.
    #[display("Board holds {} X marks and {} O marks", x, o)]
    Unbalanced {
        /// X marks.
        x: usize,
        /// O marks.
        o: usize,
    },

    /// The player to move does not follow from the move count.
    #[display("Expected {} to move, snapshot says {}", expected, found)]
    WrongPlayer {
        /// Player implied by the board.
        expected: Player,
        /// Player recorded.
        found: Player,
    },

    /// The outcome does not match the lines on the board.
    #[display("Board implies {:?}, snapshot says {:?}", expected, found)]
    Outcome {
        /// Outcome implied by the board.
        expected: Outcome,
        /// Outcome recorded.
        found: Outcome,
    },

    /// The phase does not match the outcome and board.
    #[display("Phase {} is inconsistent with outcome {:?} after {} moves", phase, outcome, moves)]
    Phase {
        /// Recorded phase.
        phase: GamePhase,
        /// Recorded outcome.
        outcome: Outcome,
        /// Recorded move count.
        moves: usize,
    },
}
