//! One-ply computer opponent.
//!
//! The opponent looks a single move ahead: it completes its own line when it
//! can, otherwise it blocks the human's line, otherwise it picks an empty
//! cell at random. Scans run in row-major order, so among several winning or
//! blocking cells the first one found is played.

use crate::random::RandomChoice;
use crate::rules::end_game;
use crate::types::{Board, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why the opponent picked a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum MoveKind {
    /// Completes the opponent's own line.
    Win,
    /// Occupies the cell the human would win on.
    Block,
    /// Uniform choice among empty cells.
    Random,
}

/// A move chosen by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CpuMove {
    /// Cell the computer plays.
    pub coord: Coord,
    /// Which rule selected the cell.
    pub kind: MoveKind,
}

impl std::fmt::Display for CpuMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.coord, self.kind)
    }
}

/// First empty cell, in row-major order, where `player` would complete a line.
///
/// Each candidate is tried on a scratch copy of the board; `board` itself is
/// never touched.
#[instrument(level = "trace", skip(board))]
pub fn winning_cell(board: &Board, player: Player) -> Option<Coord> {
    board.empty_cells().find(|&coord| {
        let mut trial = *board;
        trial.set(coord, player.into());
        end_game(coord, &trial, player).is_some()
    })
}

/// Selects the computer's move for `cpu` on `board`.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, random), fields(board = %board.display()))]
pub fn choose_move<R>(board: &Board, cpu: Player, random: &mut R) -> Option<CpuMove>
where
    R: RandomChoice + ?Sized,
{
    if let Some(coord) = winning_cell(board, cpu) {
        debug!(%coord, "Taking winning cell");
        return Some(CpuMove {
            coord,
            kind: MoveKind::Win,
        });
    }

    if let Some(coord) = winning_cell(board, cpu.opponent()) {
        debug!(%coord, "Blocking opponent line");
        return Some(CpuMove {
            coord,
            kind: MoveKind::Block,
        });
    }

    let candidates: Vec<Coord> = board.empty_cells().collect();
    if candidates.is_empty() {
        return None;
    }
    let index = random.choose_index(candidates.len()).min(candidates.len() - 1);
    let coord = candidates[index];
    debug!(%coord, candidates = candidates.len(), "Falling back to random cell");
    Some(CpuMove {
        coord,
        kind: MoveKind::Random,
    })
}
