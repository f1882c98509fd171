//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Coord, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Every line that wins the game: three rows, three columns, two diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// Line pattern checked through a just-played cell.
///
/// Variants are declared in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Pattern {
    /// The full row of the played cell.
    Row,
    /// The full column of the played cell.
    Column,
    /// (0,0) - (1,1) - (2,2).
    MainDiagonal,
    /// (0,2) - (1,1) - (2,0).
    AntiDiagonal,
}

impl Pattern {
    /// The three cells of this pattern through `at`.
    ///
    /// Diagonals ignore `at`.
    pub fn cells(self, at: Coord) -> [Coord; 3] {
        match self {
            Pattern::Row => [0, 1, 2].map(|col| Coord::at(at.row(), col)),
            Pattern::Column => [0, 1, 2].map(|row| Coord::at(row, at.col())),
            Pattern::MainDiagonal => LINES[6],
            Pattern::AntiDiagonal => LINES[7],
        }
    }
}

/// Checks whether `player` has completed a pattern through `at`.
///
/// All four patterns are checked regardless of whether `at` lies on a
/// diagonal. When several are complete the last one in check order is
/// returned, so the anti-diagonal beats the main diagonal, which beats the
/// column, which beats the row.
#[instrument(level = "trace", skip(board))]
pub fn end_game(at: Coord, board: &Board, player: Player) -> Option<[Coord; 3]> {
    let mark = Cell::from(player);
    Pattern::iter()
        .rev()
        .map(|pattern| pattern.cells(at))
        .find(|line| line.iter().all(|&c| board.get(c) == mark))
}

/// Scans the whole board for any completed line.
///
/// Returns the first complete line in [`LINES`] order along with its owner.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<(Player, [Coord; 3])> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Some(player) = cell.owner()
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some((player, [a, b, c]));
        }
    }

    None
}
