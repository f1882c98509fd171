//! Text rendering of the three screens.
//!
//! Everything here is read off the engine's `show_*` queries.

use derive_more::{Display, Error};
use tictac_engine::{BOARD_SIZE, GameEngine, Outcome};

/// Start screen banner.
pub const START_PROMPT: &str = "Tic-tac-toe. You are X, the computer is O.\nPress enter to start, q to quit.";

/// Board screen prompt.
pub const MOVE_PROMPT: &str = "Your move (row col, 1-3), q to quit:";

/// End screen prompt.
pub const AGAIN_PROMPT: &str = "Play again? (y/n)";

/// Renders the grid. Cells on the winning line are bracketed.
pub fn render_board<R>(engine: &GameEngine<R>) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let mark = if engine.show_x(row, col) {
                    'X'
                } else if engine.show_o(row, col) {
                    'O'
                } else {
                    ' '
                };
                if engine.show_victory(row, col) {
                    format!("[{mark}]")
                } else {
                    format!(" {mark} ")
                }
            })
            .collect();
        rows.push(format!("{} {}", row + 1, cells.join("|")));
    }
    format!("   1   2   3\n{}", rows.join("\n  ---+---+---\n"))
}

/// Headline for the end screen.
pub fn result_line(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Win { player, .. } => format!("{} wins!", player),
        Outcome::Draw => "It's a draw.".to_string(),
        Outcome::Ongoing => "Game in progress.".to_string(),
    }
}

/// Input that could not be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Could not read {:?} as a move; type a row and column from 1 to 3", input)]
pub struct InputError {
    /// What the user typed.
    pub input: String,
}

/// Parses `"row col"` (1-based) into 0-based coordinates.
///
/// Commas are accepted as separators. Range checking is left to the engine.
pub fn parse_move(input: &str) -> Result<(usize, usize), InputError> {
    let err = || InputError {
        input: input.trim().to_string(),
    };
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row: usize = parts.next().and_then(|s| s.parse().ok()).ok_or_else(err)?;
    let col: usize = parts.next().and_then(|s| s.parse().ok()).ok_or_else(err)?;
    if parts.next().is_some() || row == 0 || col == 0 {
        return Err(err());
    }
    Ok((row - 1, col - 1))
}

/// True for the quit command.
pub fn is_quit(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}
