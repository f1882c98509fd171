//! Screen phases and game outcomes.

use crate::types::{Coord, Player};
use serde::{Deserialize, Serialize};

/// Which screen the presentation layer should show.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum GamePhase {
    /// Start screen, before the board is shown.
    #[default]
    Start,
    /// Board is in play.
    InProgress,
    /// A win or a draw has been reached.
    Ended,
}

/// Result of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No win or draw yet.
    #[default]
    Ongoing,
    /// Player completed a line.
    Win {
        /// The winning player.
        player: Player,
        /// The three cells of the completed line, in check order.
        line: [Coord; 3],
    },
    /// Board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Returns true once a win or draw has been recorded.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<[Coord; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if `coord` is part of the winning line.
    pub fn highlights(&self, coord: Coord) -> bool {
        self.line().is_some_and(|line| line.contains(&coord))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_row() -> [Coord; 3] {
        [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)]
    }

    #[test]
    fn test_ongoing_is_undecided() {
        assert!(!Outcome::Ongoing.is_decided());
        assert!(Outcome::Draw.is_decided());
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_win_highlights_line() {
        let outcome = Outcome::Win {
            player: Player::O,
            line: top_row(),
        };
        assert_eq!(outcome.winner(), Some(Player::O));
        assert!(outcome.highlights(Coord::at(0, 1)));
        assert!(!outcome.highlights(Coord::at(1, 1)));
        assert_eq!(outcome.to_string(), "Player O wins");
    }

    #[test]
    fn test_draw_highlights_nothing() {
        assert!(Coord::ALL.iter().all(|&c| !Outcome::Draw.highlights(c)));
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = Outcome::Win {
            player: Player::X,
            line: top_row(),
        };
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Win": {"player": "X", "line": [[0, 0], [0, 1], [0, 2]]}})
        );
    }
}
