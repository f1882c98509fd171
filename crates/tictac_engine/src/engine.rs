//! Game-state machine for a human (X) against the computer (O).
//!
//! The engine owns the board, the active player, the screen phase and the
//! outcome. A presentation layer drives it with [`GameEngine::start`],
//! [`GameEngine::start_game`], [`GameEngine::play`] and
//! [`GameEngine::new_game`], then re-reads state through the `show_*`
//! queries. Invalid input never fails the session: the UI-facing commands
//! log and ignore it, while the `try_*` twins report why.

use crate::error::{MoveError, PhaseError, SnapshotError};
use crate::opponent::{CpuMove, choose_move};
use crate::phase::{GamePhase, Outcome};
use crate::random::RandomChoice;
use crate::rules::{LINES, end_game, winning_line};
use crate::types::{Board, Coord, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What a successful [`GameEngine::try_play`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Cell the human played.
    pub human: Coord,
    /// The computer's reply, absent when the human's move ended the game.
    pub reply: Option<CpuMove>,
    /// Outcome after both moves.
    pub outcome: Outcome,
}

/// Owned copy of the engine's observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// Player to move next.
    pub player: Player,
    /// Current screen.
    pub phase: GamePhase,
    /// Win, draw or ongoing.
    pub outcome: Outcome,
    /// Marks placed since the last reset.
    pub moves: usize,
}

impl Snapshot {
    /// Checks that some sequence of play could have produced this state.
    ///
    /// # Errors
    ///
    /// Returns the first [`SnapshotError`] found, checking in order: move
    /// count against marks, mark balance, player to move, outcome against
    /// the board's lines, then phase against the outcome.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let marks = self.board.marks();
        if self.moves != marks {
            return Err(SnapshotError::MoveCount {
                moves: self.moves,
                marks,
            });
        }

        let (x, o) = (self.board.count(Player::X), self.board.count(Player::O));
        if x != o && x != o + 1 {
            return Err(SnapshotError::Unbalanced { x, o });
        }

        let expected = if x == o { Player::X } else { Player::O };
        if self.player != expected {
            return Err(SnapshotError::WrongPlayer {
                expected,
                found: self.player,
            });
        }

        let found_line = winning_line(&self.board);
        let outcome_holds = match (self.outcome, found_line) {
            (Outcome::Win { player, line }, Some(_)) => {
                player == self.player.opponent()
                    && LINES.contains(&line)
                    && line.iter().all(|&c| self.board.get(c).owner() == Some(player))
            }
            (Outcome::Draw, None) => self.board.is_full(),
            (Outcome::Ongoing, None) => !self.board.is_full(),
            _ => false,
        };
        if !outcome_holds {
            let expected = match found_line {
                Some((player, line)) => Outcome::Win { player, line },
                None if self.board.is_full() => Outcome::Draw,
                None => Outcome::Ongoing,
            };
            return Err(SnapshotError::Outcome {
                expected,
                found: self.outcome,
            });
        }

        let phase_holds = match self.outcome {
            Outcome::Ongoing => match self.phase {
                GamePhase::Start => self.moves == 0,
                GamePhase::InProgress => true,
                GamePhase::Ended => false,
            },
            _ => self.phase == GamePhase::Ended,
        };
        if !phase_holds {
            return Err(SnapshotError::Phase {
                phase: self.phase,
                outcome: self.outcome,
                moves: self.moves,
            });
        }

        Ok(())
    }
}

/// Tic-tac-toe engine with a computer opponent.
///
/// `R` supplies the opponent's random fallback move.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    board: Board,
    player: Player,
    phase: GamePhase,
    outcome: Outcome,
    moves: usize,
    random: R,
}

impl GameEngine<StdRng> {
    /// Creates an engine on the start screen with an entropy-seeded random source.
    #[instrument]
    pub fn new() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// Creates an engine whose random fallback replays identically for `seed`.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_random(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomChoice> GameEngine<R> {
    /// Creates an engine on the start screen using `random` for fallback moves.
    pub fn with_random(random: R) -> Self {
        Self {
            board: Board::new(),
            player: Player::X,
            phase: GamePhase::Start,
            outcome: Outcome::Ongoing,
            moves: 0,
            random,
        }
    }

    /// Rebuilds an engine from a [`Snapshot`].
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] when the snapshot fails
    /// [`Snapshot::validate`].
    #[instrument(skip(snapshot, random), fields(moves = snapshot.moves, phase = %snapshot.phase))]
    pub fn from_snapshot(snapshot: Snapshot, random: R) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        Ok(Self {
            board: snapshot.board,
            player: snapshot.player,
            phase: snapshot.phase,
            outcome: snapshot.outcome,
            moves: snapshot.moves,
            random,
        })
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Resets to an empty board on the start screen with X to move.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.board = Board::new();
        self.player = Player::X;
        self.phase = GamePhase::Start;
        self.outcome = Outcome::Ongoing;
        self.moves = 0;
        debug!("Engine reset to start screen");
    }

    /// Leaves the start screen and shows the board.
    ///
    /// Ignored outside the start screen.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start_game(&mut self) {
        if let Err(e) = self.try_start_game() {
            warn!(error = %e, "Ignoring start_game");
        }
    }

    /// Checked form of [`start_game`](Self::start_game).
    ///
    /// # Errors
    ///
    /// Returns [`PhaseError::NotAtStart`] unless the phase is
    /// [`GamePhase::Start`]; state is left unchanged.
    pub fn try_start_game(&mut self) -> Result<(), PhaseError> {
        if self.phase != GamePhase::Start {
            return Err(PhaseError::NotAtStart(self.phase));
        }
        self.phase = GamePhase::InProgress;
        Ok(())
    }

    /// Resets the board and goes straight to play, skipping the start screen.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.start();
        self.phase = GamePhase::InProgress;
    }

    /// Plays the human's mark at (`row`, `col`), followed by the computer's reply.
    ///
    /// Invalid moves are ignored without touching state.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn play(&mut self, row: usize, col: usize) {
        if let Err(e) = self.try_play(row, col) {
            debug!(error = %e, "Ignoring move");
        }
    }

    /// Checked form of [`play`](Self::play).
    ///
    /// On success the human's mark is placed and, unless that ended the
    /// game, exactly one computer move follows before this returns.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] when the board is not in play, the
    /// coordinates are off the board, the game is already decided or the
    /// cell is occupied. State is left unchanged in every case.
    pub fn try_play(&mut self, row: usize, col: usize) -> Result<Turn, MoveError> {
        if self.phase != GamePhase::InProgress {
            return Err(MoveError::NotInProgress(self.phase));
        }
        let human = Coord::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if self.outcome.is_decided() {
            return Err(MoveError::GameDecided);
        }
        if !self.board.is_empty(human) {
            return Err(MoveError::Occupied(human));
        }

        self.place(human);

        let reply = if !self.outcome.is_decided() && !self.board.is_full() {
            self.cpu_play()
        } else {
            None
        };

        Ok(Turn {
            human,
            reply,
            outcome: self.outcome,
        })
    }

    /// Makes one computer move for the active player.
    ///
    /// Normally called by [`play`](Self::play). Does nothing and returns
    /// `None` unless the board is in play with an undecided outcome.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn cpu_play(&mut self) -> Option<CpuMove> {
        if self.phase != GamePhase::InProgress || self.outcome.is_decided() {
            return None;
        }
        let mv = choose_move(&self.board, self.player, &mut self.random)?;
        debug!(coord = %mv.coord, kind = %mv.kind, "Computer plays");
        self.place(mv.coord);
        Some(mv)
    }

    /// Places the active player's mark, records the outcome and passes the turn.
    fn place(&mut self, coord: Coord) {
        let player = self.player;
        self.board.set(coord, player.into());
        self.moves += 1;

        if let Some(line) = end_game(coord, &self.board, player) {
            self.outcome = Outcome::Win { player, line };
            self.phase = GamePhase::Ended;
            info!(%player, ?line, moves = self.moves, "Game won");
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
            self.phase = GamePhase::Ended;
            info!(moves = self.moves, "Game drawn");
        }

        self.player = player.opponent();
    }
}

impl<R> GameEngine<R> {
    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// True while the start screen should be shown.
    pub fn show_start(&self) -> bool {
        self.phase == GamePhase::Start
    }

    /// True while the board should be shown for play.
    pub fn show_board(&self) -> bool {
        self.phase == GamePhase::InProgress
    }

    /// True once the game has been won or drawn.
    pub fn show_end(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Player whose mark goes down next.
    pub fn player(&self) -> Player {
        self.player
    }

    /// True if (`row`, `col`) holds an X.
    pub fn show_x(&self, row: usize, col: usize) -> bool {
        self.owner(row, col) == Some(Player::X)
    }

    /// True if (`row`, `col`) holds an O.
    pub fn show_o(&self, row: usize, col: usize) -> bool {
        self.owner(row, col) == Some(Player::O)
    }

    /// True if (`row`, `col`) is part of the winning line.
    pub fn show_victory(&self, row: usize, col: usize) -> bool {
        Coord::new(row, col).is_some_and(|c| self.outcome.highlights(c))
    }

    fn owner(&self, row: usize, col: usize) -> Option<Player> {
        Coord::new(row, col).and_then(|c| self.board.get(c).owner())
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current screen.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Win, draw or ongoing.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Marks placed since the last reset.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Owned copy of the observable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            player: self.player,
            phase: self.phase,
            outcome: self.outcome,
            moves: self.moves,
        }
    }
}
