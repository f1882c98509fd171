//! Line-based game loop driving the engine.

use crate::screen::{
    AGAIN_PROMPT, MOVE_PROMPT, START_PROMPT, is_quit, parse_move, render_board, result_line,
};
use std::io::{BufRead, Write};
use tictac_engine::{GameEngine, RandomChoice};
use tracing::{debug, instrument};

/// Runs screens until the user quits or input ends.
///
/// Returns the number of finished games.
#[instrument(skip_all)]
pub fn run<R, I, W>(engine: &mut GameEngine<R>, input: I, mut out: W) -> anyhow::Result<usize>
where
    R: RandomChoice,
    I: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    let mut finished = 0;

    loop {
        if engine.show_start() {
            writeln!(out, "{START_PROMPT}")?;
            match lines.next().transpose()? {
                Some(line) if !is_quit(&line) => engine.start_game(),
                _ => break,
            }
        } else if engine.show_board() {
            writeln!(out, "{}\n{MOVE_PROMPT}", render_board(engine))?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            if is_quit(&line) {
                break;
            }
            let (row, col) = match parse_move(&line) {
                Ok(rc) => rc,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            };
            match engine.try_play(row, col) {
                Ok(turn) => {
                    if let Some(reply) = turn.reply {
                        writeln!(
                            out,
                            "Computer plays {} {}",
                            reply.coord.row() + 1,
                            reply.coord.col() + 1
                        )?;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Move rejected");
                    writeln!(out, "{e}")?;
                }
            }
        } else {
            finished += 1;
            writeln!(
                out,
                "{}\n{}\n{AGAIN_PROMPT}",
                render_board(engine),
                result_line(&engine.outcome())
            )?;
            match lines.next().transpose()? {
                Some(line) if line.trim().eq_ignore_ascii_case("y") => engine.new_game(),
                _ => break,
            }
        }
    }

    out.flush()?;
    Ok(finished)
}
