//! Interactive game loop.

use crate::input::{self, ENTER_COORDINATES};
use crate::render;
use anyhow::{bail, Context, Result};
use noughts_engine::{
    game_result, select_move, Board, Difficulty, GameStatus, Player, Position, Square,
};
use rand::Rng;
use std::io::Write;
use tracing::{debug, instrument};

/// A seat at the board: either the console user or an engine tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves come from coordinate prompts.
    Human,
    /// Moves come from the engine at the given tier.
    Ai(Difficulty),
}

impl From<Difficulty> for PlayerKind {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::User => PlayerKind::Human,
            tier => PlayerKind::Ai(tier),
        }
    }
}

/// Plays one game to completion and prints the result line.
///
/// X always moves first; the board is evaluated after every applied move
/// from the perspective of the player who just moved.
#[instrument(skip(rng))]
pub fn run<R: Rng>(x_kind: PlayerKind, o_kind: PlayerKind, rng: &mut R) -> Result<()> {
    let mut board = Board::new();
    let mut current = Player::X;
    render::draw(&board);

    loop {
        let kind = match current {
            Player::X => x_kind,
            Player::O => o_kind,
        };

        let pos = next_move(&mut board, current, kind, rng)?;
        board.set(pos, Square::Occupied(current));
        render::draw(&board);

        match game_result(&board, current) {
            GameStatus::Won(winner) => {
                println!("{winner} wins");
                return Ok(());
            }
            GameStatus::Draw => {
                println!("Draw");
                return Ok(());
            }
            GameStatus::InProgress => current = current.opponent(),
        }
    }
}

fn next_move<R: Rng>(
    board: &mut Board,
    mover: Player,
    kind: PlayerKind,
    rng: &mut R,
) -> Result<Position> {
    match kind {
        PlayerKind::Human => prompt_human(board),
        PlayerKind::Ai(tier) => {
            println!("Making move level \"{tier}\"");
            debug!(?mover, %tier, "requesting engine move");
            select_move(board, mover, tier, rng)?
                .context("selector invoked on a full board")
        }
    }
}

/// Prompts until the user enters valid, available coordinates.
fn prompt_human(board: &Board) -> Result<Position> {
    let stdin = std::io::stdin();
    loop {
        print!("{ENTER_COORDINATES}");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for coordinates");
        }

        match input::parse_coordinates(&line, board) {
            Ok(pos) => return Ok(pos),
            Err(error) => println!("{error}"),
        }
    }
}
