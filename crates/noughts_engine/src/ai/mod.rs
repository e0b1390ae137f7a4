//! Per-difficulty move selection.
//!
//! The selector is pure dispatch: it calls into the threat analyzer, the
//! minimax search or the uniform-random fallback and returns a single
//! cell. It never prints and holds no state between calls.

mod minimax;
mod threat;

pub use minimax::best_move;
pub use threat::{analyze, ThreatAnalysis};

use crate::position::Position;
use crate::types::{Board, Player};
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Controller tier requested by the start command.
///
/// `User` means human-controlled and is outside the engine's competence;
/// the selector rejects it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Difficulty {
    /// Human-controlled; the console layer prompts for coordinates.
    User,
    /// Uniform-random choice over empty cells.
    Easy,
    /// One-ply threat analysis, then random fallback.
    Medium,
    /// Full minimax search.
    Hard,
}

/// Errors surfaced by the move selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// The requested tier has no automated policy.
    #[display("invalid configuration: no automated policy for the \"{_0}\" tier")]
    InvalidConfiguration(#[error(not(source))] Difficulty),
}

/// Chooses a cell for `mover` under the given difficulty tier.
///
/// Returns `Ok(None)` when the board has no empty cells; during normal
/// play the caller checks termination first, so reaching that signal is a
/// logic error on the caller's side. Requesting a move for the `User`
/// tier fails with [`EngineError::InvalidConfiguration`].
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng>(
    board: &mut Board,
    mover: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Option<Position>, EngineError> {
    let choice = match difficulty {
        Difficulty::User => return Err(EngineError::InvalidConfiguration(difficulty)),
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            let threats = threat::analyze(board, mover);
            threats
                .attack
                .or(threats.defend)
                .or_else(|| random_move(board, rng))
        }
        Difficulty::Hard => minimax::best_move(board, mover),
    };

    debug!(?choice, "selected move");
    Ok(choice)
}

/// Uniform-random choice over the current empty cells.
fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<Position> {
    let cells = board.empty_cells();
    if cells.is_empty() {
        return None;
    }
    Some(cells[rng.gen_range(0..cells.len())])
}
