//! Tic-tac-toe board logic and tiered move-selection engine.
//!
//! The crate is split the way the rules read:
//!
//! - **Board**: fixed 3x3 grid with row-major scan order
//! - **Rules**: pure win/draw/result evaluation over a board
//! - **AI**: per-difficulty move selection (random, one-ply threat
//!   analysis, full minimax)
//!
//! The engine is synchronous, holds no cross-call state, and never does
//! I/O; the console surface lives in `noughts_cli`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod position;
mod rules;
mod types;

// Crate-level exports - move selection
pub use ai::{analyze, best_move, select_move, Difficulty, EngineError, ThreatAnalysis};

// Crate-level exports - positions
pub use position::Position;

// Crate-level exports - rules
pub use rules::{check_winner, game_result, has_win, LINES};

// Crate-level exports - board types
pub use types::{Board, GameStatus, Player, Square};
