//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 fixed lines whose simultaneous occupation ends the game.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether the given player has completed a line.
pub fn has_win(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|&[a, b, c]| board.get(a) == mark && board.get(b) == mark && board.get(c) == mark)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}
