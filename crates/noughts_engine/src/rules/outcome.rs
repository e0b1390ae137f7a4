//! Terminal-result evaluation.

use super::win::has_win;
use crate::types::{Board, GameStatus, Player};
use tracing::instrument;

/// Evaluates the game result relative to the side whose turn the caller
/// considers current.
///
/// Checks a win for `current`, then for its opponent, then a full board
/// (draw). On boards reached by legal alternating play both orderings
/// agree, but the check is deliberately phrased from `current`'s
/// perspective, the way the surrounding loop asks the question.
#[instrument]
pub fn game_result(board: &Board, current: Player) -> GameStatus {
    if has_win(board, current) {
        return GameStatus::Won(current);
    }

    let enemy = current.opponent();
    if has_win(board, enemy) {
        return GameStatus::Won(enemy);
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Square;

    fn fill(board: &mut Board, xs: &[Position], os: &[Position]) {
        for &pos in xs {
            board.set(pos, Square::Occupied(Player::X));
        }
        for &pos in os {
            board.set(pos, Square::Occupied(Player::O));
        }
    }

    #[test]
    fn test_in_progress_on_empty_board() {
        let board = Board::new();
        assert_eq!(game_result(&board, Player::X), GameStatus::InProgress);
    }

    #[test]
    fn test_win_reported_for_either_perspective() {
        let mut board = Board::new();
        fill(
            &mut board,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            &[Position::MiddleLeft, Position::Center],
        );

        assert_eq!(game_result(&board, Player::X), GameStatus::Won(Player::X));
        assert_eq!(game_result(&board, Player::O), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_draw_on_full_board_without_winner() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        fill(
            &mut board,
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::Center,
                Position::MiddleRight,
                Position::BottomCenter,
            ],
            &[
                Position::TopCenter,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::BottomRight,
            ],
        );

        assert_eq!(game_result(&board, Player::X), GameStatus::Draw);
        assert_eq!(game_result(&board, Player::O), GameStatus::Draw);
    }

    #[test]
    fn test_partial_board_still_in_progress() {
        let mut board = Board::new();
        fill(&mut board, &[Position::Center], &[Position::TopLeft]);
        assert_eq!(game_result(&board, Player::O), GameStatus::InProgress);
    }
}
