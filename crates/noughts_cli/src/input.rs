//! Human coordinate input validation.

use derive_more::{Display, Error};
use noughts_engine::{Board, Position};

/// Prompt shown before reading a coordinate pair.
pub const ENTER_COORDINATES: &str = "Enter the coordinates: ";

/// Why a typed coordinate pair was rejected. The display text is printed
/// verbatim before re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CoordinateError {
    /// Not exactly two whitespace-separated tokens.
    #[display("Please, enter only 2 numbers")]
    WrongCount,
    /// A token failed to parse as an integer.
    #[display("You should enter numbers!")]
    NotANumber,
    /// A coordinate fell outside the 1-3 range.
    #[display("Coordinates should be from 1 to 3!")]
    OutOfRange,
    /// The addressed cell already holds a mark.
    #[display("This cell is occupied! Choose another one!")]
    CellOccupied,
}

/// Parses 1-based `row col` input against the current board.
pub fn parse_coordinates(input: &str, board: &Board) -> Result<Position, CoordinateError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(CoordinateError::WrongCount);
    }

    let mut numbers = [0i32; 2];
    for (slot, token) in numbers.iter_mut().zip(&tokens) {
        *slot = token.parse().map_err(|_| CoordinateError::NotANumber)?;
    }
    if numbers.iter().any(|n| !(1..=3).contains(n)) {
        return Err(CoordinateError::OutOfRange);
    }

    let row = (numbers[0] - 1) as usize;
    let col = (numbers[1] - 1) as usize;
    let pos = Position::from_row_col(row, col).ok_or(CoordinateError::OutOfRange)?;

    if !board.is_empty(pos) {
        return Err(CoordinateError::CellOccupied);
    }
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::{Player, Square};

    #[test]
    fn test_accepts_valid_coordinates() {
        let board = Board::new();
        assert_eq!(parse_coordinates("2 2", &board), Ok(Position::Center));
        assert_eq!(parse_coordinates("1 3", &board), Ok(Position::TopRight));
        assert_eq!(parse_coordinates("3 1", &board), Ok(Position::BottomLeft));
    }

    #[test]
    fn test_rejects_wrong_token_count() {
        let board = Board::new();
        assert_eq!(
            parse_coordinates("2", &board),
            Err(CoordinateError::WrongCount)
        );
        assert_eq!(
            parse_coordinates("1 2 3", &board),
            Err(CoordinateError::WrongCount)
        );
    }

    #[test]
    fn test_rejects_non_numeric() {
        let board = Board::new();
        assert_eq!(
            parse_coordinates("one three", &board),
            Err(CoordinateError::NotANumber)
        );
    }

    #[test]
    fn test_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(
            parse_coordinates("4 1", &board),
            Err(CoordinateError::OutOfRange)
        );
        assert_eq!(
            parse_coordinates("0 2", &board),
            Err(CoordinateError::OutOfRange)
        );
        // Negative numbers are numeric but out of range, not a parse
        // failure.
        assert_eq!(
            parse_coordinates("-1 2", &board),
            Err(CoordinateError::OutOfRange)
        );
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert_eq!(
            parse_coordinates("2 2", &board),
            Err(CoordinateError::CellOccupied)
        );
    }

    #[test]
    fn test_error_messages_match_prompts() {
        assert_eq!(
            CoordinateError::CellOccupied.to_string(),
            "This cell is occupied! Choose another one!"
        );
        assert_eq!(
            CoordinateError::NotANumber.to_string(),
            "You should enter numbers!"
        );
    }
}
