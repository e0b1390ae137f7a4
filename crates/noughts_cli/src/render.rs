//! Board rendering in the bordered console format.

use noughts_engine::{Board, Player, Position, Square};

const BORDER: &str = "---------";

/// Formats the board as the bordered grid the game prints.
pub fn format_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');

    for row in 0..3 {
        out.push_str("| ");
        for col in 0..3 {
            let symbol = match Position::from_row_col(row, col).map(|pos| board.get(pos)) {
                Some(Square::Occupied(Player::X)) => 'X',
                Some(Square::Occupied(Player::O)) => 'O',
                _ => ' ',
            };
            out.push(symbol);
            out.push(' ');
        }
        out.push('|');
        out.push('\n');
    }

    out.push_str(BORDER);
    out
}

/// Prints the board to stdout.
pub fn draw(board: &Board) {
    println!("{}", format_board(board));
}
