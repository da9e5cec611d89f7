//! Knight move generation.

use crate::board::piece_board::PieceBoard;
use crate::chess_errors::ChessErrors;
use crate::game::chess_move::ChessMove;
use crate::pieces::move_generator::offset_moves;
use crate::pieces::piece::PieceId;

const KNIGHT_PATTERN: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn knight_moves(board: &PieceBoard, id: PieceId) -> Result<Vec<ChessMove>, ChessErrors> {
    offset_moves(board, id, &KNIGHT_PATTERN)
}
