//! Rook move generation: the four orthogonal rays.

use crate::board::piece_board::PieceBoard;
use crate::chess_errors::ChessErrors;
use crate::game::chess_move::ChessMove;
use crate::pieces::move_generator::ray_moves;
use crate::pieces::piece::PieceId;

pub(crate) const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn rook_moves(board: &PieceBoard, id: PieceId) -> Result<Vec<ChessMove>, ChessErrors> {
    ray_moves(board, id, &ORTHOGONAL_DIRECTIONS)
}
