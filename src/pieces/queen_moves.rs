//! Queen move generation: the union of the rook and bishop rays.

use crate::board::piece_board::PieceBoard;
use crate::chess_errors::ChessErrors;
use crate::game::chess_move::ChessMove;
use crate::pieces::bishop_moves::DIAGONAL_DIRECTIONS;
use crate::pieces::move_generator::ray_moves;
use crate::pieces::piece::PieceId;
use crate::pieces::rook_moves::ORTHOGONAL_DIRECTIONS;

pub fn queen_moves(board: &PieceBoard, id: PieceId) -> Result<Vec<ChessMove>, ChessErrors> {
    let mut moves = ray_moves(board, id, &ORTHOGONAL_DIRECTIONS)?;
    moves.extend(ray_moves(board, id, &DIAGONAL_DIRECTIONS)?);
    Ok(moves)
}
