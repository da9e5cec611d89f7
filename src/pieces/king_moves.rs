//! King move generation: single steps plus castling.

use crate::board::board_location::BoardLocation;
use crate::board::piece_board::PieceBoard;
use crate::chess_errors::ChessErrors;
use crate::game::chess_move::{ChessMove, MoveKind};
use crate::pieces::move_generator::{can_team_reach_square, offset_moves};
use crate::pieces::piece::PieceId;
use crate::pieces::piece_class::PieceClass;

const KING_PATTERN: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
];

pub fn king_step_moves(board: &PieceBoard, id: PieceId) -> Result<Vec<ChessMove>, ChessErrors> {
    offset_moves(board, id, &KING_PATTERN)
}

/// Castling moves currently open to this king. Requirements per wing: an
/// unmoved king and rook, empty squares between them, the king not currently
/// attacked, and no square the king crosses (destination included) reachable
/// by the opponent. Kingside and queenside are evaluated independently.
pub fn king_castling_moves(
    board: &PieceBoard,
    id: PieceId,
) -> Result<Vec<ChessMove>, ChessErrors> {
    let king = board.piece(id);
    let mut moves = Vec::new();
    if king.has_moved() {
        return Ok(moves);
    }
    let from = king.square().ok_or(ChessErrors::PieceNotOnBoard(id))?;
    let row = king.team.back_rank();
    let enemy = king.team.opponent();
    if can_team_reach_square(board, enemy, from)? {
        return Ok(moves);
    }

    // Kingside: rook on the h-file, f and g empty and safe.
    if let Some(castle) = castle_on_wing(board, id, from, 7, &[(5, row), (6, row)], (6, row), (5, row))? {
        moves.push(castle);
    }
    // Queenside: rook on the a-file, b/c/d empty, the king crosses d and c.
    if board.has_piece((1, row)) {
        return Ok(moves);
    }
    if let Some(castle) = castle_on_wing(board, id, from, 0, &[(3, row), (2, row)], (2, row), (3, row))? {
        moves.push(castle);
    }
    Ok(moves)
}

/// Checks one wing. `crossing` lists the squares the king passes through
/// (destination included); they must be empty and unreachable by the enemy.
fn castle_on_wing(
    board: &PieceBoard,
    king_id: PieceId,
    king_from: BoardLocation,
    rook_file: i8,
    crossing: &[BoardLocation],
    king_to: BoardLocation,
    rook_to: BoardLocation,
) -> Result<Option<ChessMove>, ChessErrors> {
    let king = board.piece(king_id);
    let rook_from = (rook_file, king.team.back_rank());
    let Some(rook_id) = board.occupant(rook_from) else {
        return Ok(None);
    };
    let rook = board.piece(rook_id);
    if rook.class != PieceClass::Rook || rook.team != king.team || rook.has_moved() {
        return Ok(None);
    }
    for &square in crossing {
        if board.has_piece(square) {
            return Ok(None);
        }
        if can_team_reach_square(board, king.team.opponent(), square)? {
            return Ok(None);
        }
    }
    Ok(Some(ChessMove {
        piece: king_id,
        from: king_from,
        to: king_to,
        captured: None,
        kind: MoveKind::Castling {
            rook: rook_id,
            rook_from,
            rook_to,
        },
    }))
}
