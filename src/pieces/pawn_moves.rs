//! Pawn move generation.
//!
//! Forward pushes are blocked by any occupant, the double push only exists on
//! the starting rank with both squares empty, and diagonal moves only exist
//! as captures. The en passant window is checked against real history: the
//! adjacent enemy pawn must have landed beside this pawn with a double step,
//! and that double step must be the move on top of the game history.

use crate::board::board_location::offset_location;
use crate::board::piece_board::PieceBoard;
use crate::chess_errors::ChessErrors;
use crate::game::chess_game::ChessGame;
use crate::game::chess_move::{ChessMove, MoveKind};
use crate::pieces::move_generator::regular_move;
use crate::pieces::piece::PieceId;
use crate::pieces::piece_class::PieceClass;

/// Pushes and diagonal captures. En passant is generated separately because
/// it needs game history, not just board occupancy.
pub fn pawn_basic_moves(board: &PieceBoard, id: PieceId) -> Result<Vec<ChessMove>, ChessErrors> {
    let pawn = board.piece(id);
    let from = pawn.square().ok_or(ChessErrors::PieceNotOnBoard(id))?;
    let direction = pawn.team.forward_direction();
    let mut moves = Vec::new();

    if let Ok(one_ahead) = offset_location(from, 0, direction) {
        if !board.has_piece(one_ahead) {
            moves.push(regular_move(id, from, one_ahead, None));
            if from.1 == pawn.team.pawn_rank() {
                if let Ok(two_ahead) = offset_location(from, 0, 2 * direction) {
                    if !board.has_piece(two_ahead) {
                        moves.push(regular_move(id, from, two_ahead, None));
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Ok(diagonal) = offset_location(from, d_file, direction) else {
            continue;
        };
        if let Some(other) = board.occupant(diagonal) {
            if board.piece(other).is_opponent_of(pawn.team) {
                moves.push(regular_move(id, from, diagonal, Some(other)));
            }
        }
    }

    Ok(moves)
}

/// En passant captures available to this pawn right now. The opportunity
/// exists for exactly one ply after the enemy pawn's double step.
pub fn pawn_en_passant_moves(
    game: &ChessGame,
    id: PieceId,
) -> Result<Vec<ChessMove>, ChessErrors> {
    let board = game.board();
    let pawn = board.piece(id);
    let from = pawn.square().ok_or(ChessErrors::PieceNotOnBoard(id))?;
    let direction = pawn.team.forward_direction();
    let mut moves = Vec::new();

    // Three ranks from this pawn's starting rank is the only rank an enemy
    // double step can land beside it.
    if from.1 != pawn.team.pawn_rank() + 3 * direction {
        return Ok(moves);
    }
    let Some(last_move) = game.last_move_made() else {
        return Ok(moves);
    };

    for d_file in [-1, 1] {
        let Ok(beside) = offset_location(from, d_file, 0) else {
            continue;
        };
        let Some(other) = board.occupant(beside) else {
            continue;
        };
        let victim = board.piece(other);
        if victim.class != PieceClass::Pawn || !victim.is_opponent_of(pawn.team) {
            continue;
        }
        if last_move.piece != other {
            continue;
        }
        if victim.last_square() != Some((beside.0, from.1 + 2 * direction)) {
            continue;
        }
        moves.push(ChessMove {
            piece: id,
            from,
            to: (beside.0, from.1 + direction),
            captured: Some(other),
            kind: MoveKind::EnPassant {
                captured_square: beside,
            },
        });
    }

    Ok(moves)
}
