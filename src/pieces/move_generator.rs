//! Pseudo-legal move dispatch and the "square attacked" query.
//!
//! Pseudo-legal moves follow a piece's movement geometry and ignore whether
//! the mover's own king would be left in check; the legality filter in
//! `game::chess_game` prunes them afterwards. Attack detection regenerates
//! opposing moves from the current board every time it is asked. Cached move
//! lists are check-filtered and may be stale mid-speculation, so they are
//! never consulted here. Castling and en passant are left out of the
//! attack-detection set: castling never captures, and an en passant target
//! square can never hold a king.

use crate::board::board_location::{offset_location, BoardLocation};
use crate::board::piece_board::PieceBoard;
use crate::chess_errors::ChessErrors;
use crate::game::chess_game::ChessGame;
use crate::game::chess_move::{ChessMove, MoveKind};
use crate::pieces::bishop_moves::bishop_moves;
use crate::pieces::king_moves::{king_castling_moves, king_step_moves};
use crate::pieces::knight_moves::knight_moves;
use crate::pieces::pawn_moves::{pawn_basic_moves, pawn_en_passant_moves};
use crate::pieces::piece::PieceId;
use crate::pieces::piece_class::PieceClass;
use crate::pieces::piece_team::PieceTeam;
use crate::pieces::queen_moves::queen_moves;
use crate::pieces::rook_moves::rook_moves;

/// Generates the full pseudo-legal move set for one piece, including the
/// special moves (castling, en passant) that need game history.
pub fn generate_pseudo_legal_moves(
    game: &ChessGame,
    id: PieceId,
) -> Result<Vec<ChessMove>, ChessErrors> {
    let board = game.board();
    match board.piece(id).class {
        PieceClass::Pawn => {
            let mut moves = pawn_basic_moves(board, id)?;
            moves.extend(pawn_en_passant_moves(game, id)?);
            Ok(moves)
        }
        PieceClass::Knight => knight_moves(board, id),
        PieceClass::Bishop => bishop_moves(board, id),
        PieceClass::Rook => rook_moves(board, id),
        PieceClass::Queen => queen_moves(board, id),
        PieceClass::King => {
            let mut moves = king_step_moves(board, id)?;
            moves.extend(king_castling_moves(board, id)?);
            Ok(moves)
        }
    }
}

/// The moves a piece can reach on the current board, for attack detection.
fn reachable_moves(board: &PieceBoard, id: PieceId) -> Result<Vec<ChessMove>, ChessErrors> {
    match board.piece(id).class {
        PieceClass::Pawn => pawn_basic_moves(board, id),
        PieceClass::Knight => knight_moves(board, id),
        PieceClass::Bishop => bishop_moves(board, id),
        PieceClass::Rook => rook_moves(board, id),
        PieceClass::Queen => queen_moves(board, id),
        PieceClass::King => king_step_moves(board, id),
    }
}

/// Whether any of `team`'s on-board pieces can reach `target`, regenerated
/// fresh from the current board configuration.
pub fn can_team_reach_square(
    board: &PieceBoard,
    team: PieceTeam,
    target: BoardLocation,
) -> Result<bool, ChessErrors> {
    for (_, id) in board.occupied_squares() {
        if board.piece(id).team != team {
            continue;
        }
        for candidate in reachable_moves(board, id)? {
            if candidate.to == target {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Walks each ray square by square until the board edge, an own piece
/// (stop, excluded) or an enemy piece (capture, then stop).
pub(crate) fn ray_moves(
    board: &PieceBoard,
    id: PieceId,
    directions: &[(i8, i8)],
) -> Result<Vec<ChessMove>, ChessErrors> {
    let piece = board.piece(id);
    let from = piece.square().ok_or(ChessErrors::PieceNotOnBoard(id))?;
    let mut moves = Vec::new();
    for &(d_file, d_rank) in directions {
        let mut cursor = from;
        while let Ok(next) = offset_location(cursor, d_file, d_rank) {
            match board.occupant(next) {
                None => {
                    moves.push(regular_move(id, from, next, None));
                    cursor = next;
                }
                Some(other) => {
                    if board.piece(other).is_opponent_of(piece.team) {
                        moves.push(regular_move(id, from, next, Some(other)));
                    }
                    break;
                }
            }
        }
    }
    Ok(moves)
}

/// Fixed-offset destinations, each included unless held by an own piece.
pub(crate) fn offset_moves(
    board: &PieceBoard,
    id: PieceId,
    offsets: &[(i8, i8)],
) -> Result<Vec<ChessMove>, ChessErrors> {
    let piece = board.piece(id);
    let from = piece.square().ok_or(ChessErrors::PieceNotOnBoard(id))?;
    let mut moves = Vec::new();
    for &(d_file, d_rank) in offsets {
        let Ok(to) = offset_location(from, d_file, d_rank) else {
            continue;
        };
        match board.occupant(to) {
            None => moves.push(regular_move(id, from, to, None)),
            Some(other) => {
                if board.piece(other).is_opponent_of(piece.team) {
                    moves.push(regular_move(id, from, to, Some(other)));
                }
            }
        }
    }
    Ok(moves)
}

pub(crate) fn regular_move(
    piece: PieceId,
    from: BoardLocation,
    to: BoardLocation,
    captured: Option<PieceId>,
) -> ChessMove {
    ChessMove {
        piece,
        from,
        to,
        captured,
        kind: MoveKind::Regular,
    }
}
