//! Immutable captures of full game state.
//!
//! A snapshot is pushed immediately before a move is applied and popped by
//! undo. Cloning the whole piece board keeps every piece's square history and
//! cached move lists, so restoring a snapshot brings the engine back
//! bit-for-bit without recomputing anything.

use crate::board::piece_board::PieceBoard;
use crate::game::chess_move::ChessMove;
use crate::pieces::piece::PieceId;
use crate::pieces::piece_team::PieceTeam;

#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub(crate) board: PieceBoard,
    pub(crate) light_pieces: Vec<PieceId>,
    pub(crate) dark_pieces: Vec<PieceId>,
    pub(crate) current: PieceTeam,
    pub(crate) move_made: ChessMove,
}

impl GameSnapshot {
    pub(crate) fn new(
        board: PieceBoard,
        light_pieces: Vec<PieceId>,
        dark_pieces: Vec<PieceId>,
        current: PieceTeam,
        move_made: ChessMove,
    ) -> Self {
        GameSnapshot {
            board,
            light_pieces,
            dark_pieces,
            current,
            move_made,
        }
    }

    /// The move that was applied right after this snapshot was captured.
    pub fn move_made(&self) -> &ChessMove {
        &self.move_made
    }
}
