//! Tagged move representation.
//!
//! A move always carries the moving piece, its origin and target squares and
//! the captured piece when there is one. The kind tag adds the data the two
//! special moves need: en passant captures a pawn standing on a square other
//! than the move target, and castling relocates a second piece (the rook).
//! Promotion is not a move kind; it is a side effect applied when a pawn's
//! regular move reaches the terminal rank.

use crate::board::board_location::{location_to_algebraic, BoardLocation};
use crate::pieces::piece::PieceId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// A plain relocation or capture onto the target square.
    Regular,
    /// Captures the pawn on `captured_square`, which differs from the target.
    EnPassant { captured_square: BoardLocation },
    /// Relocates the rook alongside the king. Never captures.
    Castling {
        rook: PieceId,
        rook_from: BoardLocation,
        rook_to: BoardLocation,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessMove {
    /// The moving piece. For castling this is the king.
    pub piece: PieceId,
    pub from: BoardLocation,
    pub to: BoardLocation,
    /// The piece removed from play by this move, if any.
    pub captured: Option<PieceId>,
    pub kind: MoveKind,
}

impl ChessMove {
    pub fn captures_piece(&self) -> bool {
        self.captured.is_some()
    }

    /// Long algebraic rendering such as `"e2e4"`, used for logs and tests.
    pub fn to_long_algebraic(&self) -> String {
        format!(
            "{}{}",
            location_to_algebraic(self.from),
            location_to_algebraic(self.to)
        )
    }
}
