//! The piece record.
//!
//! A piece keeps its immutable identity name (`LQ0` style: team sign, kind
//! letter, per-kind ordinal), its current square, the stack of squares it
//! previously occupied, and its cached pseudo-legal and legal move lists.
//! The square field is only ever written by the board accessors in
//! `board::piece_board`, which keep the grid and the piece in sync.

use crate::board::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game::chess_move::ChessMove;
use crate::pieces::piece_class::PieceClass;
use crate::pieces::piece_team::PieceTeam;

/// Index of a piece in its game's piece arena.
pub type PieceId = usize;

#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    name: String,
    pub class: PieceClass,
    pub team: PieceTeam,
    square: Option<BoardLocation>,
    previous_squares: Vec<BoardLocation>,
    pub pseudo_legal_moves: Vec<ChessMove>,
    pub legal_moves: Vec<ChessMove>,
    own_king: Option<PieceId>,
}

impl Piece {
    pub fn new(name: String, class: PieceClass, team: PieceTeam) -> Self {
        Piece {
            name,
            class,
            team,
            square: None,
            previous_squares: Vec::new(),
            pseudo_legal_moves: Vec::new(),
            legal_moves: Vec::new(),
            own_king: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current square, or `None` once the piece has been captured.
    pub fn square(&self) -> Option<BoardLocation> {
        self.square
    }

    /// Whether the piece has ever left its setup square. Drives castling.
    pub fn has_moved(&self) -> bool {
        !self.previous_squares.is_empty()
    }

    /// The square occupied immediately before the most recent relocation.
    /// Drives the en passant window check.
    pub fn last_square(&self) -> Option<BoardLocation> {
        self.previous_squares.last().copied()
    }

    /// Assigns the king this piece must keep out of check. Set exactly once
    /// during setup; a second assignment is a programmer error.
    pub fn set_own_king(&mut self, king: PieceId) -> Result<(), ChessErrors> {
        if self.own_king.is_some() {
            return Err(ChessErrors::OwnKingAlreadySet);
        }
        self.own_king = Some(king);
        Ok(())
    }

    pub fn own_king(&self) -> Result<PieceId, ChessErrors> {
        self.own_king.ok_or(ChessErrors::OwnKingNotSet)
    }

    pub fn is_opponent_of(&self, team: PieceTeam) -> bool {
        self.team != team
    }

    /// Ordinal suffix of the name, e.g. 4 for `LQ4`. Promotion uses this to
    /// mint fresh queen names.
    pub fn name_ordinal(&self) -> Option<u32> {
        self.name.get(2..).and_then(|s| s.parse().ok())
    }

    pub(crate) fn set_square_raw(&mut self, square: Option<BoardLocation>) {
        self.square = square;
    }

    pub(crate) fn push_previous_square(&mut self, square: BoardLocation) {
        self.previous_squares.push(square);
    }

    pub(crate) fn pop_previous_square(&mut self) -> Option<BoardLocation> {
        self.previous_squares.pop()
    }
}
