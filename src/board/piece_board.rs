//! The board: an 8×8 grid of piece ids plus the piece arena.
//!
//! Every square holds at most one piece id and every on-board piece knows its
//! square; the accessors here are the only place either side is written, so
//! the two references can never disagree. Relocations and removals push the
//! vacated square onto the piece's history stack and the matching `undo_*`
//! accessors pop it, which is what the exact-inverse rollback in
//! `game::chess_game` is built from.

use crate::board::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::pieces::piece::{Piece, PieceId};
use crate::pieces::piece_team::PieceTeam;

#[derive(Clone, Debug, PartialEq)]
pub struct PieceBoard {
    grid: [[Option<PieceId>; 8]; 8],
    pieces: Vec<Piece>,
}

impl PieceBoard {
    pub fn new() -> Self {
        PieceBoard {
            grid: [[None; 8]; 8],
            pieces: Vec::new(),
        }
    }

    pub fn occupant(&self, x: BoardLocation) -> Option<PieceId> {
        self.grid[x.0 as usize][x.1 as usize]
    }

    pub fn has_piece(&self, x: BoardLocation) -> bool {
        self.occupant(x).is_some()
    }

    pub fn has_own_piece(&self, x: BoardLocation, team: PieceTeam) -> bool {
        match self.occupant(x) {
            Some(id) => self.piece(id).team == team,
            None => false,
        }
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id]
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id]
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// All on-board pieces with their squares, in grid order.
    pub fn occupied_squares(&self) -> Vec<(BoardLocation, PieceId)> {
        let mut result = Vec::new();
        for file in 0..8 {
            for rank in 0..8 {
                if let Some(id) = self.grid[file as usize][rank as usize] {
                    result.push(((file, rank), id));
                }
            }
        }
        result
    }

    /// Introduces a new piece on an empty square and returns its id.
    pub fn add_piece(
        &mut self,
        mut piece: Piece,
        x: BoardLocation,
    ) -> Result<PieceId, ChessErrors> {
        if self.has_piece(x) {
            return Err(ChessErrors::BoardLocationOccupied(x));
        }
        let id = self.pieces.len();
        piece.set_square_raw(Some(x));
        self.pieces.push(piece);
        self.grid[x.0 as usize][x.1 as usize] = Some(id);
        Ok(id)
    }

    /// Moves a piece to an empty square, recording the vacated square on the
    /// piece's history stack. Captures must be removed before relocating.
    pub(crate) fn relocate(&mut self, id: PieceId, to: BoardLocation) -> Result<(), ChessErrors> {
        let from = self
            .piece(id)
            .square()
            .ok_or(ChessErrors::PieceNotOnBoard(id))?;
        if self.has_piece(to) {
            return Err(ChessErrors::BoardLocationOccupied(to));
        }
        self.grid[from.0 as usize][from.1 as usize] = None;
        self.grid[to.0 as usize][to.1 as usize] = Some(id);
        let piece = self.piece_mut(id);
        piece.push_previous_square(from);
        piece.set_square_raw(Some(to));
        Ok(())
    }

    /// Exact inverse of `relocate`: pops the piece's history stack and moves
    /// it back there.
    pub(crate) fn undo_relocate(&mut self, id: PieceId) -> Result<(), ChessErrors> {
        let at = self
            .piece(id)
            .square()
            .ok_or(ChessErrors::PieceNotOnBoard(id))?;
        let previous = self
            .piece_mut(id)
            .pop_previous_square()
            .ok_or(ChessErrors::NoPreviousMoves(id))?;
        self.grid[at.0 as usize][at.1 as usize] = None;
        self.grid[previous.0 as usize][previous.1 as usize] = Some(id);
        self.piece_mut(id).set_square_raw(Some(previous));
        Ok(())
    }

    /// Detaches a captured piece from its square. The vacated square is
    /// recorded so `undo_remove` can reinsert the piece exactly where it stood.
    pub(crate) fn remove_from_board(&mut self, id: PieceId) -> Result<(), ChessErrors> {
        let at = self
            .piece(id)
            .square()
            .ok_or(ChessErrors::PieceNotOnBoard(id))?;
        self.grid[at.0 as usize][at.1 as usize] = None;
        let piece = self.piece_mut(id);
        piece.push_previous_square(at);
        piece.set_square_raw(None);
        Ok(())
    }

    /// Exact inverse of `remove_from_board`.
    pub(crate) fn undo_remove(&mut self, id: PieceId) -> Result<(), ChessErrors> {
        let previous = self
            .piece_mut(id)
            .pop_previous_square()
            .ok_or(ChessErrors::NoPreviousMoves(id))?;
        if self.has_piece(previous) {
            return Err(ChessErrors::BoardLocationOccupied(previous));
        }
        self.grid[previous.0 as usize][previous.1 as usize] = Some(id);
        self.piece_mut(id).set_square_raw(Some(previous));
        Ok(())
    }

    /// Deletes the most recently added piece. Only valid for the piece
    /// created last (promotion reverts are strictly LIFO).
    pub(crate) fn discard_newest_piece(&mut self, id: PieceId) -> Result<(), ChessErrors> {
        if id + 1 != self.pieces.len() {
            return Err(ChessErrors::MismatchedUndo);
        }
        let Some(piece) = self.pieces.pop() else {
            return Err(ChessErrors::MismatchedUndo);
        };
        if let Some(at) = piece.square() {
            self.grid[at.0 as usize][at.1 as usize] = None;
        }
        Ok(())
    }

    /// Marks a piece as having moved without relocating it. Used when loading
    /// fixtures whose castling rights are already spent.
    pub(crate) fn mark_piece_moved(&mut self, id: PieceId) -> Result<(), ChessErrors> {
        let at = self
            .piece(id)
            .square()
            .ok_or(ChessErrors::PieceNotOnBoard(id))?;
        self.piece_mut(id).push_previous_square(at);
        Ok(())
    }
}

impl Default for PieceBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pieces::piece_class::PieceClass;

    fn rook() -> Piece {
        Piece::new("LR0".to_string(), PieceClass::Rook, PieceTeam::Light)
    }

    #[test]
    fn grid_and_piece_stay_in_sync() {
        let mut board = PieceBoard::new();
        let id = board.add_piece(rook(), (0, 0)).unwrap();
        assert_eq!(board.occupant((0, 0)), Some(id));
        assert_eq!(board.piece(id).square(), Some((0, 0)));

        board.relocate(id, (0, 5)).unwrap();
        assert_eq!(board.occupant((0, 0)), None);
        assert_eq!(board.occupant((0, 5)), Some(id));
        assert_eq!(board.piece(id).square(), Some((0, 5)));
        assert!(board.piece(id).has_moved());

        board.undo_relocate(id).unwrap();
        assert_eq!(board.occupant((0, 0)), Some(id));
        assert!(!board.piece(id).has_moved());
    }

    #[test]
    fn occupied_target_is_rejected() {
        let mut board = PieceBoard::new();
        let id = board.add_piece(rook(), (0, 0)).unwrap();
        assert!(matches!(
            board.add_piece(rook(), (0, 0)),
            Err(ChessErrors::BoardLocationOccupied(_))
        ));
        assert!(matches!(
            board.relocate(id, (0, 0)),
            Err(ChessErrors::BoardLocationOccupied(_))
        ));
    }

    #[test]
    fn rewinding_an_unmoved_piece_is_an_error() {
        let mut board = PieceBoard::new();
        let id = board.add_piece(rook(), (3, 3)).unwrap();
        assert!(matches!(
            board.undo_relocate(id),
            Err(ChessErrors::NoPreviousMoves(_))
        ));
    }

    #[test]
    fn remove_and_undo_remove_round_trip() {
        let mut board = PieceBoard::new();
        let id = board.add_piece(rook(), (2, 2)).unwrap();
        board.remove_from_board(id).unwrap();
        assert_eq!(board.occupant((2, 2)), None);
        assert_eq!(board.piece(id).square(), None);
        board.undo_remove(id).unwrap();
        assert_eq!(board.occupant((2, 2)), Some(id));
        assert_eq!(board.piece(id).square(), Some((2, 2)));
    }
}
