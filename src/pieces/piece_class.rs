//! The six piece kinds.

/// Represents the type (class) of a chess piece.
/// Used to distinguish between pawns, knights, bishops, rooks, queens, and kings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceClass {
    /// Middle character of piece names, e.g. the `Q` in `LQ0`.
    pub fn letter(self) -> char {
        match self {
            PieceClass::Pawn => 'P',
            PieceClass::Knight => 'N',
            PieceClass::Bishop => 'B',
            PieceClass::Rook => 'R',
            PieceClass::Queen => 'Q',
            PieceClass::King => 'K',
        }
    }
}
