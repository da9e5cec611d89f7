//! The two sides of the game.

/// The side a piece belongs to. Light moves first and marches up the ranks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceTeam {
    Light,
    Dark,
}

impl PieceTeam {
    pub fn opponent(self) -> PieceTeam {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }

    /// Forward direction for this team's pawns: +1 for Light, -1 for Dark.
    pub fn forward_direction(self) -> i8 {
        match self {
            PieceTeam::Light => 1,
            PieceTeam::Dark => -1,
        }
    }

    /// Rank the major pieces start on.
    pub fn back_rank(self) -> i8 {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 7,
        }
    }

    /// Rank the pawns start on.
    pub fn pawn_rank(self) -> i8 {
        match self {
            PieceTeam::Light => 1,
            PieceTeam::Dark => 6,
        }
    }

    /// Leading character of piece names on this side, e.g. the `L` in `LQ0`.
    pub fn sign(self) -> char {
        match self {
            PieceTeam::Light => 'L',
            PieceTeam::Dark => 'D',
        }
    }
}
