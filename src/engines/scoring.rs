//! Position evaluation.
//!
//! A side's score is its material plus a small mobility term counted over its
//! pseudo-legal moves. The evaluation of a position is the side-to-move's
//! score minus the opponent's, so it is zero-sum and negates cleanly between
//! plies of the search.

use crate::chess_errors::ChessErrors;
use crate::game::chess_game::ChessGame;
use crate::pieces::piece_class::PieceClass;
use crate::pieces::piece_team::PieceTeam;

pub type Score = f64;

/// Score awarded for delivering checkmate. Large enough to dominate any
/// material swing a two-ply search can see.
pub const CHECK_MATE_VALUE: Score = 1000.0;

/// Weight of one pseudo-legal move in the mobility term.
pub const MOBILITY_VALUE: Score = 0.05;

/// Material worth of one piece. The king carries none; losing it is scored
/// through the checkmate value instead.
pub fn piece_value(class: PieceClass) -> Score {
    match class {
        PieceClass::Pawn => 1.0,
        PieceClass::Knight => 3.0,
        PieceClass::Bishop => 3.0,
        PieceClass::Rook => 5.0,
        PieceClass::Queen => 9.0,
        PieceClass::King => 0.0,
    }
}

/// Evaluates the position from `perspective`: own material and mobility minus
/// the opponent's. Reads the cached pseudo-legal moves, which are current for
/// both sides after every applied move.
pub fn evaluate_position(game: &ChessGame, perspective: PieceTeam) -> Result<Score, ChessErrors> {
    Ok(team_score(game, perspective)? - team_score(game, perspective.opponent())?)
}

fn team_score(game: &ChessGame, team: PieceTeam) -> Result<Score, ChessErrors> {
    let mut score = 0.0;
    for id in game.player(team).pieces(game.id())? {
        let piece = game.board().piece(*id);
        score += piece_value(piece.class);
        score += MOBILITY_VALUE * piece.pseudo_legal_moves.len() as Score;
    }
    Ok(score)
}
