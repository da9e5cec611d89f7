//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the demo
//! binary.

use crate::game::chess_game::ChessGame;
use crate::pieces::piece_class::PieceClass;
use crate::pieces::piece_team::PieceTeam;

/// Render the board to a Unicode string for terminal output, rank 8 at the
/// top so Light plays upward.
pub fn render_game_state(game: &ChessGame) -> String {
    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for rank in (0..8i8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');
        for file in 0..8i8 {
            match game.board().occupant((file, rank)) {
                Some(id) => {
                    let piece = game.board().piece(id);
                    out.push(piece_to_unicode(piece.team, piece.class));
                }
                None => out.push('·'),
            }
            if file < 7 {
                out.push(' ');
            }
        }
        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

fn piece_to_unicode(team: PieceTeam, class: PieceClass) -> char {
    match (team, class) {
        (PieceTeam::Light, PieceClass::Pawn) => '♙',
        (PieceTeam::Light, PieceClass::Knight) => '♘',
        (PieceTeam::Light, PieceClass::Bishop) => '♗',
        (PieceTeam::Light, PieceClass::Rook) => '♖',
        (PieceTeam::Light, PieceClass::Queen) => '♕',
        (PieceTeam::Light, PieceClass::King) => '♔',
        (PieceTeam::Dark, PieceClass::Pawn) => '♟',
        (PieceTeam::Dark, PieceClass::Knight) => '♞',
        (PieceTeam::Dark, PieceClass::Bishop) => '♝',
        (PieceTeam::Dark, PieceClass::Rook) => '♜',
        (PieceTeam::Dark, PieceClass::Queen) => '♛',
        (PieceTeam::Dark, PieceClass::King) => '♚',
    }
}
