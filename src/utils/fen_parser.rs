//! FEN-to-game loader.
//!
//! Builds a fully wired game from a Forsyth-Edwards Notation string: pieces
//! placed and registered with their owners, own-king links assigned, castling
//! rights translated into moved-flags, and both sides' legal move caches
//! populated. The en passant, halfmove and fullmove fields are validated but
//! not replayed; a loaded position starts with empty history, so en passant
//! opportunities only arise from moves made after loading.

use crate::board::board_location::algebraic_to_location;
use crate::chess_errors::ChessErrors;
use crate::game::chess_game::ChessGame;
use crate::pieces::piece_class::PieceClass;
use crate::pieces::piece_team::PieceTeam;

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub fn game_from_fen(fen: &str) -> Result<ChessGame, ChessErrors> {
    let mut parts = fen.split_whitespace();
    let board_part = parts.next().ok_or(ChessErrors::InvalidFENstring)?;
    let side_part = parts.next().ok_or(ChessErrors::InvalidFENstring)?;
    let castling_part = parts.next().ok_or(ChessErrors::InvalidFENstring)?;
    let en_passant_part = parts.next().ok_or(ChessErrors::InvalidFENstring)?;
    let halfmove_part = parts.next().ok_or(ChessErrors::InvalidFENstring)?;
    let fullmove_part = parts.next().ok_or(ChessErrors::InvalidFENstring)?;
    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFENstring);
    }

    let mut game = ChessGame::new_empty("light", "dark")?;
    place_pieces(&mut game, board_part)?;
    game.assign_own_kings()?;

    match side_part {
        "w" => game.set_current(PieceTeam::Light),
        "b" => game.set_current(PieceTeam::Dark),
        _ => return Err(ChessErrors::InvalidFENstring),
    }

    apply_castling_rights(&mut game, castling_part)?;

    if en_passant_part != "-" {
        algebraic_to_location(en_passant_part)
            .map_err(|_| ChessErrors::InvalidFENstring)?;
    }
    halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFENstring)?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFENstring)?;

    game.refresh_all_legal_moves()?;
    Ok(game)
}

fn place_pieces(game: &mut ChessGame, board_part: &str) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFENstring);
    }

    // Per-team per-class counters keep the minted names unique.
    let mut counters = [[0u32; 6]; 2];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as i8;
        let mut file = 0i8;
        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFENstring);
                }
                file += empty_count as i8;
                continue;
            }
            let (team, class) =
                piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFENstring)?;
            if file >= 8 {
                return Err(ChessErrors::InvalidFENstring);
            }
            let counter = &mut counters[team_index(team)][class_index(class)];
            game.add_new_piece(class, team, *counter, (file, rank))?;
            *counter += 1;
            file += 1;
        }
        if file != 8 {
            return Err(ChessErrors::InvalidFENstring);
        }
    }

    for team in [PieceTeam::Light, PieceTeam::Dark] {
        if counters[team_index(team)][class_index(PieceClass::King)] != 1 {
            return Err(ChessErrors::InvalidFENstring);
        }
    }
    Ok(())
}

/// Translates FEN castling rights into moved-flags: a spent right is encoded
/// by marking the wing's rook (or the king, when both wings are gone) as
/// having moved. A king off its setup square is marked moved as well.
fn apply_castling_rights(game: &mut ChessGame, castling_part: &str) -> Result<(), ChessErrors> {
    let mut rights = [[false; 2]; 2];
    if castling_part != "-" {
        for ch in castling_part.chars() {
            match ch {
                'K' => rights[team_index(PieceTeam::Light)][0] = true,
                'Q' => rights[team_index(PieceTeam::Light)][1] = true,
                'k' => rights[team_index(PieceTeam::Dark)][0] = true,
                'q' => rights[team_index(PieceTeam::Dark)][1] = true,
                _ => return Err(ChessErrors::InvalidFENstring),
            }
        }
    }

    for team in [PieceTeam::Light, PieceTeam::Dark] {
        let back = team.back_rank();
        let king = game.get_king(team)?;
        if game.board().piece(king).square() != Some((4, back)) {
            game.mark_piece_moved(king)?;
            continue;
        }
        let side_rights = rights[team_index(team)];
        if !side_rights[0] && !side_rights[1] {
            game.mark_piece_moved(king)?;
            continue;
        }
        for (wing, rook_file) in [(0usize, 7i8), (1, 0)] {
            if side_rights[wing] {
                continue;
            }
            if let Some(rook) = game.board().occupant((rook_file, back)) {
                let piece = game.board().piece(rook);
                if piece.class == PieceClass::Rook && piece.team == team {
                    game.mark_piece_moved(rook)?;
                }
            }
        }
    }
    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<(PieceTeam, PieceClass)> {
    let team = if ch.is_ascii_uppercase() {
        PieceTeam::Light
    } else if ch.is_ascii_lowercase() {
        PieceTeam::Dark
    } else {
        return None;
    };
    let class = match ch.to_ascii_lowercase() {
        'p' => PieceClass::Pawn,
        'n' => PieceClass::Knight,
        'b' => PieceClass::Bishop,
        'r' => PieceClass::Rook,
        'q' => PieceClass::Queen,
        'k' => PieceClass::King,
        _ => return None,
    };
    Some((team, class))
}

fn team_index(team: PieceTeam) -> usize {
    match team {
        PieceTeam::Light => 0,
        PieceTeam::Dark => 1,
    }
}

fn class_index(class: PieceClass) -> usize {
    match class {
        PieceClass::Pawn => 0,
        PieceClass::Knight => 1,
        PieceClass::Bishop => 2,
        PieceClass::Rook => 3,
        PieceClass::Queen => 4,
        PieceClass::King => 5,
    }
}
