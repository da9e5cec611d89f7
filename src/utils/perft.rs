//! Legal-move path counting for correctness checks.
//!
//! Counts the leaf positions reachable in exactly `depth` plies, which pins
//! down move generation, the legality filter, and the apply/undo round trip
//! against well-known reference values.

use crate::chess_errors::ChessErrors;
use crate::game::chess_game::ChessGame;

pub fn perft(game: &mut ChessGame, depth: u32) -> Result<u64, ChessErrors> {
    if depth == 0 {
        return Ok(1);
    }
    let mut nodes = 0;
    for mv in game.legal_moves_for_team(game.current_turn())? {
        let commit = game.apply_move(&mv)?;
        nodes += perft(game, depth - 1)?;
        game.undo_move(commit)?;
    }
    Ok(nodes)
}
