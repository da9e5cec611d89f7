//! Engine abstraction layer.
//!
//! A single trait interface so different move-selection strategies can be
//! swapped behind the match harness and the demo binary.

use crate::chess_errors::ChessErrors;
use crate::game::chess_game::ChessGame;
use crate::game::chess_move::ChessMove;
use crate::pieces::piece_team::PieceTeam;

pub trait Engine {
    fn name(&self) -> &str;

    /// The side this engine plays for.
    fn team(&self) -> PieceTeam;

    /// Selects a move for the engine's side without applying it. The game is
    /// borrowed mutably so strategies can search by applying and undoing
    /// moves; implementations must leave the game exactly as they found it.
    fn choose_move(&mut self, game: &mut ChessGame) -> Result<ChessMove, ChessErrors>;

    /// Chooses a move and applies it, returning what was played.
    fn play_one_move(&mut self, game: &mut ChessGame) -> Result<ChessMove, ChessErrors> {
        let chosen = self.choose_move(game)?;
        let _commit = game.apply_move(&chosen)?;
        Ok(chosen)
    }
}
