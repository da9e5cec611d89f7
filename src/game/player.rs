//! Players and their per-game piece sets.
//!
//! A player can take part in several concurrent games; for each one it keeps
//! the set of its pieces still in play. Starting the same game twice or
//! touching pieces of a game that was never started is a programmer error.

use std::collections::HashMap;

use crate::chess_errors::ChessErrors;
use crate::pieces::piece::PieceId;

/// Identifies one game across the players registered in it.
pub type GameId = u64;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    nickname: String,
    pieces: HashMap<GameId, Vec<PieceId>>,
}

impl Player {
    pub fn new(nickname: &str) -> Self {
        Player {
            nickname: nickname.to_string(),
            pieces: HashMap::new(),
        }
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn start_new_game(&mut self, game: GameId) -> Result<(), ChessErrors> {
        if self.pieces.contains_key(&game) {
            return Err(ChessErrors::GameAlreadyStarted);
        }
        self.pieces.insert(game, Vec::new());
        Ok(())
    }

    pub fn remove_game(&mut self, game: GameId) -> Result<(), ChessErrors> {
        if self.pieces.remove(&game).is_none() {
            return Err(ChessErrors::GameNotStarted);
        }
        Ok(())
    }

    pub fn add_piece(&mut self, game: GameId, piece: PieceId) -> Result<(), ChessErrors> {
        let in_play = self.pieces.get_mut(&game).ok_or(ChessErrors::GameNotStarted)?;
        if !in_play.contains(&piece) {
            in_play.push(piece);
        }
        Ok(())
    }

    pub fn remove_piece(&mut self, game: GameId, piece: PieceId) -> Result<(), ChessErrors> {
        let in_play = self.pieces.get_mut(&game).ok_or(ChessErrors::GameNotStarted)?;
        in_play.retain(|p| *p != piece);
        Ok(())
    }

    /// The player's pieces still in play, in insertion order.
    pub fn pieces(&self, game: GameId) -> Result<&Vec<PieceId>, ChessErrors> {
        self.pieces.get(&game).ok_or(ChessErrors::GameNotStarted)
    }

    /// Replaces the piece set wholesale (used when undoing moves or loading
    /// a previously captured state).
    pub fn set_pieces(&mut self, game: GameId, pieces: Vec<PieceId>) -> Result<(), ChessErrors> {
        if !self.pieces.contains_key(&game) {
            return Err(ChessErrors::GameNotStarted);
        }
        self.pieces.insert(game, pieces);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starting_a_game_twice_is_an_error() {
        let mut player = Player::new("casual");
        player.start_new_game(1).unwrap();
        assert!(matches!(
            player.start_new_game(1),
            Err(ChessErrors::GameAlreadyStarted)
        ));
        player.start_new_game(2).unwrap();
    }

    #[test]
    fn piece_bookkeeping_requires_a_started_game() {
        let mut player = Player::new("casual");
        assert!(matches!(player.add_piece(9, 0), Err(ChessErrors::GameNotStarted)));
        assert!(matches!(player.pieces(9), Err(ChessErrors::GameNotStarted)));
        assert!(matches!(
            player.set_pieces(9, vec![]),
            Err(ChessErrors::GameNotStarted)
        ));

        player.start_new_game(9).unwrap();
        player.add_piece(9, 3).unwrap();
        player.add_piece(9, 3).unwrap();
        assert_eq!(player.pieces(9).unwrap().as_slice(), &[3]);
        player.remove_piece(9, 3).unwrap();
        assert!(player.pieces(9).unwrap().is_empty());
    }
}
