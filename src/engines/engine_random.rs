//! Random-move engine.
//!
//! Selects uniformly from the legal moves and is used as a weak sparring
//! partner in match play and as a driver for integration tests.

use rand::prelude::IndexedRandom;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::Engine;
use crate::game::chess_game::ChessGame;
use crate::game::chess_move::ChessMove;
use crate::pieces::piece_team::PieceTeam;

pub struct RandomEngine {
    team: PieceTeam,
}

impl RandomEngine {
    pub fn new(team: PieceTeam) -> Self {
        RandomEngine { team }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Gambit Random"
    }

    fn team(&self) -> PieceTeam {
        self.team
    }

    fn choose_move(&mut self, game: &mut ChessGame) -> Result<ChessMove, ChessErrors> {
        if game.current_turn() != self.team {
            return Err(ChessErrors::NotEnginesTurn);
        }
        let legal_moves = game.legal_moves_for_team(self.team)?;
        let mut rng = rand::rng();
        legal_moves
            .as_slice()
            .choose(&mut rng)
            .cloned()
            .ok_or(ChessErrors::NoLegalMoves)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn picks_a_legal_opening_move() {
        let mut game = ChessGame::new("light", "dark").unwrap();
        let legal = game.legal_moves_for_team(PieceTeam::Light).unwrap();
        let mut engine = RandomEngine::new(PieceTeam::Light);
        let chosen = engine.choose_move(&mut game).unwrap();
        assert!(legal.contains(&chosen));
    }

    #[test]
    fn plays_a_move_when_asked() {
        let mut game = ChessGame::new("light", "dark").unwrap();
        let mut engine = RandomEngine::new(PieceTeam::Light);
        let played = engine.play_one_move(&mut game).unwrap();
        assert_eq!(game.last_move_made(), Some(&played));
        assert_eq!(game.current_turn(), PieceTeam::Dark);
    }
}
