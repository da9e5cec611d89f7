//! Fixed-depth exhaustive negamax engine.
//!
//! Visits every legal move to a fixed depth with no pruning, scoring leaves
//! with the material-plus-mobility evaluation. Because the evaluation is
//! zero-sum between the two sides, a child's score from the opponent's
//! perspective negates into the parent's. Terminal positions short-circuit:
//! checkmate against the side to move scores the full checkmate value,
//! stalemate scores zero.

use std::time::{Duration, Instant};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::Engine;
use crate::engines::scoring::{evaluate_position, Score, CHECK_MATE_VALUE};
use crate::game::chess_game::ChessGame;
use crate::game::chess_move::ChessMove;
use crate::pieces::piece_team::PieceTeam;

/// Plies searched below each root move.
pub const RECURSION_DEPTH: u32 = 2;

/// Counters from the most recent search, for logs and benches.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub moves_calculated: u64,
    pub leaf_nodes: u64,
    pub elapsed: Duration,
}

pub struct NegamaxEngine {
    team: PieceTeam,
    depth: u32,
    stats: SearchStats,
}

impl NegamaxEngine {
    pub fn new(team: PieceTeam) -> Self {
        Self::with_depth(team, RECURSION_DEPTH)
    }

    pub fn with_depth(team: PieceTeam, depth: u32) -> Self {
        NegamaxEngine {
            team,
            depth,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Scores the position after the side to move plays out `depth` more
    /// plies, from that side's perspective.
    fn negamax(&mut self, game: &mut ChessGame, depth: u32) -> Result<Score, ChessErrors> {
        let side = game.current_turn();
        if game.is_checkmate(side)? {
            return Ok(-CHECK_MATE_VALUE);
        }
        if game.is_stalemate(side)? {
            return Ok(0.0);
        }
        if depth == 0 {
            self.stats.leaf_nodes += 1;
            return evaluate_position(game, side);
        }

        let mut best = -CHECK_MATE_VALUE;
        for mv in game.legal_moves_for_team(side)? {
            self.stats.moves_calculated += 1;
            let commit = game.apply_move(&mv)?;
            let score = -self.negamax(game, depth - 1)?;
            game.undo_move(commit)?;
            if score > best {
                best = score;
            }
        }
        Ok(best)
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Gambit Negamax"
    }

    fn team(&self) -> PieceTeam {
        self.team
    }

    fn choose_move(&mut self, game: &mut ChessGame) -> Result<ChessMove, ChessErrors> {
        if game.current_turn() != self.team {
            return Err(ChessErrors::NotEnginesTurn);
        }
        let legal_moves = game.legal_moves_for_team(self.team)?;
        if legal_moves.is_empty() {
            return Err(ChessErrors::NoLegalMoves);
        }

        self.stats = SearchStats::default();
        let started = Instant::now();

        // The first legal move doubles as the fallback: it stays chosen
        // unless a later move scores strictly better.
        let mut best_move = legal_moves[0].clone();
        let mut best_score = -CHECK_MATE_VALUE - 1.0;
        for mv in legal_moves {
            self.stats.moves_calculated += 1;
            let commit = game.apply_move(&mv)?;
            let score = -self.negamax(game, self.depth)?;
            game.undo_move(commit)?;
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        self.stats.elapsed = started.elapsed();
        Ok(best_move)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::fen_parser::game_from_fen;

    #[test]
    fn refuses_to_move_for_the_other_side() {
        let mut game = ChessGame::new("light", "dark").unwrap();
        let mut engine = NegamaxEngine::new(PieceTeam::Dark);
        assert!(matches!(
            engine.choose_move(&mut game),
            Err(ChessErrors::NotEnginesTurn)
        ));
    }

    #[test]
    fn search_leaves_the_game_untouched() {
        let mut game = ChessGame::new("light", "dark").unwrap();
        let before = game.clone();
        let mut engine = NegamaxEngine::with_depth(PieceTeam::Light, 1);
        engine.choose_move(&mut game).unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn finds_mate_in_one() {
        // Ra8 is the only mating move.
        let mut game = game_from_fen("7k/6pp/8/8/8/8/8/R6K w - - 0 1").unwrap();
        let mut engine = NegamaxEngine::new(PieceTeam::Light);
        let chosen = engine.choose_move(&mut game).unwrap();
        assert_eq!(chosen.to_long_algebraic(), "a1a8");
        assert!(engine.stats().moves_calculated > 0);
    }

    #[test]
    fn grabs_a_hanging_queen() {
        // Dark queen undefended on h4, checking the light king; capturing it
        // with the rook is the clear material gain.
        let mut game = game_from_fen("7k/8/8/8/R6q/8/8/7K w - - 0 1").unwrap();
        let mut engine = NegamaxEngine::with_depth(PieceTeam::Light, 1);
        let chosen = engine.choose_move(&mut game).unwrap();
        assert_eq!(chosen.to_long_algebraic(), "a4h4");
    }

    #[test]
    fn stalemated_engine_reports_no_legal_moves() {
        let mut game = game_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut engine = NegamaxEngine::new(PieceTeam::Dark);
        assert!(matches!(
            engine.choose_move(&mut game),
            Err(ChessErrors::NoLegalMoves)
        ));
    }
}
