//! The game orchestrator.
//!
//! `ChessGame` owns the board and both players' piece sets and is the only
//! place that mutates them. Speculative execution (the legality filter) goes
//! through the exact-inverse `execute`/`revert` pair; committed moves go
//! through `apply_move`, which snapshots the full state first and hands back
//! a token that `undo_move` redeems in stack order. The search drives the
//! same apply/undo pair, so there is a single rollback path everywhere.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::board::board_location::BoardLocation;
use crate::board::piece_board::PieceBoard;
use crate::chess_errors::ChessErrors;
use crate::game::chess_move::{ChessMove, MoveKind};
use crate::game::game_snapshot::GameSnapshot;
use crate::game::player::{GameId, Player};
use crate::pieces::move_generator::{can_team_reach_square, generate_pseudo_legal_moves};
use crate::pieces::piece::{Piece, PieceId};
use crate::pieces::piece_class::PieceClass;
use crate::pieces::piece_team::PieceTeam;

static NEXT_GAME_ID: AtomicU64 = AtomicU64::new(1);

/// Proof that a move was applied; redeemed by `undo_move`. Tokens must be
/// consumed in reverse application order, which keeps the apply/undo pairing
/// of recursive search balanced by construction.
#[must_use]
#[derive(Debug)]
pub struct MoveToken {
    ply: usize,
}

/// Exact inverse of one `execute` call. Private to the orchestrator: the
/// legality filter is its only consumer.
struct MoveUndo {
    mv: ChessMove,
    promoted_queen: Option<PieceId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChessGame {
    id: GameId,
    board: PieceBoard,
    light: Player,
    dark: Player,
    current: PieceTeam,
    history: Vec<GameSnapshot>,
}

impl ChessGame {
    /// New game with the standard starting formation. Light moves first.
    pub fn new(light_nickname: &str, dark_nickname: &str) -> Result<Self, ChessErrors> {
        let mut game = Self::new_empty(light_nickname, dark_nickname)?;
        game.initialize_board()?;
        Ok(game)
    }

    /// New game with an empty board; fixture loaders place pieces themselves.
    pub(crate) fn new_empty(
        light_nickname: &str,
        dark_nickname: &str,
    ) -> Result<Self, ChessErrors> {
        let id = NEXT_GAME_ID.fetch_add(1, Ordering::Relaxed);
        let mut light = Player::new(light_nickname);
        let mut dark = Player::new(dark_nickname);
        light.start_new_game(id)?;
        dark.start_new_game(id)?;
        Ok(ChessGame {
            id,
            board: PieceBoard::new(),
            light,
            dark,
            current: PieceTeam::Light,
            history: Vec::new(),
        })
    }

    fn initialize_board(&mut self) -> Result<(), ChessErrors> {
        for team in [PieceTeam::Light, PieceTeam::Dark] {
            let back = team.back_rank();
            let pawn_rank = team.pawn_rank();
            for file in 0..8i8 {
                self.add_new_piece(PieceClass::Pawn, team, file as u32, (file, pawn_rank))?;
            }
            for (ordinal, file) in [0i8, 7].into_iter().enumerate() {
                self.add_new_piece(PieceClass::Rook, team, ordinal as u32, (file, back))?;
            }
            for (ordinal, file) in [1i8, 6].into_iter().enumerate() {
                self.add_new_piece(PieceClass::Knight, team, ordinal as u32, (file, back))?;
            }
            for (ordinal, file) in [2i8, 5].into_iter().enumerate() {
                self.add_new_piece(PieceClass::Bishop, team, ordinal as u32, (file, back))?;
            }
            self.add_new_piece(PieceClass::Queen, team, 0, (3, back))?;
            self.add_new_piece(PieceClass::King, team, 0, (4, back))?;
        }
        self.assign_own_kings()?;
        self.refresh_all_legal_moves()?;
        Ok(())
    }

    /// Creates a piece, places it, and registers it with its owner.
    pub(crate) fn add_new_piece(
        &mut self,
        class: PieceClass,
        team: PieceTeam,
        ordinal: u32,
        at: BoardLocation,
    ) -> Result<PieceId, ChessErrors> {
        let name = format!("{}{}{}", team.sign(), class.letter(), ordinal);
        let id = self.board.add_piece(Piece::new(name, class, team), at)?;
        let game = self.id;
        self.player_mut(team).add_piece(game, id)?;
        Ok(id)
    }

    /// Points every piece at its own king. Called exactly once after setup.
    pub(crate) fn assign_own_kings(&mut self) -> Result<(), ChessErrors> {
        for team in [PieceTeam::Light, PieceTeam::Dark] {
            let king = self.get_king(team)?;
            let ids = self.player(team).pieces(self.id)?.clone();
            for id in ids {
                self.board.piece_mut(id).set_own_king(king)?;
            }
        }
        Ok(())
    }

    pub(crate) fn refresh_all_legal_moves(&mut self) -> Result<(), ChessErrors> {
        self.update_legal_moves_for_team(PieceTeam::Light)?;
        self.update_legal_moves_for_team(PieceTeam::Dark)?;
        Ok(())
    }

    pub(crate) fn set_current(&mut self, team: PieceTeam) {
        self.current = team;
    }

    pub(crate) fn mark_piece_moved(&mut self, id: PieceId) -> Result<(), ChessErrors> {
        self.board.mark_piece_moved(id)
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn board(&self) -> &PieceBoard {
        &self.board
    }

    pub fn current_turn(&self) -> PieceTeam {
        self.current
    }

    pub fn player(&self, team: PieceTeam) -> &Player {
        match team {
            PieceTeam::Light => &self.light,
            PieceTeam::Dark => &self.dark,
        }
    }

    fn player_mut(&mut self, team: PieceTeam) -> &mut Player {
        match team {
            PieceTeam::Light => &mut self.light,
            PieceTeam::Dark => &mut self.dark,
        }
    }

    /// Ids of the pieces the given side still has in play, insertion order.
    pub fn pieces_in_play(&self, team: PieceTeam) -> Result<Vec<PieceId>, ChessErrors> {
        Ok(self.player(team).pieces(self.id)?.clone())
    }

    pub fn history(&self) -> &[GameSnapshot] {
        &self.history
    }

    /// The most recently applied move, read off the top of the history.
    pub fn last_move_made(&self) -> Option<&ChessMove> {
        self.history.last().map(|snapshot| &snapshot.move_made)
    }

    /// Finds the given side's king in its piece set.
    pub fn get_king(&self, team: PieceTeam) -> Result<PieceId, ChessErrors> {
        for id in self.player(team).pieces(self.id)? {
            if self.board.piece(*id).class == PieceClass::King {
                return Ok(*id);
            }
        }
        Err(ChessErrors::PlayerHasNoKing)
    }

    /// Whether the given king's square is reachable by any opposing piece,
    /// regenerated from the current board.
    pub fn is_checked(&self, king: PieceId) -> Result<bool, ChessErrors> {
        let piece = self.board.piece(king);
        let square = piece.square().ok_or(ChessErrors::PieceNotOnBoard(king))?;
        can_team_reach_square(&self.board, piece.team.opponent(), square)
    }

    /// Current cached legal moves of one piece, for UI highlighting.
    pub fn legal_moves_for(&self, id: PieceId) -> &[ChessMove] {
        &self.board.piece(id).legal_moves
    }

    /// Cached legal moves of a whole side, flattened in piece-set order.
    pub fn legal_moves_for_team(&self, team: PieceTeam) -> Result<Vec<ChessMove>, ChessErrors> {
        let mut moves = Vec::new();
        for id in self.player(team).pieces(self.id)? {
            moves.extend(self.board.piece(*id).legal_moves.iter().cloned());
        }
        Ok(moves)
    }

    // ---- legality filter -------------------------------------------------

    /// Recomputes one piece's pseudo-legal moves and filters them down to the
    /// legal subset by speculatively executing each and testing whether the
    /// mover's own king ends up attacked.
    pub fn update_legal_moves_for_piece(&mut self, id: PieceId) -> Result<(), ChessErrors> {
        let pseudo = generate_pseudo_legal_moves(self, id)?;
        self.board.piece_mut(id).pseudo_legal_moves = pseudo.clone();
        let own_king = self.board.piece(id).own_king()?;
        let mut legal = Vec::new();
        for mv in pseudo {
            if self.test_if_legal_move(&mv, own_king)? {
                legal.push(mv);
            }
        }
        self.board.piece_mut(id).legal_moves = legal;
        Ok(())
    }

    pub fn update_legal_moves_for_team(&mut self, team: PieceTeam) -> Result<(), ChessErrors> {
        let ids = self.player(team).pieces(self.id)?.clone();
        for id in ids {
            self.update_legal_moves_for_piece(id)?;
        }
        Ok(())
    }

    fn test_if_legal_move(
        &mut self,
        mv: &ChessMove,
        own_king: PieceId,
    ) -> Result<bool, ChessErrors> {
        let undo = self.execute(mv)?;
        let is_legal = !self.is_checked(own_king)?;
        self.revert(undo)?;
        Ok(is_legal)
    }

    // ---- move execution and rollback --------------------------------------

    /// Applies a move's board and piece-set side effects. The returned value
    /// is the exact inverse; `revert` consumes it.
    fn execute(&mut self, mv: &ChessMove) -> Result<MoveUndo, ChessErrors> {
        let mut promoted_queen = None;
        match &mv.kind {
            MoveKind::Castling { rook, rook_to, .. } => {
                self.board.relocate(mv.piece, mv.to)?;
                self.board.relocate(*rook, *rook_to)?;
            }
            MoveKind::EnPassant { .. } => {
                let captured = mv.captured.ok_or(ChessErrors::CorruptMoveDescription)?;
                self.board.relocate(mv.piece, mv.to)?;
                self.remove_piece(captured)?;
            }
            MoveKind::Regular => {
                if let Some(captured) = mv.captured {
                    self.remove_piece(captured)?;
                }
                let mover = self.board.piece(mv.piece);
                if mover.class == PieceClass::Pawn && (mv.to.1 == 0 || mv.to.1 == 7) {
                    promoted_queen = Some(self.promote_pawn(mv)?);
                } else {
                    self.board.relocate(mv.piece, mv.to)?;
                }
            }
        }
        Ok(MoveUndo {
            mv: mv.clone(),
            promoted_queen,
        })
    }

    fn revert(&mut self, undo: MoveUndo) -> Result<(), ChessErrors> {
        let MoveUndo { mv, promoted_queen } = undo;
        match &mv.kind {
            MoveKind::Castling { rook, .. } => {
                self.board.undo_relocate(*rook)?;
                self.board.undo_relocate(mv.piece)?;
            }
            MoveKind::EnPassant { .. } => {
                let captured = mv.captured.ok_or(ChessErrors::CorruptMoveDescription)?;
                self.restore_piece(captured)?;
                self.board.undo_relocate(mv.piece)?;
            }
            MoveKind::Regular => {
                if let Some(queen) = promoted_queen {
                    let team = self.board.piece(queen).team;
                    let game = self.id;
                    self.player_mut(team).remove_piece(game, queen)?;
                    self.board.discard_newest_piece(queen)?;
                    self.restore_piece(mv.piece)?;
                } else {
                    self.board.undo_relocate(mv.piece)?;
                }
                if let Some(captured) = mv.captured {
                    self.restore_piece(captured)?;
                }
            }
        }
        Ok(())
    }

    /// Removes a piece from the game: detached from its square and from its
    /// owner's piece set. Its square history survives for exact restoration.
    fn remove_piece(&mut self, id: PieceId) -> Result<(), ChessErrors> {
        self.board.remove_from_board(id)?;
        let team = self.board.piece(id).team;
        let game = self.id;
        self.player_mut(team).remove_piece(game, id)
    }

    fn restore_piece(&mut self, id: PieceId) -> Result<(), ChessErrors> {
        self.board.undo_remove(id)?;
        let team = self.board.piece(id).team;
        let game = self.id;
        self.player_mut(team).add_piece(game, id)
    }

    /// Replaces a pawn reaching the terminal rank with a freshly named queen
    /// owned by the same player. Returns the new queen's id.
    fn promote_pawn(&mut self, mv: &ChessMove) -> Result<PieceId, ChessErrors> {
        let team = self.board.piece(mv.piece).team;
        let own_king = self.board.piece(mv.piece).own_king()?;
        self.remove_piece(mv.piece)?;
        let ordinal = self.next_queen_ordinal(team)?;
        let queen = self.add_new_piece(PieceClass::Queen, team, ordinal, mv.to)?;
        self.board.piece_mut(queen).set_own_king(own_king)?;
        Ok(queen)
    }

    /// Smallest queen name ordinal not yet taken by the owner's queens,
    /// counting from 1 so promoted queens never collide with a setup queen.
    fn next_queen_ordinal(&self, team: PieceTeam) -> Result<u32, ChessErrors> {
        let mut ordinal = 1;
        for id in self.player(team).pieces(self.id)? {
            let piece = self.board.piece(*id);
            if piece.class != PieceClass::Queen {
                continue;
            }
            if let Some(existing) = piece.name_ordinal() {
                if existing >= ordinal {
                    ordinal = existing + 1;
                }
            }
        }
        Ok(ordinal)
    }

    // ---- committed moves ---------------------------------------------------

    /// Applies a move for real: snapshot first, then side effects, then the
    /// legal-move recomputation protocol (mover's side, turn switch, new
    /// side — in that order, since one side's legality depends on the
    /// opponent's current reach).
    pub fn apply_move(&mut self, mv: &ChessMove) -> Result<MoveToken, ChessErrors> {
        let snapshot = self.capture_snapshot(mv.clone())?;
        self.history.push(snapshot);
        if let Err(error) = self.apply_move_inner(mv) {
            self.history.pop();
            return Err(error);
        }
        Ok(MoveToken {
            ply: self.history.len(),
        })
    }

    fn apply_move_inner(&mut self, mv: &ChessMove) -> Result<(), ChessErrors> {
        // The snapshot on the history stack is the authoritative inverse;
        // the execute-level undo value is not needed here.
        self.execute(mv)?;
        self.update_legal_moves_for_team(self.current)?;
        self.current = self.current.opponent();
        self.update_legal_moves_for_team(self.current)?;
        Ok(())
    }

    /// Redeems an apply token. Tokens must come back in reverse order of
    /// application; anything else is a programmer error.
    pub fn undo_move(&mut self, token: MoveToken) -> Result<(), ChessErrors> {
        if token.ply != self.history.len() {
            return Err(ChessErrors::MismatchedUndo);
        }
        self.undo_one_move()
    }

    /// Takes back the most recent move by restoring the snapshot under it.
    /// Does nothing when no move has been made.
    pub fn undo_one_move(&mut self) -> Result<(), ChessErrors> {
        match self.history.pop() {
            Some(snapshot) => self.restore_snapshot(snapshot),
            None => Ok(()),
        }
    }

    fn capture_snapshot(&self, move_made: ChessMove) -> Result<GameSnapshot, ChessErrors> {
        Ok(GameSnapshot::new(
            self.board.clone(),
            self.light.pieces(self.id)?.clone(),
            self.dark.pieces(self.id)?.clone(),
            self.current,
            move_made,
        ))
    }

    fn restore_snapshot(&mut self, snapshot: GameSnapshot) -> Result<(), ChessErrors> {
        let GameSnapshot {
            board,
            light_pieces,
            dark_pieces,
            current,
            move_made: _,
        } = snapshot;
        self.board = board;
        let game = self.id;
        self.light.set_pieces(game, light_pieces)?;
        self.dark.set_pieces(game, dark_pieces)?;
        self.current = current;
        Ok(())
    }

    /// Rebuilds the game from a previously captured history stack: the top
    /// snapshot becomes the present, the rest stays undoable history.
    pub fn load_history(&mut self, mut history: Vec<GameSnapshot>) -> Result<(), ChessErrors> {
        let top = history.pop().ok_or(ChessErrors::EmptyHistory)?;
        self.restore_snapshot(top)?;
        self.history = history;
        Ok(())
    }

    // ---- boundary commands -------------------------------------------------

    /// Moves a piece to `target` if that is currently one of its legal moves
    /// and it is its side's turn. Returns whether a move was applied; an
    /// illegal request is ignored, not an error (the caller is expected to
    /// have consulted `legal_moves_for` first).
    pub fn move_piece_to(
        &mut self,
        id: PieceId,
        target: BoardLocation,
    ) -> Result<bool, ChessErrors> {
        if self.board.piece(id).team != self.current {
            return Ok(false);
        }
        let chosen = self
            .board
            .piece(id)
            .legal_moves
            .iter()
            .find(|mv| mv.to == target)
            .cloned();
        match chosen {
            Some(mv) => {
                let _token = self.apply_move(&mv)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // ---- terminal state ------------------------------------------------------

    fn has_any_legal_move(&self, team: PieceTeam) -> Result<bool, ChessErrors> {
        for id in self.player(team).pieces(self.id)? {
            if !self.board.piece(*id).legal_moves.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Checkmate: no legal moves and the king is attacked.
    pub fn is_checkmate(&self, team: PieceTeam) -> Result<bool, ChessErrors> {
        if self.has_any_legal_move(team)? {
            return Ok(false);
        }
        self.is_checked(self.get_king(team)?)
    }

    /// Stalemate: no legal moves but the king is not attacked.
    pub fn is_stalemate(&self, team: PieceTeam) -> Result<bool, ChessErrors> {
        if self.has_any_legal_move(team)? {
            return Ok(false);
        }
        Ok(!self.is_checked(self.get_king(team)?)?)
    }

    pub fn is_game_over(&self) -> Result<bool, ChessErrors> {
        Ok(self.is_checkmate(PieceTeam::Light)?
            || self.is_checkmate(PieceTeam::Dark)?
            || self.is_stalemate(self.current)?)
    }

    /// The winning side, or `None` while the game is running and on
    /// stalemate. Callers distinguish the two via `is_game_over`.
    pub fn winner(&self) -> Result<Option<PieceTeam>, ChessErrors> {
        if !self.is_game_over()? || self.is_stalemate(self.current)? {
            return Ok(None);
        }
        if self.is_checkmate(PieceTeam::Light)? {
            Ok(Some(PieceTeam::Dark))
        } else {
            Ok(Some(PieceTeam::Light))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::board_location::algebraic_to_location;
    use crate::utils::fen_parser::game_from_fen;

    /// Plays `from`-`to` through the boundary command and asserts it was
    /// accepted.
    fn play(game: &mut ChessGame, from: &str, to: &str) {
        let from = algebraic_to_location(from).unwrap();
        let to = algebraic_to_location(to).unwrap();
        let id = game.board().occupant(from).unwrap();
        assert!(game.move_piece_to(id, to).unwrap(), "move was rejected");
    }

    #[test]
    fn setup_places_all_pieces_consistently() {
        let game = ChessGame::new("light", "dark").unwrap();
        assert_eq!(game.board().piece_count(), 32);
        for team in [PieceTeam::Light, PieceTeam::Dark] {
            assert_eq!(game.pieces_in_play(team).unwrap().len(), 16);
            let king = game.get_king(team).unwrap();
            assert_eq!(game.board().piece(king).square(), Some((4, team.back_rank())));
        }
        for (square, id) in game.board().occupied_squares() {
            assert_eq!(game.board().piece(id).square(), Some(square));
        }
        assert_eq!(game.board().piece(game.board().occupant((3, 0)).unwrap()).name(), "LQ0");
    }

    #[test]
    fn twenty_legal_moves_each_at_the_start() {
        let game = ChessGame::new("light", "dark").unwrap();
        for team in [PieceTeam::Light, PieceTeam::Dark] {
            assert_eq!(game.legal_moves_for_team(team).unwrap().len(), 20);
        }
    }

    #[test]
    fn legal_moves_are_a_subset_of_pseudo_legal_moves() {
        let game = ChessGame::new("light", "dark").unwrap();
        for id in game.pieces_in_play(PieceTeam::Light).unwrap() {
            let piece = game.board().piece(id);
            for mv in &piece.legal_moves {
                assert!(piece.pseudo_legal_moves.contains(mv));
            }
        }
    }

    #[test]
    fn apply_and_undo_round_trip_exactly() {
        let mut game = ChessGame::new("light", "dark").unwrap();
        let before = game.clone();
        play(&mut game, "e2", "e4");
        assert_ne!(game, before);
        assert_eq!(game.current_turn(), PieceTeam::Dark);
        game.undo_one_move().unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn several_moves_unwind_to_the_start() {
        let mut game = ChessGame::new("light", "dark").unwrap();
        let before = game.clone();
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")] {
            play(&mut game, from, to);
        }
        assert_eq!(game.history().len(), 4);
        for _ in 0..4 {
            game.undo_one_move().unwrap();
        }
        assert_eq!(game, before);
        // Undo on an empty history is a no-op.
        game.undo_one_move().unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn tokens_must_come_back_in_order() {
        let mut game = ChessGame::new("light", "dark").unwrap();
        let first = game.legal_moves_for_team(PieceTeam::Light).unwrap()[0].clone();
        let token_one = game.apply_move(&first).unwrap();
        let reply = game.legal_moves_for_team(PieceTeam::Dark).unwrap()[0].clone();
        let token_two = game.apply_move(&reply).unwrap();
        assert!(matches!(
            game.undo_move(token_one),
            Err(ChessErrors::MismatchedUndo)
        ));
        game.undo_move(token_two).unwrap();
        game.undo_one_move().unwrap();
        assert!(game.history().is_empty());
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = ChessGame::new("light", "dark").unwrap();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            play(&mut game, from, to);
        }
        assert!(game.is_checked(game.get_king(PieceTeam::Light).unwrap()).unwrap());
        assert!(game.is_checkmate(PieceTeam::Light).unwrap());
        assert!(game.is_game_over().unwrap());
        assert_eq!(game.winner().unwrap(), Some(PieceTeam::Dark));
    }

    #[test]
    fn en_passant_window_opens_for_one_ply() {
        let mut game = ChessGame::new("light", "dark").unwrap();
        for (from, to) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
            play(&mut game, from, to);
        }
        let pawn = game.board().occupant(algebraic_to_location("e5").unwrap()).unwrap();
        let capture = game
            .legal_moves_for(pawn)
            .iter()
            .find(|mv| matches!(mv.kind, MoveKind::EnPassant { .. }))
            .cloned()
            .expect("en passant should be open");
        assert_eq!(capture.to_long_algebraic(), "e5d6");

        // One unrelated exchange and the window is gone.
        play(&mut game, "a2", "a3");
        play(&mut game, "a6", "a5");
        assert!(!game
            .legal_moves_for(pawn)
            .iter()
            .any(|mv| matches!(mv.kind, MoveKind::EnPassant { .. })));
    }

    #[test]
    fn en_passant_removes_the_bypassing_pawn() {
        let mut game = ChessGame::new("light", "dark").unwrap();
        for (from, to) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
            play(&mut game, from, to);
        }
        let before = game.clone();
        play(&mut game, "e5", "d6");
        assert!(!game.board().has_piece(algebraic_to_location("d5").unwrap()));
        assert_eq!(game.pieces_in_play(PieceTeam::Dark).unwrap().len(), 15);
        game.undo_one_move().unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn castling_moves_both_king_and_rook() {
        let mut game = game_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let king = game.get_king(PieceTeam::Light).unwrap();
        let castles: Vec<String> = game
            .legal_moves_for(king)
            .iter()
            .filter(|mv| matches!(mv.kind, MoveKind::Castling { .. }))
            .map(|mv| mv.to_long_algebraic())
            .collect();
        assert!(castles.contains(&"e1g1".to_string()));
        assert!(castles.contains(&"e1c1".to_string()));

        let before = game.clone();
        play(&mut game, "e1", "g1");
        assert_eq!(game.board().piece(king).square(), Some((6, 0)));
        let f1 = game.board().occupant((5, 0)).unwrap();
        assert_eq!(game.board().piece(f1).class, PieceClass::Rook);
        game.undo_one_move().unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn moving_the_king_revokes_castling() {
        let mut game = game_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        play(&mut game, "e1", "e2");
        play(&mut game, "a8", "a7");
        play(&mut game, "e2", "e1");
        play(&mut game, "a7", "a8");
        let king = game.get_king(PieceTeam::Light).unwrap();
        assert!(!game
            .legal_moves_for(king)
            .iter()
            .any(|mv| matches!(mv.kind, MoveKind::Castling { .. })));
    }

    #[test]
    fn castling_is_blocked_through_an_attacked_square() {
        // The dark rook on f8 covers f1, which the king would cross.
        let game = game_from_fen("5rk1/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let king = game.get_king(PieceTeam::Light).unwrap();
        assert!(!game
            .legal_moves_for(king)
            .iter()
            .any(|mv| matches!(mv.kind, MoveKind::Castling { .. })));
    }

    #[test]
    fn promotion_mints_a_fresh_queen() {
        let mut game = game_from_fen("8/P3k3/8/8/8/8/8/QK6 w - - 0 1").unwrap();
        let before = game.clone();
        play(&mut game, "a7", "a8");
        let queen = game.board().occupant(algebraic_to_location("a8").unwrap()).unwrap();
        let piece = game.board().piece(queen);
        assert_eq!(piece.class, PieceClass::Queen);
        assert_eq!(piece.team, PieceTeam::Light);
        // The setup queen is LQ0, so the promoted one takes ordinal 1.
        assert_eq!(piece.name(), "LQ1");
        game.undo_one_move().unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn stalemate_is_a_draw_not_a_loss() {
        let game = game_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(game.is_stalemate(PieceTeam::Dark).unwrap());
        assert!(!game.is_checkmate(PieceTeam::Dark).unwrap());
        assert!(game.is_game_over().unwrap());
        assert_eq!(game.winner().unwrap(), None);
    }

    #[test]
    fn off_turn_and_illegal_requests_are_ignored() {
        let mut game = ChessGame::new("light", "dark").unwrap();
        let dark_pawn = game.board().occupant(algebraic_to_location("e7").unwrap()).unwrap();
        assert!(!game.move_piece_to(dark_pawn, algebraic_to_location("e5").unwrap()).unwrap());
        let knight = game.board().occupant(algebraic_to_location("g1").unwrap()).unwrap();
        assert!(!game.move_piece_to(knight, algebraic_to_location("g3").unwrap()).unwrap());
        assert!(game.history().is_empty());
    }

    #[test]
    fn load_history_rewinds_to_the_stored_top() {
        let mut game = ChessGame::new("light", "dark").unwrap();
        play(&mut game, "e2", "e4");
        let after_first = game.clone();
        play(&mut game, "e7", "e5");

        let stored = game.history().to_vec();
        game.load_history(stored).unwrap();
        assert_eq!(game.board(), after_first.board());
        assert_eq!(game.current_turn(), PieceTeam::Dark);
        assert_eq!(game.history().len(), 1);

        assert!(matches!(
            game.load_history(Vec::new()),
            Err(ChessErrors::EmptyHistory)
        ));
    }
}
