//! Crate root module declarations for the Gambit Chess engine project.
//!
//! This file exposes all top-level subsystems (board model, piece move
//! generation, game orchestration, engines, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod chess_errors;

pub mod board {
    pub mod board_location;
    pub mod piece_board;
}

pub mod pieces {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_generator;
    pub mod pawn_moves;
    pub mod piece;
    pub mod piece_class;
    pub mod piece_team;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod game {
    pub mod chess_game;
    pub mod chess_move;
    pub mod game_snapshot;
    pub mod player;
}

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod scoring;
}

pub mod utils {
    pub mod fen_parser;
    pub mod perft;
    pub mod render_game_state;
}
