//! Errors used throughout the chess engine.
//!
//! This module defines the canonical error type returned by game logic, move
//! generation, the search engines and the parsing utilities. The enum
//! `ChessErrors` is used as the single error type across the crate to simplify
//! propagation and matching.
//!
//! Usage guidelines:
//! - Functions in the engine return `Result<..., ChessErrors>` for every
//!   fallible operation.
//! - Variants that represent broken invariants (`OwnKingAlreadySet`,
//!   `MismatchedUndo`, `CorruptMoveDescription`, ...) indicate programmer
//!   errors; they are propagated, never swallowed or retried.
//! - Invalid *requests* (moving to a square that is not a legal target) are
//!   absorbed at the orchestrator boundary and never become an error.

use crate::board::board_location::BoardLocation;
use crate::pieces::piece::PieceId;

/// Represents all possible error types that can occur in the chess engine.
/// Used throughout the codebase for error handling and reporting.
#[derive(Debug)]
pub enum ChessErrors {
    /// Indicates an attempted access outside the bounds of the chess board.
    OutOfBounds,
    /// Attempted to place or move a piece to a square that is already occupied.
    BoardLocationOccupied(BoardLocation),
    /// Attempted to view or edit a square that is empty (no piece present).
    TryToViewOrEditEmptySquare(BoardLocation),
    /// The piece with this id is not standing on any square.
    PieceNotOnBoard(PieceId),
    /// Attempted to rewind a piece that has no recorded prior square.
    NoPreviousMoves(PieceId),
    /// A piece's own-king reference may be set exactly once.
    OwnKingAlreadySet,
    /// A piece was asked for its own king before setup assigned one.
    OwnKingNotSet,
    /// The player's piece set does not contain a king.
    PlayerHasNoKing,
    /// A player was registered twice for the same game.
    GameAlreadyStarted,
    /// Piece bookkeeping was requested for a game the player never started.
    GameNotStarted,
    /// An engine was asked to search when it is not its side to move.
    NotEnginesTurn,
    /// An undo token was redeemed out of apply/undo stack order.
    MismatchedUndo,
    /// A move description does not carry the data its kind requires
    /// (for example an en passant move without a captured piece).
    CorruptMoveDescription,
    /// Attempted to load a game from an empty history stack.
    EmptyHistory,
    /// No legal moves are available for the side to move.
    NoLegalMoves,
    /// The provided FEN string is invalid or could not be parsed.
    InvalidFENstring,
    /// The provided algebraic square notation is invalid.
    InvalidAlgebraic,
}
