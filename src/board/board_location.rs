//! Board coordinates and the bounds-checked offset helper.

use crate::chess_errors::ChessErrors;

/// A `(file, rank)` coordinate pair, both components in `0..8`.
/// File 0 is the a-file, rank 0 is Light's back rank.
pub type BoardLocation = (i8, i8);

/// Offsets a location by `(d_file, d_rank)`, failing when the result would
/// leave the board.
pub fn offset_location(
    x: BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_file, x.1 + d_rank);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessErrors::OutOfBounds)
    } else {
        Ok(y)
    }
}

/// Parses a two-character algebraic square such as `"e4"`.
pub fn algebraic_to_location(x: &str) -> Result<BoardLocation, ChessErrors> {
    let mut chars = x.trim().chars();
    let file = match chars.next() {
        Some(c @ 'a'..='h') => (c as u8 - b'a') as i8,
        _ => return Err(ChessErrors::InvalidAlgebraic),
    };
    let rank = match chars.next() {
        Some(c @ '1'..='8') => (c as u8 - b'1') as i8,
        _ => return Err(ChessErrors::InvalidAlgebraic),
    };
    if chars.next().is_some() {
        return Err(ChessErrors::InvalidAlgebraic);
    }
    Ok((file, rank))
}

/// Formats a location as algebraic notation, e.g. `(4, 3)` -> `"e4"`.
pub fn location_to_algebraic(x: BoardLocation) -> String {
    let file = (b'a' + x.0 as u8) as char;
    let rank = (b'1' + x.1 as u8) as char;
    format!("{}{}", file, rank)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn offsets_stay_on_the_board() {
        assert_eq!(offset_location((0, 0), 1, 1).unwrap(), (1, 1));
        assert!(offset_location((0, 0), -1, 0).is_err());
        assert!(offset_location((7, 7), 0, 1).is_err());
    }

    #[test]
    fn algebraic_round_trip() {
        assert_eq!(algebraic_to_location("e4").unwrap(), (4, 3));
        assert_eq!(location_to_algebraic((4, 3)), "e4");
        assert!(algebraic_to_location("i9").is_err());
        assert!(algebraic_to_location("e44").is_err());
    }
}
