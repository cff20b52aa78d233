//! Move notation: columns `A`-`E` left to right, ranks `1`-`5` bottom to top.
//!
//! Board row 0 is rank 5, so `B2` is row 3, column 1.

use super::r#move::Move;
use super::types::{Square, BOARD_SIZE};

/// Parses a move such as `"B2 B3"`. Malformed input yields `None`.
pub fn parse(text: &str) -> Option<Move> {
    let mut parts = text.split_whitespace();
    let from = parse_square(parts.next()?)?;
    let to = parse_square(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(from, to))
}

pub fn parse_square(text: &str) -> Option<Square> {
    let mut chars = text.chars();
    let file = chars.next()?.to_ascii_uppercase();
    let rank = chars.next()?.to_digit(10)? as usize;
    if chars.next().is_some() {
        return None;
    }
    if !('A'..='E').contains(&file) || rank == 0 || rank > BOARD_SIZE {
        return None;
    }
    let col = file as usize - 'A' as usize;
    Some(Square::new(BOARD_SIZE - rank, col))
}

pub fn format(mv: &Move) -> String {
    format!("{} {}", format_square(mv.from), format_square(mv.to))
}

pub fn format_square(sq: Square) -> String {
    let file = (b'A' + sq.col as u8) as char;
    format!("{}{}", file, BOARD_SIZE - sq.row)
}
