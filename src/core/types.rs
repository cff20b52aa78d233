use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤の一辺のマス数
pub const BOARD_SIZE: usize = 5;

/// 手番側
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[value(alias = "w")]
    White, // 先手 (下側, row 4 から row 0 へ進む)
    #[value(alias = "b")]
    Black, // 後手 (上側)
}

impl Default for Side {
    fn default() -> Self {
        Side::White
    }
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// ポーンの前進方向 (row の増減)
    pub fn forward(self) -> i32 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// ポーンが昇格する段
    pub fn promotion_row(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => BOARD_SIZE - 1,
        }
    }

    /// 盤面表記の接頭辞 ('w' / 'b')
    pub fn prefix(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    pub fn from_prefix(c: char) -> Option<Side> {
        match c {
            'w' => Some(Side::White),
            'b' => Some(Side::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// 盤面座標 (0-indexed, row 0 = 5段目)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Self {
        Square { row, col }
    }

    /// 盤内に収まる場合のみ相対移動したマスを返す
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Square> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        let size = BOARD_SIZE as i32;
        if row >= 0 && row < size && col >= 0 && col < size {
            Some(Square::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// 全マスを row-major 昇順で列挙する
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_bounds_checked() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 1)));
        assert_eq!(Square::new(4, 4).offset(1, 0), None);
    }

    #[test]
    fn side_parses_from_command_line_names() {
        assert_eq!(Side::from_str("white", true), Ok(Side::White));
        assert_eq!(Side::from_str("B", true), Ok(Side::Black));
        assert!(Side::from_str("red", true).is_err());
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 25);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[1], Square::new(0, 1));
        assert_eq!(squares[5], Square::new(1, 0));
        assert_eq!(squares[24], Square::new(4, 4));
    }
}
