use super::notation;
use super::types::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 指し手 (移動元, 移動先)
///
/// 取りや成りの情報は持たない。適用時に盤面から導出する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", notation::format(self))
    }
}
