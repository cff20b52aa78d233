use super::types::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 駒の種類
///
/// `Rook` は盤面表記上は読み込めるが、Mini Chess のルールには存在しない。
/// 合法手生成でこの駒に出会った場合は盤面破損として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// 盤面表記の文字 (ポーンのみ小文字)
    pub fn code(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_code(c: char) -> Option<PieceKind> {
        match c {
            'p' | 'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// 移動の特性 (行, 列の相対座標)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStep {
    Step(i32, i32),  // 指定した相対座標へ1マス移動
    Slide(i32, i32), // 指定した方向へ障害物があるまで移動
}

const KING_STEPS: [MoveStep; 8] = [
    MoveStep::Step(-1, -1),
    MoveStep::Step(-1, 0),
    MoveStep::Step(-1, 1),
    MoveStep::Step(0, -1),
    MoveStep::Step(0, 1),
    MoveStep::Step(1, -1),
    MoveStep::Step(1, 0),
    MoveStep::Step(1, 1),
];

const KNIGHT_STEPS: [MoveStep; 8] = [
    MoveStep::Step(-2, -1),
    MoveStep::Step(-2, 1),
    MoveStep::Step(-1, -2),
    MoveStep::Step(-1, 2),
    MoveStep::Step(1, -2),
    MoveStep::Step(1, 2),
    MoveStep::Step(2, -1),
    MoveStep::Step(2, 1),
];

const DIAGONAL_SLIDES: [MoveStep; 4] = [
    MoveStep::Slide(-1, -1),
    MoveStep::Slide(-1, 1),
    MoveStep::Slide(1, -1),
    MoveStep::Slide(1, 1),
];

const ORTHOGONAL_SLIDES: [MoveStep; 4] = [
    MoveStep::Slide(-1, 0),
    MoveStep::Slide(0, -1),
    MoveStep::Slide(0, 1),
    MoveStep::Slide(1, 0),
];

/// 駒の定義
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Side,
}

impl Piece {
    pub fn new(kind: PieceKind, owner: Side) -> Self {
        Piece { kind, owner }
    }

    /// その駒が本来持っている「動きの定義」を返す
    ///
    /// ルールが定義されていない駒は `None`。
    pub fn movement_rules(&self) -> Option<Vec<MoveStep>> {
        match self.kind {
            PieceKind::King => Some(KING_STEPS.to_vec()),
            PieceKind::Knight => Some(KNIGHT_STEPS.to_vec()),
            PieceKind::Bishop => Some(DIAGONAL_SLIDES.to_vec()),
            PieceKind::Queen => {
                let mut rules = DIAGONAL_SLIDES.to_vec();
                rules.extend_from_slice(&ORTHOGONAL_SLIDES);
                Some(rules)
            }
            // ポーンは「移動」と「取り」が違うため、合法手生成側で特殊処理する
            PieceKind::Pawn => Some(vec![]),
            PieceKind::Rook => None,
        }
    }

    /// 盤面表記 ("wK", "bp" など)
    pub fn code(&self) -> String {
        format!("{}{}", self.owner.prefix(), self.kind.code())
    }

    pub fn from_code(s: &str) -> Option<Piece> {
        let mut chars = s.chars();
        let owner = Side::from_prefix(chars.next()?)?;
        let kind = PieceKind::from_code(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Piece::new(kind, owner))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
