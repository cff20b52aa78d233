use super::board::Board;
use super::piece::{Piece, PieceKind};
use super::r#move::Move;
use super::setup::{setup_from_strings, standard_setup};
use super::types::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 対局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

impl Outcome {
    pub fn win_for(side: Side) -> Outcome {
        match side {
            Side::White => Outcome::WhiteWins,
            Side::Black => Outcome::BlackWins,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::WhiteWins => Some(Side::White),
            Outcome::BlackWins => Some(Side::Black),
            _ => None,
        }
    }

    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::WhiteWins => write!(f, "White won"),
            Outcome::BlackWins => write!(f, "Black won"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// 指し手を適用した結果、盤面から導出された情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveEffect {
    pub captured: Option<Piece>,
    pub promoted: bool,
}

/// 局面 (盤面 + 手番 + 手数管理 + 結果)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Side,
    /// 適用済みの手数 (ply)
    pub turn_counter: u32,
    /// 最後に駒取りが起きた手数 (まだ無ければ 0)
    pub last_capture_turn: u32,
    pub outcome: Outcome,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    /// 初期局面
    pub fn new() -> Self {
        let board =
            setup_from_strings(&standard_setup()).expect("standard layout is well-formed");
        GameState::with_board(board, Side::White)
    }

    pub fn with_board(board: Board, turn: Side) -> Self {
        GameState {
            board,
            turn,
            turn_counter: 0,
            last_capture_turn: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// 手番だけを差し替えた複製 (機動力評価用)
    pub fn with_turn(&self, side: Side) -> GameState {
        GameState {
            turn: side,
            ..self.clone()
        }
    }

    /// 指し手を適用する (合法性の検証は呼び出し側の責任)
    ///
    /// 移動元が空なら何も変更せず `None` を返す。
    pub fn apply_move(&mut self, mv: Move) -> Option<MoveEffect> {
        let mut piece = self.board.remove_piece(mv.from)?;
        let captured = self.board.remove_piece(mv.to);

        self.turn_counter += 1;
        if captured.is_some() {
            self.last_capture_turn = self.turn_counter;
        }

        // 成り (クイーン固定)
        let promoted = piece.kind == PieceKind::Pawn && mv.to.row == piece.owner.promotion_row();
        if promoted {
            piece.kind = PieceKind::Queen;
        }

        // 玉取り
        if let Some(c) = captured {
            if c.kind == PieceKind::King {
                self.outcome = Outcome::win_for(piece.owner);
            }
        }

        self.board.place_piece(mv.to, piece);
        self.turn = self.turn.opponent();

        Some(MoveEffect { captured, promoted })
    }

    pub fn plies_since_capture(&self) -> u32 {
        self.turn_counter - self.last_capture_turn
    }

    /// 終局判定 (状態は変更しない)
    pub fn is_game_over(&self, max_turns: u32) -> bool {
        self.outcome.is_over() || self.plies_since_capture() >= max_turns
    }

    /// 終局判定を行い、千日手相当 (駒取りなし) なら引き分けを確定させる
    pub fn check_end(&mut self, max_turns: u32) -> Outcome {
        if !self.outcome.is_over() && self.plies_since_capture() >= max_turns {
            self.outcome = Outcome::Draw;
        }
        self.outcome
    }

    /// 表示用の手数 (白黒一組で1)
    pub fn full_move_number(&self) -> u32 {
        self.turn_counter / 2 + 1
    }
}
