use crate::core::{GameState, Move, MoveStep, Piece, PieceKind, Side, Square};
use thiserror::Error;

/// 盤面が壊れている (ルールの無い駒がある) ことを示す致命的エラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("corrupt board: {kind:?} at {square} has no Mini Chess movement rules")]
    UnsupportedPiece { square: Square, kind: PieceKind },
}

/// 合法手生成 (手番側)
///
/// 盤面を row-major 昇順に走査するので、同じ局面なら常に同じ順序になる。
/// 自玉が取られる手も含む (このルールに王手の概念は無い)。
pub fn legal_moves(state: &GameState) -> Result<Vec<Move>, RulesError> {
    moves_for_side(state, state.turn)
}

/// 手番を `side` に強制した場合の合法手
pub fn moves_for_side(state: &GameState, side: Side) -> Result<Vec<Move>, RulesError> {
    let mut moves = Vec::new();
    for (sq, piece) in state.board.pieces() {
        if piece.owner == side {
            moves.extend(get_piece_moves(state, sq, piece)?);
        }
    }
    Ok(moves)
}

pub fn is_legal(state: &GameState, mv: &Move) -> Result<bool, RulesError> {
    Ok(legal_moves(state)?.contains(mv))
}

fn get_piece_moves(state: &GameState, from: Square, piece: &Piece) -> Result<Vec<Move>, RulesError> {
    if piece.kind == PieceKind::Pawn {
        return Ok(get_pawn_moves(state, from, piece));
    }

    let rules = piece
        .movement_rules()
        .ok_or(RulesError::UnsupportedPiece {
            square: from,
            kind: piece.kind,
        })?;

    let mut moves = Vec::new();
    for step in rules {
        match step {
            MoveStep::Step(dr, dc) => {
                if let Some(to) = from.offset(dr, dc) {
                    match state.board.get_piece(to) {
                        Some(target) if target.owner == piece.owner => {}
                        _ => moves.push(Move::new(from, to)),
                    }
                }
            }
            MoveStep::Slide(dr, dc) => {
                let mut curr = from;
                while let Some(to) = curr.offset(dr, dc) {
                    if let Some(target) = state.board.get_piece(to) {
                        if target.owner != piece.owner {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                    moves.push(Move::new(from, to));
                    curr = to;
                }
            }
        }
    }
    Ok(moves)
}

fn get_pawn_moves(state: &GameState, from: Square, piece: &Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    let forward = piece.owner.forward();

    if let Some(to) = from.offset(forward, 0) {
        if state.board.is_empty(to) {
            moves.push(Move::new(from, to));
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(forward, dc) {
            if let Some(target) = state.board.get_piece(to) {
                if target.owner != piece.owner {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }
    moves
}

/// 移動適用 (複製を返す)
pub fn apply_move(state: &GameState, mv: &Move) -> GameState {
    let mut next = state.clone();
    next.apply_move(*mv);
    next
}

/// 指定深さまでの指し手木の末端ノード数
///
/// 終局 (玉取り) は考慮せず、生成器だけを数える。
pub fn perft(state: &GameState, depth: u32) -> Result<u64, RulesError> {
    if depth == 0 {
        return Ok(1);
    }
    let moves = legal_moves(state)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }
    let mut nodes = 0u64;
    for mv in moves {
        let child = apply_move(state, &mv);
        nodes += perft(&child, depth - 1)?;
    }
    Ok(nodes)
}
