//! # Evaluation Module
//!
//! Static evaluation functions for Mini Chess positions. Every heuristic
//! converts a `GameState` into a single score from White's perspective
//! (positive = White advantage, negative = Black advantage).
//!
//! ## Heuristics
//! 1. **Material** (`e0`): signed sum of piece values over the whole board.
//! 2. **Mobility** (`e1`): White's move count minus Black's move count.
//! 3. **Blended** (`e2`): `1.0 * material + 0.3 * mobility`.
//!
//! All heuristics are pure functions of the position; nothing is cached
//! between calls.

use super::evaluator::{Evaluator, Score};
use crate::core::{GameState, PieceKind, Side};
use crate::logic::{moves_for_side, RulesError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

// Material values (pawn units)
const VAL_PAWN: i32 = 1;
const VAL_KNIGHT: i32 = 3;
const VAL_BISHOP: i32 = 3;
const VAL_QUEEN: i32 = 9;
/// King value dominates everything else so that losing it outweighs any material.
const VAL_KING: i32 = 999;

const BLEND_MATERIAL_WEIGHT: f64 = 1.0;
const BLEND_MOBILITY_WEIGHT: f64 = 0.3;

/// Returns the static material value of a piece kind.
///
/// Kinds without Mini Chess rules are worth nothing.
fn piece_val(k: PieceKind) -> i32 {
    match k {
        PieceKind::Pawn => VAL_PAWN,
        PieceKind::Knight => VAL_KNIGHT,
        PieceKind::Bishop => VAL_BISHOP,
        PieceKind::Queen => VAL_QUEEN,
        PieceKind::King => VAL_KING,
        PieceKind::Rook => 0,
    }
}

/// Signed material balance.
pub fn material(state: &GameState) -> i32 {
    state
        .board
        .pieces()
        .map(|(_, piece)| {
            let val = piece_val(piece.kind);
            if piece.owner == Side::White {
                val
            } else {
                -val
            }
        })
        .sum()
}

/// Difference in available moves, each side generated with the turn forced to it.
pub fn mobility(state: &GameState) -> Result<i32, RulesError> {
    let white = moves_for_side(state, Side::White)?.len() as i32;
    let black = moves_for_side(state, Side::Black)?.len() as i32;
    Ok(white - black)
}

pub fn blended(state: &GameState) -> Result<Score, RulesError> {
    Ok(BLEND_MATERIAL_WEIGHT * material(state) as f64
        + BLEND_MOBILITY_WEIGHT * mobility(state)? as f64)
}

/// Heuristic selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum Heuristic {
    #[default]
    #[serde(rename = "e0", alias = "material")]
    #[value(name = "e0", alias = "material")]
    Material,
    #[serde(rename = "e1", alias = "mobility")]
    #[value(name = "e1", alias = "mobility")]
    Mobility,
    #[serde(rename = "e2", alias = "blended")]
    #[value(name = "e2", alias = "blended")]
    Blended,
}

impl Heuristic {
    pub fn evaluate(&self, state: &GameState) -> Result<Score, RulesError> {
        match self {
            Heuristic::Material => Ok(material(state) as f64),
            Heuristic::Mobility => Ok(mobility(state)? as f64),
            Heuristic::Blended => blended(state),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Heuristic::Material => "e0 (material)",
            Heuristic::Mobility => "e1 (mobility)",
            Heuristic::Blended => "e2 (blended)",
        }
    }
}

impl Evaluator for Heuristic {
    fn evaluate(&self, state: &GameState) -> Result<Score, RulesError> {
        Heuristic::evaluate(self, state)
    }

    fn name(&self) -> &str {
        self.label()
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
