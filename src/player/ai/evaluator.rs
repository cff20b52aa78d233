//! Evaluator trait for position evaluation
//!
//! Defines a common interface for different evaluation strategies.

use crate::core::GameState;
use crate::logic::RulesError;

/// Position score. Positive favors White, negative favors Black.
pub type Score = f64;

/// Trait for evaluating positions
pub trait Evaluator: Send + Sync {
    /// Evaluate the position from White's perspective
    ///
    /// Returns:
    ///   - Positive score: White advantage
    ///   - Negative score: Black advantage
    ///   - Zero: Equal position
    ///
    /// Fails only when the board is corrupt.
    fn evaluate(&self, state: &GameState) -> Result<Score, RulesError>;

    /// Get evaluator name for debugging
    fn name(&self) -> &str;
}
