//! Time-bounded minimax search with optional alpha-beta pruning.
//!
//! The searcher works on private clones of the position: every explored node
//! owns its own `GameState`, so the live game state is never touched.
//!
//! # Time management
//!
//! A deadline is fixed when `select_move` is called and polled at every node
//! expansion. Depths are searched iteratively (1, 2, ... up to the depth
//! budget) and the result of the deepest fully completed iteration is kept.
//! When the very first iteration is interrupted, the best root move that was
//! completely searched before the deadline is returned instead, if any.
//!
//! # Move selection
//!
//! White maximizes and Black minimizes; which one applies is re-derived from
//! each node's own `turn`. Among root moves the strictly best score wins, so
//! ties keep the first move in generation order. Pruning never changes the
//! selected move, only the number of visited nodes.

use super::evaluator::{Evaluator, Score};
use crate::core::{GameState, Move, Side};
use crate::logic::{legal_moves, RulesError};
use log::debug;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Depth budget in plies
    pub depth: u32,
    pub time_limit: Duration,
    pub alpha_beta: bool,
    /// No-progress draw threshold used by the game-over predicate
    pub max_turns: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: 4,
            time_limit: Duration::from_secs(5),
            alpha_beta: true,
            max_turns: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// A legal move with its backed-up score at `depth`
    Move { mv: Move, score: Score, depth: u32 },
    /// The deadline passed before any root move was fully searched
    NoMoveInTime,
    /// The side to move has no moves at all
    NoLegalMoves,
}

impl Selection {
    pub fn best_move(&self) -> Option<Move> {
        match self {
            Selection::Move { mv, .. } => Some(*mv),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub selection: Selection,
    pub nodes: u64,
    pub elapsed: Duration,
    /// Deepest iteration searched to completion (0 if none)
    pub completed_depth: u32,
    pub timed_out: bool,
}

/// One node of the search tree. Lives only for the duration of a search call.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: GameState,
    /// Move that produced this node from its parent
    pub mv: Option<Move>,
    /// Remaining depth
    pub depth: u32,
    pub maximizing: bool,
    /// Evaluator value, set only once the node turned out to be a leaf
    pub score: Option<Score>,
}

impl SearchNode {
    pub fn root(state: &GameState, depth: u32) -> Self {
        Self {
            state: state.clone(),
            mv: None,
            depth,
            maximizing: state.turn == Side::White,
            score: None,
        }
    }

    pub fn child(&self, mv: Move) -> Self {
        let mut state = self.state.clone();
        state.apply_move(mv);
        let maximizing = state.turn == Side::White;
        Self {
            state,
            mv: Some(mv),
            depth: self.depth.saturating_sub(1),
            maximizing,
            score: None,
        }
    }
}

/// Outcome of one root iteration
struct RootOutcome {
    best: Option<(Move, Score)>,
    complete: bool,
}

pub struct Searcher<'a> {
    evaluator: &'a dyn Evaluator,
    params: SearchParams,
    deadline: Option<Instant>,
    nodes: u64,
    timed_out: bool,
}

impl<'a> Searcher<'a> {
    pub fn new(evaluator: &'a dyn Evaluator) -> Self {
        Self {
            evaluator,
            params: SearchParams::default(),
            deadline: None,
            nodes: 0,
            timed_out: false,
        }
    }

    pub fn select_move(
        &mut self,
        state: &GameState,
        params: SearchParams,
    ) -> Result<SearchResult, RulesError> {
        let start = Instant::now();
        self.params = params;
        self.deadline = start.checked_add(params.time_limit);
        self.nodes = 0;
        self.timed_out = false;

        let root_moves = legal_moves(state)?;
        if root_moves.is_empty() {
            return Ok(SearchResult {
                selection: Selection::NoLegalMoves,
                nodes: 0,
                elapsed: start.elapsed(),
                completed_depth: 0,
                timed_out: false,
            });
        }

        let mut selection = Selection::NoMoveInTime;
        let mut completed_depth = 0;

        for depth in 1..=params.depth.max(1) {
            let outcome = self.search_root(state, &root_moves, depth)?;
            if outcome.complete {
                if let Some((mv, score)) = outcome.best {
                    selection = Selection::Move { mv, score, depth };
                }
                completed_depth = depth;
            } else {
                if completed_depth == 0 {
                    if let Some((mv, score)) = outcome.best {
                        selection = Selection::Move { mv, score, depth };
                    }
                }
                break;
            }
        }

        let elapsed = start.elapsed();
        debug!(
            "search {}: {:?} depth={} nodes={} elapsed={:?} timed_out={}",
            self.evaluator.name(),
            selection,
            completed_depth,
            self.nodes,
            elapsed,
            self.timed_out
        );

        Ok(SearchResult {
            selection,
            nodes: self.nodes,
            elapsed,
            completed_depth,
            timed_out: self.timed_out,
        })
    }

    fn search_root(
        &mut self,
        state: &GameState,
        moves: &[Move],
        depth: u32,
    ) -> Result<RootOutcome, RulesError> {
        let root = SearchNode::root(state, depth);
        let mut alpha = Score::NEG_INFINITY;
        let mut beta = Score::INFINITY;
        let mut best: Option<(Move, Score)> = None;

        for &mv in moves {
            let mut child = root.child(mv);
            let score = match self.minimax(&mut child, alpha, beta)? {
                Some(score) => score,
                None => return Ok(RootOutcome { best, complete: false }),
            };

            let improves = match best {
                None => true,
                Some((_, b)) if root.maximizing => score > b,
                Some((_, b)) => score < b,
            };
            if improves {
                best = Some((mv, score));
            }

            if self.params.alpha_beta {
                if root.maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }

        Ok(RootOutcome {
            best,
            complete: true,
        })
    }

    /// Returns `None` when the deadline interrupted this subtree.
    fn minimax(
        &mut self,
        node: &mut SearchNode,
        mut alpha: Score,
        mut beta: Score,
    ) -> Result<Option<Score>, RulesError> {
        if self.out_of_time() {
            return Ok(None);
        }
        self.nodes += 1;

        if node.depth == 0 || node.state.is_game_over(self.params.max_turns) {
            return self.leaf(node).map(Some);
        }

        let moves = legal_moves(&node.state)?;
        if moves.is_empty() {
            return self.leaf(node).map(Some);
        }

        let mut best = if node.maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };

        for mv in moves {
            let mut child = node.child(mv);
            let score = match self.minimax(&mut child, alpha, beta)? {
                Some(score) => score,
                None => return Ok(None),
            };

            if node.maximizing {
                if score > best {
                    best = score;
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                }
                beta = beta.min(best);
            }

            if self.params.alpha_beta && beta <= alpha {
                break;
            }
        }

        Ok(Some(best))
    }

    fn leaf(&self, node: &mut SearchNode) -> Result<Score, RulesError> {
        let score = self.evaluator.evaluate(&node.state)?;
        node.score = Some(score);
        Ok(score)
    }

    fn out_of_time(&mut self) -> bool {
        if self.timed_out {
            return true;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.timed_out = true;
            }
        }
        self.timed_out
    }
}

/// Convenience wrapper around `Searcher::select_move`.
pub fn select_move(
    state: &GameState,
    evaluator: &dyn Evaluator,
    params: SearchParams,
) -> Result<SearchResult, RulesError> {
    Searcher::new(evaluator).select_move(state, params)
}
