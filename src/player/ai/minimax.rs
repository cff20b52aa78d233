use super::eval::Heuristic;
use super::search::{SearchParams, Searcher, Selection};
use crate::core::notation::format;
use crate::core::GameState;
use crate::logic::legal_moves;
use crate::player::{MoveRequest, PlayerController};
use log::{info, warn};

/// 探索で手を選ぶ AI
pub struct MinimaxAI {
    pub name: String,
    pub params: SearchParams,
    pub heuristic: Heuristic,
}

impl MinimaxAI {
    pub fn new(name: &str, params: SearchParams, heuristic: Heuristic) -> Self {
        Self {
            name: name.to_string(),
            params,
            heuristic,
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, state: &GameState) -> anyhow::Result<MoveRequest> {
        let mut searcher = Searcher::new(&self.heuristic);
        let result = searcher.select_move(state, self.params)?;

        let mv = match result.selection {
            Selection::Move { mv, score, depth } => {
                info!(
                    "{} ({}) plays {} score={} depth={} nodes={} in {:.3}s",
                    self.name,
                    self.heuristic,
                    format(&mv),
                    score,
                    depth,
                    result.nodes,
                    result.elapsed.as_secs_f64()
                );
                mv
            }
            Selection::NoMoveInTime => {
                // 時間内にルートの子を1つも読み切れなかった場合は最初の合法手
                let moves = legal_moves(state)?;
                match moves.first() {
                    Some(&mv) => {
                        warn!(
                            "{} ran out of time before completing any move, playing {}",
                            self.name,
                            format(&mv)
                        );
                        mv
                    }
                    None => return Ok(MoveRequest::NoMove),
                }
            }
            Selection::NoLegalMoves => return Ok(MoveRequest::NoMove),
        };

        Ok(MoveRequest::Notation(format(&mv)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
