use crate::core::notation::format;
use crate::core::GameState;
use crate::logic::legal_moves;
use crate::player::{MoveRequest, PlayerController};
use rand::seq::SliceRandom;

/// 合法手から一様ランダムに選ぶ (ベースライン用)
pub struct RandomAI {
    pub name: String,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, state: &GameState) -> anyhow::Result<MoveRequest> {
        let moves = legal_moves(state)?;
        let mut rng = rand::thread_rng();
        Ok(match moves.choose(&mut rng) {
            Some(mv) => MoveRequest::Notation(format(mv)),
            None => MoveRequest::NoMove,
        })
    }
}
